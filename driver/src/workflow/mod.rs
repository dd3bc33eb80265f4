pub mod config;
pub mod projection;
pub mod runner;
