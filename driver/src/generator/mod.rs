pub mod cities;
pub mod travel;
