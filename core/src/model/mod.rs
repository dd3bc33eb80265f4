pub mod assets;
pub mod travel_log;
pub mod visit;

pub use travel_log::TravelLog;
pub use visit::{Dated, Photo, Visit, VisitId};
