pub mod photos;
pub mod stats;
pub mod timeline;

pub use photos::{build_global_index, compare_dates, sort_by_date_descending, GlobalPhotoIndex, PhotoRef};
pub use stats::TravelStats;
pub use timeline::{build_timeline, entry_for_visit, TimelineEntry};
