//! Visit clustering and gallery-navigation core for the travel atlas.
//!
//! The crate turns an immutable collection of visits into the derived views a
//! map front-end needs: date-sorted photo sequences, the sidebar timeline,
//! marker clusters under the current projection, and a navigable gallery with
//! an autoplay slideshow. Rendering, projection, and asset loading stay with
//! the caller.

pub mod gallery;
pub mod map;
pub mod model;
pub mod organize;
pub mod prelude;
pub mod telemetry;

pub use gallery::{AutoplayHandle, GalleryMode, GalleryNavigator, GallerySnapshot};
pub use map::{detect_clusters, Cluster, GeoPoint, Projector, ScreenPoint};
pub use model::{Photo, TravelLog, Visit, VisitId};
pub use organize::{build_global_index, build_timeline, sort_by_date_descending};
pub use prelude::{CoreError, CoreResult, ViewerConfig};
