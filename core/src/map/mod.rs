pub mod cluster;
pub mod preview;
pub mod projection;

pub use cluster::{cluster_containing, detect_clusters, Cluster, ClusterMember};
pub use preview::{ClusterPreview, HoverPreview, PreviewCard};
pub use projection::{GeoPoint, Projector, ScreenPoint};
