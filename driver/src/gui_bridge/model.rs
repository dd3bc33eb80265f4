use serde::{Deserialize, Serialize};
use travelcore::GallerySnapshot;

/// Body of `POST /gallery/open`. Without a visit the global gallery opens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenRequest {
    #[serde(default)]
    pub visit: Option<usize>,
    #[serde(default)]
    pub start: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
    pub direction: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpRequest {
    pub index: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterQuery {
    pub zoom: Option<f64>,
}

/// Reply to every gallery mutation: whether it applied, and the state after it.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryReply {
    pub changed: bool,
    pub gallery: GallerySnapshot,
}
