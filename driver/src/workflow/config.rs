use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use travelcore::ViewerConfig;

/// Map viewport the driver projects markers into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapView {
    pub zoom: f64,
    pub center_lat: f64,
    pub center_lng: f64,
    pub tile_size: f64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            zoom: 2.0,
            center_lat: 20.0,
            center_lng: 0.0,
            tile_size: 256.0,
        }
    }
}

/// Zoom level the cluster threshold is calibrated for.
const BASE_ZOOM: f64 = 2.0;

impl MapView {
    /// Magnification relative to the base zoom; divides the cluster threshold.
    pub fn zoom_scale(&self) -> f64 {
        2f64.powf(self.zoom - BASE_ZOOM)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Travel-log JSON; a synthetic log is generated when absent.
    pub data: Option<PathBuf>,
    pub map: MapView,
    pub bind: SocketAddr,
    pub viewer: ViewerConfig,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            data: None,
            map: MapView::default(),
            bind: SocketAddr::from(([127, 0, 0, 1], 9000)),
            viewer: ViewerConfig::default(),
        }
    }
}

impl AtlasConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading atlas config {}", path_ref.display()))?;
        let config: AtlasConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing atlas config {}", path_ref.display()))?;
        config
            .viewer
            .validate()
            .with_context(|| format!("validating atlas config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn with_zoom(mut self, zoom: Option<f64>) -> Self {
        if let Some(zoom) = zoom {
            self.map.zoom = zoom;
        }
        self
    }

    pub fn with_data(mut self, data: Option<PathBuf>) -> Self {
        if data.is_some() {
            self.data = data;
        }
        self
    }
}
