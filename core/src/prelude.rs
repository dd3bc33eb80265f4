use serde::{Deserialize, Serialize};

/// Tunables shared by the gallery, the cluster detector, and the previews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Number of thumbnails visible at once in a long global sequence.
    pub thumbnail_window: usize,
    /// How many thumbnails precede the active one when the window recenters.
    pub window_lead: usize,
    pub autoplay_interval_ms: u64,
    /// Marker overlap threshold in screen pixels at zoom scale 1.
    pub cluster_threshold_px: f64,
    pub preview_limit: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            thumbnail_window: 8,
            window_lead: 4,
            autoplay_interval_ms: 4000,
            cluster_threshold_px: 30.0,
            preview_limit: 5,
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.thumbnail_window == 0 {
            return Err(CoreError::InvalidConfig(
                "thumbnail_window must be at least 1".into(),
            ));
        }
        if self.window_lead >= self.thumbnail_window {
            return Err(CoreError::InvalidConfig(format!(
                "window_lead {} must be smaller than thumbnail_window {}",
                self.window_lead, self.thumbnail_window
            )));
        }
        if self.autoplay_interval_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "autoplay_interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Common error type for the fallible edges of the core.
///
/// Gallery operations never produce one of these; they report "nothing
/// happened" through their return values instead.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("invalid zoom scale {0}: must be finite and positive")]
    InvalidZoomScale(f64),
    #[error("travel log parse failure: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.thumbnail_window, 8);
        assert_eq!(config.window_lead, 4);
    }

    #[test]
    fn lead_must_fit_inside_window() {
        let config = ViewerConfig {
            thumbnail_window: 4,
            window_lead: 4,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: ViewerConfig = serde_json::from_str(r#"{"preview_limit": 3}"#).unwrap();
        assert_eq!(config.preview_limit, 3);
        assert_eq!(config.autoplay_interval_ms, 4000);
    }
}
