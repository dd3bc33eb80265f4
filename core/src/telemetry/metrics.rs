use std::sync::Mutex;

use serde::Serialize;

pub struct MetricsRecorder {
    inner: Mutex<ViewerMetrics>,
}

/// Counters describing how a viewer has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewerMetrics {
    pub opens: usize,
    pub navigations: usize,
    pub autoplay_ticks: usize,
    /// Requests that resolved to a no-op.
    pub ignored: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ViewerMetrics::default()),
        }
    }

    pub fn record_open(&self) {
        self.update(|metrics| metrics.opens += 1);
    }

    pub fn record_navigation(&self) {
        self.update(|metrics| metrics.navigations += 1);
    }

    pub fn record_tick(&self) {
        self.update(|metrics| metrics.autoplay_ticks += 1);
    }

    pub fn record_ignored(&self) {
        self.update(|metrics| metrics.ignored += 1);
    }

    pub fn snapshot(&self) -> ViewerMetrics {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            ViewerMetrics::default()
        }
    }

    fn update(&self, apply: impl FnOnce(&mut ViewerMetrics)) {
        if let Ok(mut metrics) = self.inner.lock() {
            apply(&mut metrics);
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
