use crate::workflow::config::AtlasConfig;
use crate::workflow::projection::WebMercator;
use anyhow::Context;
use serde::Serialize;
use std::sync::Arc;
use travelcore::map::{ClusterPreview, HoverPreview};
use travelcore::organize::{TimelineEntry, TravelStats};
use travelcore::{build_global_index, build_timeline, detect_clusters, Cluster, TravelLog, Visit};

#[derive(Debug, Clone, Serialize)]
pub struct AtlasSummary {
    pub stats: TravelStats,
    pub global_photos: usize,
    pub timeline: Vec<TimelineEntry>,
    pub clusters: Vec<Cluster>,
}

impl AtlasSummary {
    pub fn multi_clusters(&self) -> usize {
        self.clusters.iter().filter(|c| c.is_multi()).count()
    }
}

/// A cluster with the card the map shows on hover.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterReport {
    pub cluster: Cluster,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<ClusterPreview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverPreview>,
}

#[derive(Clone)]
pub struct Runner {
    config: AtlasConfig,
    visits: Arc<Vec<Visit>>,
}

impl Runner {
    pub fn new(config: AtlasConfig, log: TravelLog) -> Self {
        Self {
            config,
            visits: Arc::new(log.visits),
        }
    }

    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    pub fn visits(&self) -> Arc<Vec<Visit>> {
        self.visits.clone()
    }

    pub fn summarize(&self) -> anyhow::Result<AtlasSummary> {
        let clusters = self
            .clusters_at(self.config.map.zoom)
            .context("clustering markers for summary")?;

        Ok(AtlasSummary {
            stats: TravelStats::from_visits(&self.visits),
            global_photos: build_global_index(&self.visits).len(),
            timeline: build_timeline(&self.visits),
            clusters,
        })
    }

    /// Clusters for the configured map center at an arbitrary zoom level.
    pub fn clusters_at(&self, zoom: f64) -> anyhow::Result<Vec<Cluster>> {
        let mut view = self.config.map.clone();
        view.zoom = zoom;
        let projection = WebMercator::new(&view);
        let clusters = detect_clusters(
            &self.visits,
            &projection,
            view.zoom_scale(),
            self.config.viewer.cluster_threshold_px,
        )
        .with_context(|| format!("detecting clusters at zoom {zoom}"))?;
        Ok(clusters)
    }

    pub fn cluster_reports(&self, zoom: f64) -> anyhow::Result<Vec<ClusterReport>> {
        let limit = self.config.viewer.preview_limit;
        let reports = self
            .clusters_at(zoom)?
            .into_iter()
            .map(|cluster| {
                let (group, hover) = if cluster.is_multi() {
                    (Some(ClusterPreview::for_cluster(&cluster, &self.visits)), None)
                } else {
                    let hover = cluster.visits().next().and_then(|id| {
                        self.visits
                            .get(id.index())
                            .and_then(|visit| HoverPreview::for_visit(id, visit, limit))
                    });
                    (None, hover)
                };
                ClusterReport {
                    cluster,
                    group,
                    hover,
                }
            })
            .collect();
        Ok(reports)
    }
}
