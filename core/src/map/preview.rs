use serde::Serialize;

use crate::map::cluster::Cluster;
use crate::model::{Photo, Visit, VisitId};
use crate::organize::sort_by_date_descending;

/// Hover card for a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverPreview {
    pub visit: VisitId,
    pub title: String,
    /// Newest photos first, at most the configured limit.
    pub photos: Vec<Photo>,
    /// Photos left out of the card, shown as `+N`.
    pub remaining: usize,
}

impl HoverPreview {
    /// `None` when the visit has nothing to show.
    pub fn for_visit(id: VisitId, visit: &Visit, limit: usize) -> Option<Self> {
        if !visit.has_photos() {
            return None;
        }
        let mut photos = sort_by_date_descending(&visit.photos);
        let remaining = photos.len().saturating_sub(limit);
        photos.truncate(limit);

        Some(Self {
            visit: id,
            title: visit.title(),
            photos,
            remaining,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewCard {
    pub visit: VisitId,
    pub title: String,
    pub photo_count: usize,
    pub cover: Option<Photo>,
}

/// Group card for overlapping markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterPreview {
    pub cards: Vec<PreviewCard>,
}

impl ClusterPreview {
    pub fn for_cluster(cluster: &Cluster, visits: &[Visit]) -> Self {
        let cards = cluster
            .visits()
            .filter_map(|id| visits.get(id.index()).map(|visit| (id, visit)))
            .map(|(id, visit)| PreviewCard {
                visit: id,
                title: visit.title(),
                photo_count: visit.photos.len(),
                cover: sort_by_date_descending(&visit.photos).into_iter().next(),
            })
            .collect();
        Self { cards }
    }

    pub fn total_photos(&self) -> usize {
        self.cards.iter().map(|card| card.photo_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::cluster::ClusterMember;
    use crate::map::ScreenPoint;

    fn visit(city: &str, photos: Vec<Photo>) -> Visit {
        Visit {
            city: city.into(),
            country: "Peru".into(),
            country_code: Some("PE".into()),
            lat: -13.5,
            lng: -71.9,
            photos,
        }
    }

    #[test]
    fn hover_preview_caps_and_counts_remaining() {
        let photos = (0..7)
            .map(|i| Photo::dated(format!("cusco/{i}.jpg"), format!("2019-08-0{}", i + 1)))
            .collect();
        let preview = HoverPreview::for_visit(VisitId(0), &visit("Cusco", photos), 5).unwrap();
        assert_eq!(preview.title, "Cusco, Peru");
        assert_eq!(preview.photos.len(), 5);
        assert_eq!(preview.remaining, 2);
        assert_eq!(preview.photos[0].path, "cusco/6.jpg");
    }

    #[test]
    fn hover_preview_needs_photos() {
        assert!(HoverPreview::for_visit(VisitId(0), &visit("Puno", vec![]), 5).is_none());
    }

    #[test]
    fn cluster_preview_lists_each_member() {
        let visits = vec![
            visit("Lima", vec![Photo::new("lima/a.jpg"), Photo::dated("lima/b.jpg", "2019-07-30")]),
            visit("Callao", vec![]),
        ];
        let cluster = Cluster {
            members: vec![
                ClusterMember { visit: VisitId(0), screen: ScreenPoint::default() },
                ClusterMember { visit: VisitId(1), screen: ScreenPoint::new(2.0, 2.0) },
            ],
        };
        let preview = ClusterPreview::for_cluster(&cluster, &visits);
        assert_eq!(preview.cards.len(), 2);
        assert_eq!(preview.cards[0].cover.as_ref().map(|p| p.path.as_str()), Some("lima/b.jpg"));
        assert_eq!(preview.cards[1].cover, None);
        assert_eq!(preview.total_photos(), 2);
    }
}
