use serde::Serialize;

use crate::map::projection::{Projector, ScreenPoint};
use crate::model::{Visit, VisitId};
use crate::prelude::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClusterMember {
    pub visit: VisitId,
    pub screen: ScreenPoint,
}

/// Visits whose markers overlap on screen at the current zoom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub members: Vec<ClusterMember>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// More than one location shares this spot; present it as a group.
    pub fn is_multi(&self) -> bool {
        self.members.len() > 1
    }

    pub fn contains(&self, visit: VisitId) -> bool {
        self.members.iter().any(|member| member.visit == visit)
    }

    pub fn visits(&self) -> impl Iterator<Item = VisitId> + '_ {
        self.members.iter().map(|member| member.visit)
    }
}

/// Partitions `visits` into clusters of overlapping markers.
///
/// The pixel threshold shrinks as the map zooms in: the effective threshold is
/// `base_threshold_px / zoom_scale`. A visit joins a cluster when it lies
/// within the threshold of any member already in it, so chains of close
/// neighbours end up together. Every visit lands in exactly one cluster, and
/// clusters come out in order of their first member.
pub fn detect_clusters<P: Projector + ?Sized>(
    visits: &[Visit],
    projector: &P,
    zoom_scale: f64,
    base_threshold_px: f64,
) -> CoreResult<Vec<Cluster>> {
    if !zoom_scale.is_finite() || zoom_scale <= 0.0 {
        return Err(CoreError::InvalidZoomScale(zoom_scale));
    }
    let threshold = base_threshold_px / zoom_scale;

    let projected: Vec<ScreenPoint> = visits
        .iter()
        .map(|visit| projector.project(visit.location()))
        .collect();
    let mut assigned = vec![false; visits.len()];
    let mut clusters = Vec::new();

    for seed in 0..visits.len() {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;
        let mut members = vec![seed];

        // Grow until no unassigned visit is near any member.
        let mut cursor = 0;
        while cursor < members.len() {
            let anchor = projected[members[cursor]];
            for candidate in 0..visits.len() {
                if !assigned[candidate] && anchor.distance(&projected[candidate]) < threshold {
                    assigned[candidate] = true;
                    members.push(candidate);
                }
            }
            cursor += 1;
        }

        clusters.push(Cluster {
            members: members
                .into_iter()
                .map(|idx| ClusterMember {
                    visit: VisitId(idx),
                    screen: projected[idx],
                })
                .collect(),
        });
    }

    Ok(clusters)
}

/// The cluster a hovered or clicked visit belongs to.
pub fn cluster_containing(clusters: &[Cluster], visit: VisitId) -> Option<&Cluster> {
    clusters.iter().find(|cluster| cluster.contains(visit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::projection::GeoPoint;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn at(lng: f64, lat: f64) -> Visit {
        Visit {
            city: format!("{lng}:{lat}"),
            country: "Grid".into(),
            country_code: None,
            lat,
            lng,
            photos: Vec::new(),
        }
    }

    // Longitude maps to x, latitude to y, one pixel per degree.
    fn identity(point: GeoPoint) -> ScreenPoint {
        ScreenPoint::new(point.lng, point.lat)
    }

    #[test]
    fn zoom_shrinks_effective_threshold() {
        let visits = vec![at(0.0, 0.0), at(3.0, 4.0)];

        let wide = detect_clusters(&visits, &identity, 1.0, 9.0).unwrap();
        assert_eq!(wide.len(), 1);
        assert!(wide[0].is_multi());

        let tight = detect_clusters(&visits, &identity, 3.0, 9.0).unwrap();
        assert_eq!(tight.len(), 2);
        assert!(tight.iter().all(|c| !c.is_multi()));
    }

    #[test]
    fn chains_join_through_intermediate_members() {
        // Each neighbour is 6px apart; the ends are 12px apart.
        let visits = vec![at(0.0, 0.0), at(6.0, 0.0), at(12.0, 0.0), at(100.0, 0.0)];
        let clusters = detect_clusters(&visits, &identity, 1.0, 8.0).unwrap();
        assert_eq!(clusters.len(), 2);
        let ids: Vec<_> = clusters[0].visits().collect();
        assert_eq!(ids, vec![VisitId(0), VisitId(1), VisitId(2)]);
        assert_eq!(cluster_containing(&clusters, VisitId(3)).map(Cluster::len), Some(1));
    }

    #[test]
    fn clusters_partition_the_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let visits: Vec<Visit> = (0..60)
            .map(|_| at(rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0)))
            .collect();
        let clusters = detect_clusters(&visits, &identity, 1.5, 30.0).unwrap();

        let total: usize = clusters.iter().map(Cluster::len).sum();
        assert_eq!(total, visits.len());
        let mut seen = vec![0usize; visits.len()];
        for visit in clusters.iter().flat_map(Cluster::visits) {
            seen[visit.index()] += 1;
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn empty_input_and_bad_zoom() {
        assert!(detect_clusters(&[], &identity, 1.0, 10.0).unwrap().is_empty());
        let visits = vec![at(0.0, 0.0)];
        assert!(matches!(
            detect_clusters(&visits, &identity, 0.0, 10.0),
            Err(CoreError::InvalidZoomScale(_))
        ));
        assert!(detect_clusters(&visits, &identity, f64::NAN, 10.0).is_err());
    }
}
