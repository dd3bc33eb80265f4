use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Photo, Visit, VisitId};
use crate::organize::photos::compare_dates;

/// One sidebar row: the photos a single visit took on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub visit: VisitId,
    pub date: String,
    /// Photos sharing `date`, in the visit's original order.
    pub photos: Vec<Photo>,
    /// Index of the first of those photos in the visit's photo list.
    pub first_index: usize,
}

impl TimelineEntry {
    pub fn first_photo(&self) -> Option<&Photo> {
        self.photos.first()
    }
}

/// Builds the newest-first timeline. Undated photos never appear.
pub fn build_timeline(visits: &[Visit]) -> Vec<TimelineEntry> {
    let mut entries = Vec::new();

    for (idx, visit) in visits.iter().enumerate() {
        let id = VisitId(idx);
        let mut by_date: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<TimelineEntry> = Vec::new();

        for (photo_index, photo) in visit.photos.iter().enumerate() {
            let Some(date) = photo.date.as_deref() else {
                continue;
            };
            match by_date.get(date) {
                Some(&slot) => groups[slot].photos.push(photo.clone()),
                None => {
                    by_date.insert(date, groups.len());
                    groups.push(TimelineEntry {
                        visit: id,
                        date: date.to_string(),
                        photos: vec![photo.clone()],
                        first_index: photo_index,
                    });
                }
            }
        }

        entries.extend(groups);
    }

    entries.sort_by(|a, b| compare_dates(Some(&a.date), Some(&b.date)));
    entries
}

/// Position of the newest entry belonging to `visit`, used to highlight the
/// timeline row matching an open gallery.
pub fn entry_for_visit(entries: &[TimelineEntry], visit: VisitId) -> Option<usize> {
    entries.iter().position(|entry| entry.visit == visit)
}
