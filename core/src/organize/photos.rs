use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{Dated, Photo, Visit, VisitId};

/// Newest-first ordering on optional ISO dates; undated always sorts last.
///
/// ISO `YYYY-MM-DD` strings sort lexicographically in calendar order, so a
/// reversed string comparison is a reversed chronological comparison.
pub fn compare_dates(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable newest-first sort. Equal dates keep their input order.
pub fn sort_by_date_descending<T: Dated + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_dates(a.date(), b.date()));
    sorted
}

/// A photo together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef {
    pub photo: Photo,
    pub visit: VisitId,
    /// Position of the photo inside its visit's original photo list.
    pub original_index: usize,
}

impl Dated for PhotoRef {
    fn date(&self) -> Option<&str> {
        self.photo.date()
    }
}

impl PhotoRef {
    pub fn path(&self) -> &str {
        &self.photo.path
    }

    /// Every photo of one visit, in original order.
    pub fn from_visit(id: VisitId, visit: &Visit) -> Vec<PhotoRef> {
        visit
            .photos
            .iter()
            .enumerate()
            .map(|(original_index, photo)| PhotoRef {
                photo: photo.clone(),
                visit: id,
                original_index,
            })
            .collect()
    }
}

/// Every dated photo across every visit, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalPhotoIndex {
    entries: Vec<PhotoRef>,
}

impl GlobalPhotoIndex {
    pub fn entries(&self) -> &[PhotoRef] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PhotoRef> {
        self.entries.get(index)
    }

    /// Position of the first entry whose photo path matches.
    pub fn position_of(&self, path: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.path() == path)
    }
}

pub fn build_global_index(visits: &[Visit]) -> GlobalPhotoIndex {
    let dated: Vec<PhotoRef> = visits
        .iter()
        .enumerate()
        .flat_map(|(idx, visit)| PhotoRef::from_visit(VisitId(idx), visit))
        .filter(|entry| entry.date().is_some())
        .collect();

    GlobalPhotoIndex {
        entries: sort_by_date_descending(&dated),
    }
}
