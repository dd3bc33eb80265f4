use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::Visit;

/// Headline numbers shown next to the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TravelStats {
    pub country_codes: BTreeSet<String>,
    pub cities: usize,
    pub photos: usize,
    pub dated_photos: usize,
}

impl TravelStats {
    pub fn from_visits(visits: &[Visit]) -> Self {
        let country_codes = visits
            .iter()
            .filter_map(|visit| visit.country_code.as_deref())
            .filter(|code| !code.is_empty())
            .map(str::to_ascii_uppercase)
            .collect();
        let photos = visits.iter().map(|visit| visit.photos.len()).sum();
        let dated_photos = visits
            .iter()
            .flat_map(|visit| visit.photos.iter())
            .filter(|photo| photo.date.is_some())
            .count();

        Self {
            country_codes,
            cities: visits.len(),
            photos,
            dated_photos,
        }
    }

    pub fn country_count(&self) -> usize {
        self.country_codes.len()
    }

    /// Whether the country-highlight overlay should fill `code`.
    pub fn is_visited(&self, code: &str) -> bool {
        self.country_codes.contains(&code.to_ascii_uppercase())
    }
}
