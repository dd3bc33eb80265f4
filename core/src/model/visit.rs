use serde::{Deserialize, Deserializer, Serialize};

use crate::map::GeoPoint;

/// Position of a visit inside the loaded visit collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitId(pub usize);

impl VisitId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Anything that carries an optional ISO calendar date.
pub trait Dated {
    fn date(&self) -> Option<&str>;
}

/// A single photo reference, normalized from either the legacy bare-path form
/// or the structured `{path, date}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Photo {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            date: None,
        }
    }

    /// A blank date is treated as no date.
    pub fn dated(path: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            date: normalize_date(Some(date.into())),
        }
    }
}

impl Dated for Photo {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPhoto {
    Path(String),
    Record {
        path: String,
        #[serde(default)]
        date: Option<String>,
    },
}

fn normalize_date(date: Option<String>) -> Option<String> {
    date.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}

impl<'de> Deserialize<'de> for Photo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawPhoto::deserialize(deserializer)? {
            RawPhoto::Path(path) => Photo { path, date: None },
            RawPhoto::Record { path, date } => Photo {
                path,
                date: normalize_date(date),
            },
        })
    }
}

/// One visited location with its (unordered) photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Visit {
    pub fn title(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }

    pub fn has_photos(&self) -> bool {
        !self.photos.is_empty()
    }
}
