use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::model::visit::{Visit, VisitId};
use crate::prelude::CoreResult;

/// The ingested travel-log document: an ordered collection of visits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelLog {
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl TravelLog {
    pub fn new(visits: Vec<Visit>) -> Self {
        Self { visits }
    }

    pub fn from_json_str(contents: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> CoreResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn visit(&self, id: VisitId) -> Option<&Visit> {
        self.visits.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::CoreError;

    #[test]
    fn parses_document_with_mixed_photos() {
        let log = TravelLog::from_json_str(
            r#"{"visits": [
                {"city": "Kyoto", "country": "Japan", "countryCode": "JP", "lat": 35.0, "lng": 135.7,
                 "photos": ["kyoto/1.jpg", {"path": "kyoto/2.jpg", "date": "2019-04-02"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(log.len(), 1);
        let visit = log.visit(VisitId(0)).unwrap();
        assert_eq!(visit.photos.len(), 2);
        assert!(log.visit(VisitId(1)).is_none());
    }

    #[test]
    fn missing_visits_key_yields_empty_log() {
        let log = TravelLog::from_json_str("{}").unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = TravelLog::from_json_str(r#"{"visits": [{"city": 1}]}"#).unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }
}
