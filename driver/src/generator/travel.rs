use crate::generator::cities::{slug, CITIES};
use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use travelcore::{Photo, TravelLog, Visit};

/// Configuration for generating synthetic travel logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub visits: usize,
    pub max_photos: usize,
    /// Share of photos stored in the legacy bare-path form (never dated).
    pub legacy_share: f64,
    /// Share of structured photos left without a date.
    pub undated_share: f64,
    /// Coordinate jitter in degrees around the seed city.
    pub jitter_deg: f64,
    pub first_year: u32,
    pub last_year: u32,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            visits: 24,
            max_photos: 12,
            legacy_share: 0.1,
            undated_share: 0.1,
            jitter_deg: 0.05,
            first_year: 2015,
            last_year: 2024,
            seed: 0,
        }
    }
}

fn random_date(rng: &mut StdRng, config: &GeneratorConfig) -> String {
    let year = rng.gen_range(config.first_year..=config.last_year);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    format!("{year:04}-{month:02}-{day:02}")
}

fn build_photos(rng: &mut StdRng, config: &GeneratorConfig, folder: &str) -> Vec<Photo> {
    let count = rng.gen_range(0..=config.max_photos);
    // Photos of one visit cluster around a few trip days.
    let trip_days: Vec<String> = (0..3).map(|_| random_date(rng, config)).collect();

    (0..count)
        .map(|index| {
            let path = format!("{folder}/IMG_{index:04}.jpg");
            if rng.gen_bool(config.legacy_share) {
                Photo::new(path)
            } else if rng.gen_bool(config.undated_share) {
                Photo { path, date: None }
            } else {
                let day = &trip_days[rng.gen_range(0..trip_days.len())];
                Photo::dated(path, day.clone())
            }
        })
        .collect()
}

pub fn build_travel_log_from_config(config: &GeneratorConfig) -> anyhow::Result<TravelLog> {
    ensure!(
        config.first_year <= config.last_year,
        "generator year range {}..={} is empty",
        config.first_year,
        config.last_year
    );
    ensure!(
        (0.0..=1.0).contains(&config.legacy_share) && (0.0..=1.0).contains(&config.undated_share),
        "generator shares must lie within [0, 1]"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let jitter = config.jitter_deg.abs();
    let visits = (0..config.visits)
        .map(|index| {
            let (city, country, code, lat, lng) = CITIES[index % CITIES.len()];
            let folder = format!("{}-{}", slug(city), index / CITIES.len());
            let (dlat, dlng) = if jitter > 0.0 {
                (rng.gen_range(-jitter..jitter), rng.gen_range(-jitter..jitter))
            } else {
                (0.0, 0.0)
            };
            Visit {
                city: city.to_string(),
                country: country.to_string(),
                country_code: Some(code.to_string()),
                lat: lat + dlat,
                lng: lng + dlng,
                photos: build_photos(&mut rng, config, &folder),
            }
        })
        .collect();

    Ok(TravelLog::new(visits))
}

pub fn build_travel_log(visits: usize, seed: u64) -> anyhow::Result<TravelLog> {
    let config = GeneratorConfig {
        visits,
        seed,
        ..Default::default()
    };
    build_travel_log_from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_expected_visit_count() {
        let log = build_travel_log(30, 1).unwrap();
        assert_eq!(log.len(), 30);
        assert!(log.visits.iter().all(|v| v.photos.len() <= 12));
        assert_eq!(log.visits[0].city, "Lisbon");
        assert_eq!(log.visits[CITIES.len()].city, "Lisbon");
    }

    #[test]
    fn generator_is_deterministic_per_seed() {
        assert_eq!(build_travel_log(10, 9).unwrap(), build_travel_log(10, 9).unwrap());
    }

    #[test]
    fn generator_dates_are_iso() {
        let config = GeneratorConfig {
            visits: 8,
            max_photos: 20,
            legacy_share: 0.0,
            undated_share: 0.0,
            seed: 4,
            ..Default::default()
        };
        let log = build_travel_log_from_config(&config).unwrap();
        for photo in log.visits.iter().flat_map(|v| v.photos.iter()) {
            let date = photo.date.as_deref().unwrap();
            assert_eq!(date.len(), 10);
            assert!(date.as_bytes()[4] == b'-' && date.as_bytes()[7] == b'-');
        }
    }

    #[test]
    fn generator_rejects_inverted_years() {
        let config = GeneratorConfig {
            first_year: 2024,
            last_year: 2020,
            ..Default::default()
        };
        assert!(build_travel_log_from_config(&config).is_err());
    }
}
