/// Seed locations for synthetic travel logs: city, country, ISO code, lat, lng.
pub const CITIES: &[(&str, &str, &str, f64, f64)] = &[
    ("Lisbon", "Portugal", "PT", 38.72, -9.14),
    ("Porto", "Portugal", "PT", 41.15, -8.61),
    ("Madrid", "Spain", "ES", 40.42, -3.70),
    ("Paris", "France", "FR", 48.86, 2.35),
    ("Amsterdam", "Netherlands", "NL", 52.37, 4.90),
    ("Berlin", "Germany", "DE", 52.52, 13.40),
    ("Prague", "Czechia", "CZ", 50.08, 14.44),
    ("Istanbul", "Turkey", "TR", 41.01, 28.98),
    ("Kyoto", "Japan", "JP", 35.01, 135.77),
    ("Osaka", "Japan", "JP", 34.69, 135.50),
    ("Hanoi", "Vietnam", "VN", 21.03, 105.85),
    ("Cusco", "Peru", "PE", -13.53, -71.97),
    ("Santiago", "Chile", "CL", -33.45, -70.67),
    ("Cape Town", "South Africa", "ZA", -33.92, 18.42),
];

pub fn slug(city: &str) -> String {
    city.to_ascii_lowercase().replace(' ', "-")
}
