//! Country and city reference data for the location selects

/// Countries in display order, each with its ordered city list
pub const COUNTRY_CATALOG: &[(&str, &[&str])] = &[
    ("India", &["Delhi", "Mumbai", "Bangalore", "Hyderabad"]),
    ("USA", &["New York", "San Francisco", "Chicago"]),
    ("UK", &["London", "Manchester", "Liverpool"]),
];

/// All selectable countries
pub fn countries() -> Vec<&'static str> {
    COUNTRY_CATALOG.iter().map(|(country, _)| *country).collect()
}

/// Cities offered for a country; empty when the country is unknown or unset
pub fn cities_for(country: &str) -> &'static [&'static str] {
    COUNTRY_CATALOG
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

pub fn offers_city(country: &str, city: &str) -> bool {
    cities_for(country).contains(&city)
}
