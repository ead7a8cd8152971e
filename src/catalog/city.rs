//! # Cities
//!
//! The fixed set of cities that host universities, plus the filter value the
//! browser uses to scope its working set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display label of the "no city filter" sentinel.
pub const ALL_CITIES_LABEL: &str = "All Cities";

/// One of the eight cities known to the catalog.
///
/// Serialized as its display name, since that is what an exported
/// university carries in its `city` field.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Gjilan,
    Ferizaj,
    Prizren,
    Prishtina,
    Peja,
    Gjakova,
    Mitrovica,
    Lipjan,
}

impl City {
    /// All cities, ordered by identifier.
    pub const ALL: [City; 8] = [
        City::Gjilan,
        City::Ferizaj,
        City::Prizren,
        City::Prishtina,
        City::Peja,
        City::Gjakova,
        City::Mitrovica,
        City::Lipjan,
    ];

    /// Stable numeric identifier (1..=8).
    pub fn id(self) -> u8 {
        match self {
            City::Gjilan => 1,
            City::Ferizaj => 2,
            City::Prizren => 3,
            City::Prishtina => 4,
            City::Peja => 5,
            City::Gjakova => 6,
            City::Mitrovica => 7,
            City::Lipjan => 8,
        }
    }

    pub fn from_id(id: u8) -> Option<City> {
        City::ALL.into_iter().find(|city| city.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            City::Gjilan => "Gjilan",
            City::Ferizaj => "Ferizaj",
            City::Prizren => "Prizren",
            City::Prishtina => "Prishtina",
            City::Peja => "Peja",
            City::Gjakova => "Gjakova",
            City::Mitrovica => "Mitrovica",
            City::Lipjan => "Lipjan",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<City> {
        let name = name.trim();
        City::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// City scope of the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CityFilter {
    #[default]
    All,
    Only(City),
}

impl CityFilter {
    /// Every selectable filter value, in the order the browser lists them.
    pub fn choices() -> Vec<CityFilter> {
        std::iter::once(CityFilter::All)
            .chain(City::ALL.into_iter().map(CityFilter::Only))
            .collect()
    }

    /// Parses either the "All Cities" sentinel or a city name.
    pub fn parse(name: &str) -> Option<CityFilter> {
        if name.trim().eq_ignore_ascii_case(ALL_CITIES_LABEL) {
            return Some(CityFilter::All);
        }
        City::from_name(name).map(CityFilter::Only)
    }

    pub fn label(self) -> &'static str {
        match self {
            CityFilter::All => ALL_CITIES_LABEL,
            CityFilter::Only(city) => city.name(),
        }
    }

    pub fn matches(self, city: City) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::Only(wanted) => wanted == city,
        }
    }
}

impl fmt::Display for CityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_city_ids_are_unique_and_sequential() {
        let ids: Vec<u8> = City::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let names: HashSet<&str> = City::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_city_from_id_round_trip() {
        for city in City::ALL {
            assert_eq!(City::from_id(city.id()), Some(city));
        }
        assert_eq!(City::from_id(0), None);
        assert_eq!(City::from_id(9), None);
    }

    #[test]
    fn test_city_from_name_is_case_insensitive() {
        assert_eq!(City::from_name("prishtina"), Some(City::Prishtina));
        assert_eq!(City::from_name("  PEJA "), Some(City::Peja));
        assert_eq!(City::from_name("Tirana"), None);
    }

    #[test]
    fn test_city_serializes_as_display_name() {
        let json = serde_json::to_string(&City::Gjakova).unwrap();
        assert_eq!(json, "\"Gjakova\"");
        let back: City = serde_json::from_str("\"Mitrovica\"").unwrap();
        assert_eq!(back, City::Mitrovica);
    }

    #[test]
    fn test_city_filter_parse() {
        assert_eq!(CityFilter::parse("All Cities"), Some(CityFilter::All));
        assert_eq!(CityFilter::parse("all cities"), Some(CityFilter::All));
        assert_eq!(
            CityFilter::parse("Ferizaj"),
            Some(CityFilter::Only(City::Ferizaj))
        );
        assert_eq!(CityFilter::parse("Nowhere"), None);
    }

    #[test]
    fn test_city_filter_choices_start_with_all() {
        let choices = CityFilter::choices();
        assert_eq!(choices.len(), 9);
        assert_eq!(choices[0], CityFilter::All);
        assert_eq!(choices[1].label(), "Gjilan");
    }

    #[test]
    fn test_city_filter_matches() {
        assert!(CityFilter::All.matches(City::Lipjan));
        assert!(CityFilter::Only(City::Peja).matches(City::Peja));
        assert!(!CityFilter::Only(City::Peja).matches(City::Prizren));
    }
}
