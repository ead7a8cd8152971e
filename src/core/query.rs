//! # Query Engine
//!
//! Stateless filters and lookups over the catalog. Nothing here mutates the
//! catalog; every function returns references (or ids) into it, in catalog
//! order.

use crate::catalog::{Catalog, CityFilter, Named, University};

/// Minimum length (in characters) of a search term that triggers a search.
/// Anything shorter resets the working set to the full catalog.
pub const MIN_SEARCH_LEN: usize = 2;

/// How a raw search box value should be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Too short to search: show the full catalog.
    Reset,
    /// Lowercased term to match as a substring.
    Term(String),
}

impl SearchQuery {
    pub fn parse(raw: &str) -> SearchQuery {
        let term = raw.to_lowercase();
        if term.chars().count() < MIN_SEARCH_LEN {
            SearchQuery::Reset
        } else {
            SearchQuery::Term(term)
        }
    }
}

/// Universities located in the filtered city. `CityFilter::All` yields the
/// whole catalog.
pub fn filter_by_city(catalog: &Catalog, filter: CityFilter) -> Vec<&University> {
    catalog
        .universities()
        .iter()
        .filter(|uni| filter.matches(uni.city()))
        .collect()
}

/// Universities whose own name, or any faculty or department name beneath
/// them, contains `term` (case-insensitive). Each university appears at most
/// once.
pub fn filter_by_search<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a University> {
    let term = term.to_lowercase();
    catalog
        .universities()
        .iter()
        .filter(|uni| university_matches(uni, &term))
        .collect()
}

/// Applies the search box contract: short terms reset, longer terms search.
pub fn search<'a>(catalog: &'a Catalog, raw: &str) -> Vec<&'a University> {
    match SearchQuery::parse(raw) {
        SearchQuery::Reset => catalog.universities().iter().collect(),
        SearchQuery::Term(term) => filter_by_search(catalog, &term),
    }
}

/// `term` must already be lowercased.
fn university_matches(uni: &University, term: &str) -> bool {
    contains(uni.name(), term)
        || uni.faculties().iter().any(|faculty| {
            contains(faculty.name(), term)
                || faculty
                    .departments()
                    .iter()
                    .any(|dept| contains(dept.name(), term))
        })
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// First item whose display name equals `name` exactly (case-sensitive).
///
/// Duplicate names are indistinguishable here; prefer id-based lookups
/// (`Catalog::university`, `University::faculty`) where an id is available.
pub fn find_by_name<'a, T, I>(items: I, name: &str) -> Option<&'a T>
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().find(|item| item.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{City, initialize_data};
    use std::sync::Arc;

    fn names<'a>(unis: &[&'a University]) -> Vec<&'a str> {
        unis.iter().map(|u| u.name()).collect()
    }

    #[test]
    fn test_filter_by_city_all_returns_catalog_in_order() {
        let catalog = initialize_data();
        let all = filter_by_city(&catalog, CityFilter::All);
        assert_eq!(all.len(), catalog.len());
        for (found, expected) in all.iter().zip(catalog.universities()) {
            assert_eq!(found.id(), expected.id());
        }
    }

    #[test]
    fn test_filter_by_city_only_matching() {
        let catalog = initialize_data();
        let peja = filter_by_city(&catalog, CityFilter::Only(City::Peja));
        assert_eq!(names(&peja), vec!["Haxhi Zeka University"]);
    }

    #[test]
    fn test_filter_by_city_without_universities_is_empty() {
        let catalog = initialize_data();
        assert!(filter_by_city(&catalog, CityFilter::Only(City::Lipjan)).is_empty());
    }

    #[test]
    fn test_search_matches_department_name() {
        let catalog = initialize_data();
        let hits = filter_by_search(&catalog, "cybersecurity");
        // Every university carries the computer science faculty.
        assert_eq!(hits.len(), 6);
        assert!(!names(&hits).contains(&"University of Gjakova \"Fehmi Agani\""));
    }

    #[test]
    fn test_search_matches_university_name_case_insensitively() {
        let catalog = initialize_data();
        let hits = filter_by_search(&catalog, "HAXHI");
        assert_eq!(names(&hits), vec!["Haxhi Zeka University"]);
    }

    #[test]
    fn test_search_matches_faculty_name() {
        let catalog = initialize_data();
        let hits = filter_by_search(&catalog, "faculty of medicine");
        assert_eq!(
            names(&hits),
            vec![
                "University of Prishtina \"Hasan Prishtina\"",
                "University of Gjakova \"Fehmi Agani\""
            ]
        );
    }

    #[test]
    fn test_search_never_duplicates_a_university() {
        let catalog = initialize_data();
        // Matches the university name, faculty names and department names of Prishtina.
        let hits = filter_by_search(&catalog, "i");
        let mut ids: Vec<_> = hits.iter().map(|u| u.id()).collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert_eq!(before, catalog.len());
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let catalog = initialize_data();
        assert!(filter_by_search(&catalog, "astrophysics").is_empty());
    }

    #[test]
    fn test_search_query_parse() {
        assert_eq!(SearchQuery::parse(""), SearchQuery::Reset);
        assert_eq!(SearchQuery::parse("x"), SearchQuery::Reset);
        assert_eq!(SearchQuery::parse("ë"), SearchQuery::Reset);
        assert_eq!(SearchQuery::parse("La"), SearchQuery::Term("la".to_string()));
    }

    #[test]
    fn test_short_search_resets_to_full_catalog() {
        let catalog = initialize_data();
        assert_eq!(search(&catalog, "").len(), catalog.len());
        // A one-character substring search for "x" would match only a few.
        assert_eq!(search(&catalog, "x").len(), catalog.len());
        assert_eq!(search(&catalog, "xh").len(), 1);
    }

    #[test]
    fn test_find_by_name_university() {
        let catalog = initialize_data();
        let found = find_by_name(catalog.universities(), "Haxhi Zeka University");
        assert_eq!(found.map(|u| u.city()), Some(City::Peja));
        assert!(find_by_name(catalog.universities(), "haxhi zeka university").is_none());
    }

    #[test]
    fn test_find_by_name_faculty() {
        let catalog = initialize_data();
        let uni = &catalog.universities()[1];
        let found = find_by_name(uni.faculties().iter().map(Arc::as_ref), "Faculty of Law");
        assert_eq!(found.map(|f| f.departments().len()), Some(2));
        assert!(find_by_name(uni.faculties().iter().map(Arc::as_ref), "Faculty of Arts").is_none());
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        use crate::catalog::{Catalog, UniversityId};
        let a = University::new(UniversityId(0), "Twin", City::Peja, vec![]);
        let b = University::new(UniversityId(1), "Twin", City::Gjilan, vec![]);
        let catalog = Catalog::new(vec![a, b], vec![]);
        let found = find_by_name(catalog.universities(), "Twin");
        assert_eq!(found.map(|u| u.id()), Some(UniversityId(0)));
    }

    #[test]
    fn test_search_results_outlive_the_query_text() {
        let catalog = initialize_data();
        let hits = {
            let typed = String::from("Law");
            search(&catalog, &typed)
        };
        assert_eq!(hits.len(), 4);
    }
}
