//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::catalog::{
    Catalog, City, Department, Faculty, FacultyId, University, UniversityId, initialize_data,
};
use crate::core::state::App;

/// Creates a test App over the full fixed catalog.
pub fn test_app() -> App {
    App::new(Arc::new(initialize_data()))
}

/// Two universities in Peja with one and two faculties.
pub fn twin_catalog() -> Catalog {
    let law = Arc::new(Faculty::new(
        FacultyId(0),
        "Faculty of Law",
        vec![Department::new("Law", &["Civil Law"])],
    ));
    let arts = Arc::new(Faculty::new(
        FacultyId(1),
        "Faculty of Arts",
        vec![Department::new("Music", &["Music Theory", "Composition"])],
    ));
    let universities = vec![
        University::new(UniversityId(0), "First", City::Peja, vec![law.clone()]),
        University::new(
            UniversityId(1),
            "Second",
            City::Peja,
            vec![law.clone(), arts.clone()],
        ),
    ];
    Catalog::new(universities, vec![law, arts])
}
