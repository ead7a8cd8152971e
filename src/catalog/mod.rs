//! # Catalog
//!
//! Entity types and the fixed data set they are populated from.
//!
//! - [`city`]: the eight cities and the `CityFilter` sentinel
//! - [`model`]: `Department`, `Faculty`, `University`, `Catalog`
//! - [`data`]: `initialize_data()`, the literal hierarchy

pub mod city;
pub mod data;
pub mod model;

pub use city::{ALL_CITIES_LABEL, City, CityFilter};
pub use data::initialize_data;
pub use model::{
    Catalog, Department, DepartmentRecord, Faculty, FacultyId, FacultyRecord, Named, University,
    UniversityId, UniversityRecord,
};
