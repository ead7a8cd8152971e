//! # Entity Model
//!
//! Immutable value types for the four-level hierarchy:
//!
//! ```text
//! Catalog
//! └── University (id, name, city)
//!     └── Arc<Faculty> (id, name)      // shared across universities
//!         └── Department (name)
//!             └── subject: String
//! ```
//!
//! Faculties are aliased, not owned: the same `Arc<Faculty>` appears under
//! every university that offers it. Aggregates therefore count a shared
//! faculty once per owning university.
//!
//! Each entity also has a serializable `*Record` projection used by the
//! export document.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::city::City;

/// Identifies a university within its catalog. `initialize_data` hands
/// these out in catalog order; hand-assembled catalogs may use any values.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniversityId(pub usize);

/// Identifies one of the catalog's distinct faculty definitions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacultyId(pub usize);

impl fmt::Display for UniversityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.0)
    }
}

impl fmt::Display for FacultyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// Anything with a display name that the browser can look up by.
pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    name: String,
    subjects: Vec<String>,
}

impl Department {
    pub fn new(name: impl Into<String>, subjects: &[&str]) -> Self {
        Self {
            name: name.into(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn to_record(&self) -> DepartmentRecord {
        DepartmentRecord {
            name: self.name.clone(),
            subjects: self.subjects.clone(),
        }
    }
}

impl Named for Department {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    id: FacultyId,
    name: String,
    departments: Vec<Department>,
}

impl Faculty {
    pub fn new(id: FacultyId, name: impl Into<String>, departments: Vec<Department>) -> Self {
        Self {
            id,
            name: name.into(),
            departments,
        }
    }

    pub fn id(&self) -> FacultyId {
        self.id
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Number of subjects across all departments, duplicates included.
    pub fn subject_count(&self) -> usize {
        self.departments.iter().map(|d| d.subjects.len()).sum()
    }

    pub fn to_record(&self) -> FacultyRecord {
        FacultyRecord {
            name: self.name.clone(),
            departments: self.departments.iter().map(Department::to_record).collect(),
        }
    }
}

impl Named for Faculty {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct University {
    id: UniversityId,
    name: String,
    city: City,
    faculties: Vec<Arc<Faculty>>,
}

impl University {
    pub fn new(
        id: UniversityId,
        name: impl Into<String>,
        city: City,
        faculties: Vec<Arc<Faculty>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city,
            faculties,
        }
    }

    pub fn id(&self) -> UniversityId {
        self.id
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn faculties(&self) -> &[Arc<Faculty>] {
        &self.faculties
    }

    pub fn faculty(&self, id: FacultyId) -> Option<&Faculty> {
        self.faculties
            .iter()
            .map(Arc::as_ref)
            .find(|faculty| faculty.id == id)
    }

    pub fn department_count(&self) -> usize {
        self.faculties.iter().map(|f| f.departments.len()).sum()
    }

    pub fn to_record(&self) -> UniversityRecord {
        UniversityRecord {
            name: self.name.clone(),
            city: self.city,
            faculties: self.faculties.iter().map(|f| f.to_record()).collect(),
        }
    }
}

impl Named for University {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The complete, read-only collection of universities.
///
/// Built once by [`crate::catalog::initialize_data`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    universities: Vec<University>,
    faculties: Vec<Arc<Faculty>>,
}

impl Catalog {
    /// Assembles a catalog. `faculties` holds the distinct faculty
    /// definitions. Lookups go by id, so ids need not match positions.
    pub fn new(universities: Vec<University>, faculties: Vec<Arc<Faculty>>) -> Self {
        Self {
            universities,
            faculties,
        }
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn university(&self, id: UniversityId) -> Option<&University> {
        self.universities.iter().find(|uni| uni.id == id)
    }

    /// Distinct faculty definitions, regardless of how many universities
    /// reference each one.
    pub fn faculty_definitions(&self) -> &[Arc<Faculty>] {
        &self.faculties
    }

    pub fn faculty(&self, id: FacultyId) -> Option<&Faculty> {
        self.faculties
            .iter()
            .map(Arc::as_ref)
            .find(|faculty| faculty.id == id)
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    pub fn ids(&self) -> Vec<UniversityId> {
        self.universities.iter().map(University::id).collect()
    }
}

// ============================================================================
// Structural projections
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRecord {
    pub name: String,
    pub subjects: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FacultyRecord {
    pub name: String,
    pub departments: Vec<DepartmentRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UniversityRecord {
    pub name: String,
    pub city: City,
    pub faculties: Vec<FacultyRecord>,
}
