//! # Data Catalog
//!
//! The fixed hierarchy of Kosovo universities, built from literals.
//! `initialize_data()` is deterministic: every call yields a deep-equal catalog.

use std::sync::Arc;

use log::debug;

use crate::catalog::city::City;
use crate::catalog::model::{Catalog, Department, Faculty, FacultyId, University, UniversityId};

/// Hands out sequential ids while the catalog is assembled.
#[derive(Default)]
struct CatalogBuilder {
    faculties: Vec<Arc<Faculty>>,
    universities: Vec<University>,
}

impl CatalogBuilder {
    fn faculty(&mut self, name: &str, departments: &[&Department]) -> Arc<Faculty> {
        let faculty = Arc::new(Faculty::new(
            FacultyId(self.faculties.len()),
            name,
            departments.iter().map(|d| (*d).clone()).collect(),
        ));
        self.faculties.push(faculty.clone());
        faculty
    }

    fn university(&mut self, name: &str, city: City, faculties: &[&Arc<Faculty>]) {
        let id = UniversityId(self.universities.len());
        self.universities.push(University::new(
            id,
            name,
            city,
            faculties.iter().map(|f| Arc::clone(*f)).collect(),
        ));
    }

    fn build(self) -> Catalog {
        Catalog::new(self.universities, self.faculties)
    }
}

/// Builds the complete catalog.
pub fn initialize_data() -> Catalog {
    // Computer science and engineering
    let software = Department::new(
        "Software Engineering",
        &[
            "Advanced Programming",
            "Data Structures",
            "Algorithms",
            "Web Development",
            "Software Engineering",
            "Database Systems",
        ],
    );
    let cybersecurity = Department::new(
        "Cybersecurity",
        &[
            "Network Security",
            "Cryptography",
            "Ethical Hacking",
            "Data Protection",
            "Digital Forensics",
        ],
    );
    let information_technology = Department::new(
        "Information Technology",
        &[
            "Operating Systems",
            "Computer Networks",
            "Database Management",
            "System Administration",
        ],
    );
    let artificial_intelligence = Department::new(
        "Artificial Intelligence",
        &[
            "Machine Learning",
            "Computer Vision",
            "Natural Language Processing",
            "Neural Networks",
            "Deep Learning",
        ],
    );
    let computer_engineering = Department::new(
        "Computer Engineering",
        &[
            "Computer Architecture",
            "Embedded Systems",
            "System Programming",
            "Hardware Design",
        ],
    );

    // Engineering
    let electrical = Department::new(
        "Electrical Engineering",
        &[
            "Electronics",
            "Control Systems",
            "Signals and Systems",
            "Power Systems",
            "Telecommunications",
        ],
    );
    let civil = Department::new(
        "Civil Engineering",
        &[
            "Structural Engineering",
            "Hydraulic Engineering",
            "Geotechnics",
            "Construction Management",
        ],
    );
    let architecture = Department::new(
        "Architecture",
        &[
            "Architectural Design",
            "Building Structures",
            "Urban Planning",
            "Interior Design",
        ],
    );

    // Business and economics
    let finance = Department::new(
        "Finance and Banking",
        &[
            "Corporate Finance",
            "Investment Analysis",
            "Banking and Insurance",
            "Financial Markets",
        ],
    );
    let management = Department::new(
        "Management and Informatics",
        &[
            "Strategic Management",
            "Management Information Systems",
            "Digital Marketing",
            "Project Management",
        ],
    );
    let accounting = Department::new(
        "Accounting and Auditing",
        &[
            "Financial Accounting",
            "Management Accounting",
            "Auditing",
            "Tax Planning",
        ],
    );

    // Law and political science
    let law = Department::new(
        "Law",
        &[
            "Constitutional Law",
            "Criminal Law",
            "Civil Law",
            "International Law",
            "Commercial Law",
        ],
    );
    let political = Department::new(
        "Political Science",
        &[
            "International Relations",
            "Comparative Politics",
            "Public Administration",
            "Political Theory",
        ],
    );

    // Medical sciences
    let medicine = Department::new(
        "General Medicine",
        &[
            "Anatomy",
            "Physiology",
            "Pharmacology",
            "Pathology",
            "Internal Medicine",
            "Surgery",
        ],
    );
    let dentistry = Department::new(
        "Dentistry",
        &[
            "Dental Prosthetics",
            "Oral Surgery",
            "Orthodontics",
            "Periodontics",
        ],
    );
    let pharmacy = Department::new(
        "Pharmacy",
        &[
            "Pharmaceutical Chemistry",
            "Pharmacology",
            "Pharmaceutical Technology",
            "Clinical Pharmacy",
        ],
    );

    // Liberal arts and sciences
    let albanian = Department::new(
        "Albanian Language and Literature",
        &["Albanian Literature", "Albanian Linguistics", "Literary Theory"],
    );
    let english = Department::new(
        "English Language and Literature",
        &["English Literature", "Linguistics", "Translation Studies"],
    );
    let philosophy = Department::new(
        "Philosophy",
        &["History of Philosophy", "Ethics", "Logic", "Metaphysics"],
    );
    let psychology = Department::new(
        "Psychology",
        &[
            "Developmental Psychology",
            "Cognitive Psychology",
            "Clinical Psychology",
            "Social Psychology",
        ],
    );
    let mathematics = Department::new(
        "Mathematics",
        &[
            "Mathematical Analysis",
            "Algebra",
            "Statistics",
            "Applied Mathematics",
        ],
    );
    let physics = Department::new(
        "Physics",
        &[
            "Classical Physics",
            "Quantum Physics",
            "Thermodynamics",
            "Electromagnetism",
        ],
    );
    let chemistry = Department::new(
        "Chemistry",
        &[
            "Analytical Chemistry",
            "Biochemistry",
            "Organic Chemistry",
            "Inorganic Chemistry",
        ],
    );
    let biology = Department::new(
        "Biology",
        &["Genetics", "Ecology", "Molecular Biology", "Botany", "Zoology"],
    );

    // Education and sports
    let primary_education = Department::new(
        "Primary Education",
        &[
            "Pedagogy",
            "Didactics",
            "Child Psychology",
            "Curriculum Development",
        ],
    );
    let preschool = Department::new(
        "Preschool Education",
        &[
            "Child Psychology",
            "Teaching Methodology",
            "Early Childhood Development",
        ],
    );
    let physical_education = Department::new(
        "Physical Education",
        &[
            "Exercise Physiology",
            "Sports Training",
            "Sports Psychology",
            "Kinesiology",
        ],
    );

    // Agriculture and veterinary
    let agribusiness = Department::new(
        "Agribusiness",
        &[
            "Agricultural Economics",
            "Agricultural Marketing",
            "Farm Management",
            "Rural Development",
        ],
    );
    let veterinary = Department::new(
        "Veterinary Medicine",
        &[
            "Veterinary Anatomy",
            "Veterinary Pathology",
            "Animal Health",
            "Veterinary Surgery",
        ],
    );

    // Arts and design
    let graphic_design = Department::new(
        "Graphic Design",
        &[
            "Graphic Design",
            "Digital Illustration",
            "Typography",
            "Brand Design",
        ],
    );
    let musicology = Department::new(
        "Musicology",
        &["Music History", "Music Theory", "Composition", "Performance"],
    );

    let mut builder = CatalogBuilder::default();

    let computer_science = builder.faculty(
        "Faculty of Computer Science and Engineering",
        &[
            &software,
            &cybersecurity,
            &information_technology,
            &artificial_intelligence,
            &computer_engineering,
        ],
    );
    let electrical_computer = builder.faculty(
        "Faculty of Electrical and Computer Engineering",
        &[&electrical, &computer_engineering],
    );
    let economics = builder.faculty(
        "Faculty of Economics",
        &[&finance, &management, &accounting],
    );
    let law_faculty = builder.faculty("Faculty of Law", &[&law, &political]);
    let medicine_faculty = builder.faculty(
        "Faculty of Medicine",
        &[&medicine, &dentistry, &pharmacy],
    );
    let architecture_faculty = builder.faculty(
        "Faculty of Architecture and Engineering",
        &[&architecture, &civil],
    );
    let philology = builder.faculty("Faculty of Philology", &[&albanian, &english]);
    let philosophy_faculty =
        builder.faculty("Faculty of Philosophy", &[&philosophy, &psychology]);
    let natural_sciences = builder.faculty(
        "Faculty of Mathematics and Natural Sciences",
        &[&mathematics, &physics, &chemistry, &biology],
    );
    let education = builder.faculty(
        "Faculty of Education",
        &[&primary_education, &preschool],
    );
    let agriculture = builder.faculty(
        "Faculty of Agriculture and Veterinary",
        &[&agribusiness, &veterinary],
    );
    let sports = builder.faculty("Faculty of Sport Sciences", &[&physical_education]);
    let arts = builder.faculty("Faculty of Arts", &[&graphic_design, &musicology]);

    builder.university(
        "University of Prishtina \"Hasan Prishtina\"",
        City::Prishtina,
        &[
            &computer_science,
            &electrical_computer,
            &economics,
            &law_faculty,
            &medicine_faculty,
            &architecture_faculty,
            &philology,
            &philosophy_faculty,
            &natural_sciences,
            &education,
            &agriculture,
            &sports,
            &arts,
        ],
    );
    builder.university(
        "Haxhi Zeka University",
        City::Peja,
        &[&economics, &law_faculty, &computer_science],
    );
    builder.university(
        "University of Gjilan \"Kadri Zeka\"",
        City::Gjilan,
        &[&education, &economics, &computer_science],
    );
    builder.university(
        "University of Prizren \"Ukshin Hoti\"",
        City::Prizren,
        &[&education, &economics, &law_faculty, &computer_science],
    );
    builder.university(
        "University of Gjakova \"Fehmi Agani\"",
        City::Gjakova,
        &[&medicine_faculty, &education, &philology],
    );
    builder.university(
        "University of Applied Sciences in Ferizaj",
        City::Ferizaj,
        &[&computer_science, &architecture_faculty, &electrical_computer],
    );
    builder.university(
        "University of Mitrovica \"Isa Boletini\"",
        City::Mitrovica,
        &[&computer_science, &economics, &law_faculty],
    );

    let catalog = builder.build();
    debug!(
        "Catalog initialized: {} universities, {} faculty definitions",
        catalog.len(),
        catalog.faculty_definitions().len()
    );
    catalog
}
