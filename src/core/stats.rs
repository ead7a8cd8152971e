//! # Statistics
//!
//! Aggregate counts and rankings over a sequence of universities.
//!
//! Shared faculties are counted once per owning university, so department
//! and subject totals include the same faculty several times when several
//! universities offer it.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::catalog::{City, Named, University, UniversityId};

/// Default length of the "largest universities" ranking.
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub total_universities: usize,
    pub total_faculties: usize,
    pub total_departments: usize,
    pub total_subjects: usize,
    /// Cities in first-encounter order.
    pub per_city: Vec<CityStatistics>,
    pub top_by_faculty_count: Vec<UniversityRanking>,
}

impl StatisticsReport {
    pub fn cities_with_universities(&self) -> usize {
        self.per_city.len()
    }

    pub fn city(&self, city: City) -> Option<&CityStatistics> {
        self.per_city.iter().find(|entry| entry.city == city)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CityStatistics {
    pub city: City,
    pub university_count: usize,
    pub faculty_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UniversityRanking {
    pub id: UniversityId,
    pub name: String,
    pub faculty_count: usize,
}

/// Computes the report with the default ranking length.
pub fn compute_statistics<'a, I>(universities: I) -> StatisticsReport
where
    I: IntoIterator<Item = &'a University>,
{
    compute_statistics_top(universities, DEFAULT_TOP_N)
}

/// Computes the report, keeping at most `top_n` entries in the ranking.
pub fn compute_statistics_top<'a, I>(universities: I, top_n: usize) -> StatisticsReport
where
    I: IntoIterator<Item = &'a University>,
{
    let universities: Vec<&University> = universities.into_iter().collect();
    let mut report = StatisticsReport {
        total_universities: universities.len(),
        ..StatisticsReport::default()
    };

    for uni in &universities {
        let faculty_count = uni.faculties().len();
        report.total_faculties += faculty_count;
        report.total_departments += uni.department_count();
        report.total_subjects += uni
            .faculties()
            .iter()
            .map(|f| f.subject_count())
            .sum::<usize>();

        match report.per_city.iter_mut().find(|e| e.city == uni.city()) {
            Some(entry) => {
                entry.university_count += 1;
                entry.faculty_count += faculty_count;
            }
            None => report.per_city.push(CityStatistics {
                city: uni.city(),
                university_count: 1,
                faculty_count,
            }),
        }
    }

    let mut ranked = universities;
    // Stable: ties keep catalog order.
    ranked.sort_by_key(|uni| Reverse(uni.faculties().len()));
    report.top_by_faculty_count = ranked
        .into_iter()
        .take(top_n)
        .map(|uni| UniversityRanking {
            id: uni.id(),
            name: uni.name().to_string(),
            faculty_count: uni.faculties().len(),
        })
        .collect();

    report
}
