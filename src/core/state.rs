//! # Application State
//!
//! Core browsing state. No TUI types live here; presentation state is in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>           // read-only data, built once
//! ├── selection: SelectionState       // city, search, working set, drill-down
//! ├── view: View                      // what the shell should display
//! ├── statistics: Option<Report>      // open statistics overlay
//! ├── status_message: String          // status bar text
//! ├── export_dir: PathBuf             // destination for exports
//! └── top_n: usize                    // ranking length
//! ```
//!
//! `SelectionState` is an immutable value: each transition returns a new
//! state and the reducer in action.rs swaps it in.

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;

use crate::catalog::{Catalog, CityFilter, Faculty, FacultyId, University, UniversityId};
use crate::core::config::ResolvedConfig;
use crate::core::query::{self, SearchQuery};
use crate::core::stats::{DEFAULT_TOP_N, StatisticsReport};

/// Current city scope, search text, working set and drill-down selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    city: CityFilter,
    search: String,
    working_set: Vec<UniversityId>,
    university: Option<UniversityId>,
    faculty: Option<FacultyId>,
}

impl SelectionState {
    /// No filter, no selection: the working set is the whole catalog.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            city: CityFilter::All,
            search: String::new(),
            working_set: catalog.ids(),
            university: None,
            faculty: None,
        }
    }

    /// Re-scopes the working set to `city` and drops any university or
    /// faculty selection.
    pub fn select_city(&self, catalog: &Catalog, city: CityFilter) -> Self {
        let working_set = query::filter_by_city(catalog, city)
            .into_iter()
            .map(University::id)
            .collect();
        debug!("Selection: city -> {}", city);
        Self {
            city,
            search: self.search.clone(),
            working_set,
            university: None,
            faculty: None,
        }
    }

    /// Replaces the working set with the search result for `raw`. Terms
    /// shorter than two characters reset it to the full catalog.
    pub fn search(&self, catalog: &Catalog, raw: &str) -> Self {
        let working_set = query::search(catalog, raw)
            .into_iter()
            .map(University::id)
            .collect();
        debug!("Selection: search -> {:?}", raw);
        Self {
            city: self.city,
            search: raw.to_string(),
            working_set,
            university: None,
            faculty: None,
        }
    }

    /// Selects a university from the working set. Returns `None` if `id` is
    /// not part of it.
    pub fn select_university(&self, catalog: &Catalog, id: UniversityId) -> Option<Self> {
        if !self.working_set.contains(&id) || catalog.university(id).is_none() {
            return None;
        }
        debug!("Selection: university -> {}", id);
        Some(Self {
            university: Some(id),
            faculty: None,
            ..self.clone()
        })
    }

    /// Selects a faculty of the selected university. Returns `None` when no
    /// university is selected or the faculty does not belong to it.
    pub fn select_faculty(&self, catalog: &Catalog, id: FacultyId) -> Option<Self> {
        let university = self.selected_university(catalog)?;
        university.faculty(id)?;
        debug!("Selection: faculty -> {} (in {})", id, university.id());
        Some(Self {
            faculty: Some(id),
            ..self.clone()
        })
    }

    /// Back to "All Cities", empty search, full catalog, nothing selected.
    pub fn clear(&self, catalog: &Catalog) -> Self {
        debug!("Selection: cleared");
        Self::new(catalog)
    }

    pub fn city(&self) -> CityFilter {
        self.city
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn working_set(&self) -> &[UniversityId] {
        &self.working_set
    }

    pub fn university_id(&self) -> Option<UniversityId> {
        self.university
    }

    pub fn faculty_id(&self) -> Option<FacultyId> {
        self.faculty
    }

    pub fn working_universities<'a>(&self, catalog: &'a Catalog) -> Vec<&'a University> {
        self.working_set
            .iter()
            .filter_map(|id| catalog.university(*id))
            .collect()
    }

    pub fn selected_university<'a>(&self, catalog: &'a Catalog) -> Option<&'a University> {
        self.university.and_then(|id| catalog.university(id))
    }

    pub fn selected_faculty<'a>(&self, catalog: &'a Catalog) -> Option<&'a Faculty> {
        let university = self.selected_university(catalog)?;
        self.faculty.and_then(|id| university.faculty(id))
    }
}

/// What the presentation layer should be showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Welcome,
    City(CityFilter),
    Search(String),
    University(UniversityId),
    Faculty(UniversityId, FacultyId),
}

impl View {
    /// The view a search box value leads to.
    pub fn for_search(raw: &str) -> View {
        match SearchQuery::parse(raw) {
            SearchQuery::Reset => View::Welcome,
            SearchQuery::Term(term) => View::Search(term),
        }
    }
}

pub struct App {
    pub catalog: Arc<Catalog>,
    pub selection: SelectionState,
    pub view: View,
    pub statistics: Option<StatisticsReport>,
    pub status_message: String,
    pub export_dir: PathBuf,
    pub top_n: usize,
}

impl App {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let selection = SelectionState::new(&catalog);
        Self {
            catalog,
            selection,
            view: View::Welcome,
            statistics: None,
            status_message: String::from("Welcome to Kosovo Universities!"),
            export_dir: PathBuf::from("."),
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn from_config(catalog: Arc<Catalog>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog);
        app.export_dir = config.export_dir.clone();
        app.top_n = config.top_n;
        if config.default_city != CityFilter::All {
            app.selection = app.selection.select_city(&app.catalog, config.default_city);
            app.view = View::City(config.default_city);
        }
        if let Some(warning) = config.warnings.first() {
            app.status_message = warning.clone();
        }
        app
    }

    pub fn working_universities(&self) -> Vec<&University> {
        self.selection.working_universities(&self.catalog)
    }

    pub fn selected_university(&self) -> Option<&University> {
        self.selection.selected_university(&self.catalog)
    }

    pub fn selected_faculty(&self) -> Option<&Faculty> {
        self.selection.selected_faculty(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{City, initialize_data};
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Kosovo Universities!");
        assert_eq!(app.view, View::Welcome);
        assert_eq!(app.top_n, DEFAULT_TOP_N);
        assert_eq!(app.working_universities().len(), 7);
        assert!(app.statistics.is_none());
    }

    #[test]
    fn test_select_city_rescopes_and_clears_downstream() {
        let catalog = initialize_data();
        let state = SelectionState::new(&catalog)
            .select_university(&catalog, UniversityId(0))
            .unwrap()
            .select_faculty(&catalog, FacultyId(0))
            .unwrap();

        let next = state.select_city(&catalog, CityFilter::Only(City::Gjilan));
        assert_eq!(next.city(), CityFilter::Only(City::Gjilan));
        assert_eq!(next.working_set(), &[UniversityId(2)]);
        assert_eq!(next.university_id(), None);
        assert_eq!(next.faculty_id(), None);
        // The previous value is untouched.
        assert_eq!(state.university_id(), Some(UniversityId(0)));
    }

    #[test]
    fn test_select_university_must_be_in_working_set() {
        let catalog = initialize_data();
        let state = SelectionState::new(&catalog).select_city(&catalog, CityFilter::Only(City::Peja));
        assert!(state.select_university(&catalog, UniversityId(0)).is_none());
        let next = state.select_university(&catalog, UniversityId(1)).unwrap();
        assert_eq!(next.university_id(), Some(UniversityId(1)));
        assert_eq!(next.faculty_id(), None);
    }

    #[test]
    fn test_select_university_clears_faculty() {
        let catalog = initialize_data();
        let state = SelectionState::new(&catalog)
            .select_university(&catalog, UniversityId(1))
            .unwrap()
            .select_faculty(&catalog, FacultyId(3))
            .unwrap();
        let next = state.select_university(&catalog, UniversityId(2)).unwrap();
        assert_eq!(next.faculty_id(), None);
    }

    #[test]
    fn test_select_faculty_must_belong_to_selected_university() {
        let catalog = initialize_data();
        let state = SelectionState::new(&catalog);
        // No university selected yet.
        assert!(state.select_faculty(&catalog, FacultyId(0)).is_none());

        let peja = state.select_university(&catalog, UniversityId(1)).unwrap();
        // Faculty of Medicine is not offered in Peja.
        assert!(peja.select_faculty(&catalog, FacultyId(4)).is_none());
        let law = peja.select_faculty(&catalog, FacultyId(3)).unwrap();
        assert_eq!(
            law.selected_faculty(&catalog).map(|f| f.departments().len()),
            Some(2)
        );
    }

    #[test]
    fn test_search_replaces_working_set() {
        let catalog = initialize_data();
        let state = SelectionState::new(&catalog).search(&catalog, "Medicine");
        assert_eq!(state.working_set(), &[UniversityId(0), UniversityId(4)]);
        assert_eq!(state.search_text(), "Medicine");
    }

    #[test]
    fn test_short_search_resets_working_set() {
        let catalog = initialize_data();
        let narrowed = SelectionState::new(&catalog).search(&catalog, "haxhi");
        assert_eq!(narrowed.working_set().len(), 1);
        let reset = narrowed.search(&catalog, "h");
        assert_eq!(reset.working_set().len(), catalog.len());
        let reset = narrowed.search(&catalog, "");
        assert_eq!(reset.working_set().len(), catalog.len());
    }

    #[test]
    fn test_clear_returns_to_initial_state() {
        let catalog = initialize_data();
        let state = SelectionState::new(&catalog)
            .select_city(&catalog, CityFilter::Only(City::Prizren))
            .select_university(&catalog, UniversityId(3))
            .unwrap();
        assert_eq!(state.clear(&catalog), SelectionState::new(&catalog));
    }

    #[test]
    fn test_view_for_search() {
        assert_eq!(View::for_search("a"), View::Welcome);
        assert_eq!(View::for_search("LaW"), View::Search("law".to_string()));
    }

    #[test]
    fn test_hand_assembled_catalog_ids_resolve() {
        use crate::catalog::{Department, Named};

        let law = Arc::new(Faculty::new(
            FacultyId(4),
            "Faculty of Law",
            vec![Department::new("Law", &["Civil Law"])],
        ));
        let catalog = Catalog::new(
            vec![
                University::new(UniversityId(10), "A", City::Peja, vec![law.clone()]),
                University::new(UniversityId(11), "B", City::Gjilan, vec![law.clone()]),
            ],
            vec![law],
        );
        let state = SelectionState::new(&catalog);
        assert_eq!(state.working_universities(&catalog).len(), 2);

        let picked = state.select_university(&catalog, UniversityId(10)).unwrap();
        assert_eq!(picked.selected_university(&catalog).map(|u| u.name()), Some("A"));
        let faculty = picked.select_faculty(&catalog, FacultyId(4)).unwrap();
        assert_eq!(faculty.selected_faculty(&catalog).map(|f| f.name()), Some("Faculty of Law"));
    }

    #[test]
    fn test_from_config_surfaces_config_warning() {
        let config = ResolvedConfig {
            warnings: vec!["Unknown city 'Atlantis', falling back to All Cities".to_string()],
            ..ResolvedConfig::default()
        };
        let app = App::from_config(Arc::new(initialize_data()), &config);
        assert_eq!(app.status_message, "Unknown city 'Atlantis', falling back to All Cities");
        assert_eq!(app.working_universities().len(), 7);
    }
}
