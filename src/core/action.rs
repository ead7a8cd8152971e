//! # Actions
//!
//! Everything the user can do in the browser becomes an `Action`.
//! Picks a city? That's `Action::SelectCity(filter)`.
//! Types in the search box? That's `Action::Search(text)`.
//!
//! The `update()` function takes the current state and an action, applies
//! it, and returns an `Effect` for the shell to carry out. No I/O happens
//! here: exporting is requested as `Effect::Export` and its outcome comes
//! back as `Action::ExportFinished`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::catalog::{CityFilter, FacultyId, Named, UniversityId};
use crate::core::state::{App, View};
use crate::core::stats::compute_statistics_top;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectCity(CityFilter),
    Search(String),
    SelectUniversity(UniversityId),
    SelectFaculty(FacultyId),
    Clear,
    ShowStatistics,
    DismissStatistics,
    /// Export the catalog, optionally into a directory other than the
    /// configured one.
    Export(Option<PathBuf>),
    /// Outcome of an export: the written path or a printable error.
    ExportFinished(Result<PathBuf, String>),
    Quit,
}

/// Side effect requested by `update()`, carried out by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write an export of the full catalog into this directory.
    Export(PathBuf),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectCity(city) => {
            app.selection = app.selection.select_city(&app.catalog, city);
            app.view = View::City(city);
            app.status_message = format!(
                "{}: {} universities",
                city,
                app.selection.working_set().len()
            );
            Effect::None
        }
        Action::Search(text) => {
            app.selection = app.selection.search(&app.catalog, &text);
            app.view = View::for_search(&text);
            app.status_message = match &app.view {
                View::Search(term) => format!(
                    "Search '{}': {} universities",
                    term,
                    app.selection.working_set().len()
                ),
                _ => String::new(),
            };
            Effect::None
        }
        Action::SelectUniversity(id) => {
            match app.selection.select_university(&app.catalog, id) {
                Some(next) => {
                    app.selection = next;
                    app.view = View::University(id);
                    if let Some(name) = app.selected_university().map(|u| u.name().to_string()) {
                        app.status_message = name;
                    }
                }
                None => {
                    warn!("University {} is not in the working set", id);
                    app.status_message = String::from("University not found");
                }
            }
            Effect::None
        }
        Action::SelectFaculty(id) => {
            match app.selection.select_faculty(&app.catalog, id) {
                Some(next) => {
                    app.selection = next;
                    if let Some(uni) = app.selection.university_id() {
                        app.view = View::Faculty(uni, id);
                    }
                    if let Some(name) = app.selected_faculty().map(|f| f.name().to_string()) {
                        app.status_message = name;
                    }
                }
                None => {
                    warn!("Faculty {} is not part of the selected university", id);
                    app.status_message = String::from("Faculty not found");
                }
            }
            Effect::None
        }
        Action::Clear => {
            app.selection = app.selection.clear(&app.catalog);
            app.view = View::Welcome;
            app.statistics = None;
            app.status_message = String::from("Cleared");
            Effect::None
        }
        Action::ShowStatistics => {
            app.statistics = Some(compute_statistics_top(
                app.catalog.universities(),
                app.top_n,
            ));
            Effect::None
        }
        Action::DismissStatistics => {
            app.statistics = None;
            Effect::None
        }
        Action::Export(dir) => {
            let dir = dir.unwrap_or_else(|| app.export_dir.clone());
            app.status_message = String::from("Exporting...");
            Effect::Export(dir)
        }
        Action::ExportFinished(Ok(path)) => {
            info!("Export finished: {}", path.display());
            app.status_message = format!("Data exported successfully to {}", path.display());
            Effect::None
        }
        Action::ExportFinished(Err(e)) => {
            warn!("Export failed: {}", e);
            app.status_message = format!("Failed to export data: {}", e);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
