//! # Details Component
//!
//! Right-hand information panel with two tabs:
//!
//! - **Main Information**: the text for the current `View`
//! - **Detailed View**: departments and subjects of the selected university
//!
//! Text is built by plain functions (`main_lines`, `detail_lines`) so it can
//! be tested without a terminal. `Details` wraps `&mut DetailsState` and the
//! `App` each frame and renders the text into a `ScrollView`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Paragraph, Tabs, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::{City, CityFilter, Faculty, Named, University};
use crate::core::query;
use crate::core::state::{App, View};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Subjects shown per department in the detailed view.
const SUBJECT_PREVIEW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Main,
    Detailed,
}

impl DetailTab {
    pub const TITLES: [&'static str; 2] = ["Main Information", "Detailed View"];

    pub fn toggle(self) -> Self {
        match self {
            DetailTab::Main => DetailTab::Detailed,
            DetailTab::Detailed => DetailTab::Main,
        }
    }

    fn index(self) -> usize {
        match self {
            DetailTab::Main => 0,
            DetailTab::Detailed => 1,
        }
    }
}

/// Persistent state for the details panel.
#[derive(Default)]
pub struct DetailsState {
    pub tab: DetailTab,
    pub scroll_state: ScrollViewState,
}

impl DetailsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggle();
        self.scroll_state.scroll_to_top();
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for DetailsState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the details panel.
pub struct Details<'a> {
    state: &'a mut DetailsState,
    app: &'a App,
}

impl<'a> Details<'a> {
    pub fn new(state: &'a mut DetailsState, app: &'a App) -> Self {
        Self { state, app }
    }
}

impl Component for Details<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Information Display ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [tabs_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

        let tabs = Tabs::new(DetailTab::TITLES)
            .select(self.state.tab.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");
        frame.render_widget(tabs, tabs_area);
        if body_area.is_empty() {
            return;
        }

        let lines = match self.state.tab {
            DetailTab::Main => main_lines(self.app),
            DetailTab::Detailed => detail_lines(self.app),
        };
        let paragraph = Paragraph::new(Text::from(lines.join("\n"))).wrap(Wrap { trim: false });

        // Leave a column for the scrollbar.
        let content_width = body_area.width.saturating_sub(1);
        let content_height = u16::try_from(paragraph.line_count(content_width)).unwrap_or(u16::MAX);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, body_area, &mut self.state.scroll_state);
    }
}

// ============================================================================
// Text builders
// ============================================================================

/// Text of the "Main Information" tab for the current view.
pub fn main_lines(app: &App) -> Vec<String> {
    match &app.view {
        View::Welcome => welcome_lines(app),
        View::City(filter) => city_lines(app, *filter),
        View::Search(term) => search_lines(app, term),
        View::University(_) => match app.selected_university() {
            Some(uni) => university_lines(uni),
            None => welcome_lines(app),
        },
        View::Faculty(_, _) => match (app.selected_university(), app.selected_faculty()) {
            (Some(uni), Some(faculty)) => faculty_lines(uni, faculty),
            _ => welcome_lines(app),
        },
    }
}

/// Text of the "Detailed View" tab: the selected university's departments.
pub fn detail_lines(app: &App) -> Vec<String> {
    match app.selected_university() {
        Some(uni) => university_detail_lines(uni),
        None => vec![String::from(
            "Select a university to see its departments and subjects.",
        )],
    }
}

fn welcome_lines(app: &App) -> Vec<String> {
    let mut lines = vec![
        String::from("Welcome to Kosovo Universities Information System!"),
        String::new(),
        String::from("FEATURES:"),
        String::from("• Explore universities across Kosovo"),
        String::from("• Browse faculties and departments"),
        String::from("• Search for specific programs"),
        String::from("• View detailed statistics"),
        String::from("• Export data functionality"),
        String::new(),
        String::from("AVAILABLE CITIES:"),
    ];
    lines.extend(City::ALL.iter().map(|city| format!("• {}", city)));

    let total_faculties: usize = app
        .catalog
        .universities()
        .iter()
        .map(|u| u.faculties().len())
        .sum();
    lines.extend([
        String::new(),
        String::from("QUICK STATS:"),
        format!("• Total Universities: {}", app.catalog.len()),
        format!("• Total Cities: {}", City::ALL.len()),
        format!("• Total Faculties: {}", total_faculties),
        String::new(),
        String::from("HOW TO USE:"),
        String::from("1. Select a city or search for specific terms"),
        String::from("2. Choose a university from the filtered list"),
        String::from("3. Browse faculties and departments"),
        String::from("4. Use Ctrl+T to switch between views"),
        String::new(),
        String::from("Start exploring by selecting a city or using the search function!"),
    ]);
    lines
}

fn city_lines(app: &App, filter: CityFilter) -> Vec<String> {
    let universities = query::filter_by_city(&app.catalog, filter);
    let mut lines = Vec::new();
    match filter {
        CityFilter::All => {
            lines.push(String::from("All Universities in Kosovo"));
            lines.push("=".repeat(30));
            lines.push(String::new());
            for (i, uni) in universities.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, uni.name()));
                lines.push(format!("   Location: {}", uni.city()));
                lines.push(format!("   {} faculties", uni.faculties().len()));
                lines.push(String::new());
            }
        }
        CityFilter::Only(city) => {
            lines.push(format!("Universities in {}", city));
            lines.push("=".repeat(30));
            lines.push(String::new());
            if universities.is_empty() {
                lines.push(format!("No universities found in {}.", city));
            }
            for (i, uni) in universities.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, uni.name()));
                lines.push(format!("   {} faculties", uni.faculties().len()));
                lines.push(String::new());
            }
        }
    }
    lines
}

fn search_lines(app: &App, term: &str) -> Vec<String> {
    let results = app.working_universities();
    let mut lines = vec![
        format!("Search Results for: '{}'", term),
        "=".repeat(50),
        String::new(),
    ];
    if results.is_empty() {
        lines.push(String::from("No results found. Try different search terms."));
    }
    for (i, uni) in results.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, uni.name()));
        lines.push(format!("   Location: {}", uni.city()));
        lines.push(format!("   Faculties: {}", uni.faculties().len()));
        lines.push(String::new());
    }
    lines
}

fn university_lines(uni: &University) -> Vec<String> {
    let mut lines = vec![
        uni.name().to_string(),
        "=".repeat(uni.name().chars().count()),
        String::new(),
        format!("Location: {}", uni.city()),
        format!("Number of Faculties: {}", uni.faculties().len()),
        String::new(),
        String::from("FACULTIES:"),
        "-".repeat(20),
    ];
    for (i, faculty) in uni.faculties().iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, faculty.name()));
        lines.push(format!("   {} departments", faculty.departments().len()));
        lines.push(String::new());
    }
    lines
}

fn university_detail_lines(uni: &University) -> Vec<String> {
    let mut lines = vec![
        format!("DETAILED VIEW: {}", uni.name()),
        "=".repeat(50),
        String::new(),
    ];
    for faculty in uni.faculties() {
        lines.push(faculty.name().to_string());
        lines.push("-".repeat(faculty.name().chars().count()));
        for dept in faculty.departments() {
            lines.push(format!("  {}", dept.name()));
            let subjects = dept.subjects();
            let preview = subjects
                .iter()
                .take(SUBJECT_PREVIEW)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            let mut line = format!("     Subjects: {}", preview);
            if subjects.len() > SUBJECT_PREVIEW {
                line.push_str(&format!(" (+{} more)", subjects.len() - SUBJECT_PREVIEW));
            }
            lines.push(line);
            lines.push(String::new());
        }
        lines.push(String::new());
    }
    lines
}

fn faculty_lines(uni: &University, faculty: &Faculty) -> Vec<String> {
    let mut lines = vec![
        faculty.name().to_string(),
        "=".repeat(faculty.name().chars().count()),
        format!("University: {}", uni.name()),
        format!("Number of Departments: {}", faculty.departments().len()),
        String::new(),
        String::from("DEPARTMENTS & SUBJECTS:"),
        "-".repeat(30),
        String::new(),
    ];
    for (i, dept) in faculty.departments().iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, dept.name()));
        lines.extend(dept.subjects().iter().map(|s| format!("   • {}", s)));
        lines.push(String::new());
    }
    lines
}
