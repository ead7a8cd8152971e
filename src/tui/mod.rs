//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm event → TuiEvent → dispatch() → core::update() → Effect → perform()
//! ```
//!
//! `dispatch` owns focus handling and routes events to the focused
//! component. Components emit high-level events (`SearchEvent`,
//! `PickerEvent`) that become core actions. After every action the pickers
//! are re-synced with the new selection state.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (including
//! terminal resize) and otherwise sleeps in `poll` for up to 500ms.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::catalog::{CityFilter, FacultyId, Named, UniversityId, initialize_data};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::export::export_to_dir;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{DetailsState, PickerEvent, PickerState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which left-panel widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Cities,
    Universities,
    Faculties,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Cities,
            Focus::Cities => Focus::Universities,
            Focus::Universities => Focus::Faculties,
            Focus::Faculties => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Faculties,
            Focus::Cities => Focus::Search,
            Focus::Universities => Focus::Cities,
            Focus::Faculties => Focus::Universities,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    // Persistent component states
    pub search_box: SearchBox,
    pub cities: PickerState<CityFilter>,
    pub universities: PickerState<UniversityId>,
    pub faculties: PickerState<FacultyId>,
    pub details: DetailsState,
    /// Line offset of the statistics overlay
    pub statistics_scroll: u16,
    pub show_about: bool,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let cities = CityFilter::choices()
            .into_iter()
            .map(|filter| (filter, filter.label().to_string()))
            .collect();
        let mut tui = Self {
            focus: Focus::Search, // User expects to type immediately
            search_box: SearchBox::new(),
            cities: PickerState::new(cities),
            universities: PickerState::new(Vec::new()),
            faculties: PickerState::new(Vec::new()),
            details: DetailsState::new(),
            statistics_scroll: 0,
            show_about: false,
        };
        tui.sync(app);
        tui
    }

    /// Bring the pickers in line with the core selection. Lists are only
    /// replaced when their contents changed, so a highlight survives
    /// unrelated actions.
    pub fn sync(&mut self, app: &App) {
        self.cities.highlight(app.selection.city());

        let working = app.selection.working_set();
        if self.universities.keys() != working {
            let items = app
                .working_universities()
                .into_iter()
                .map(|u| (u.id(), u.name().to_string()))
                .collect();
            self.universities.set_items(items);
        }
        if let Some(id) = app.selection.university_id() {
            self.universities.highlight(id);
        }

        let faculties: Vec<(FacultyId, String)> = app
            .selected_university()
            .map(|u| {
                u.faculties()
                    .iter()
                    .map(|f| (f.id(), f.name().to_string()))
                    .collect()
            })
            .unwrap_or_default();
        if self.faculties.keys() != faculties.iter().map(|(id, _)| *id).collect::<Vec<_>>() {
            self.faculties.set_items(faculties);
        }
        if let Some(id) = app.selection.faculty_id() {
            self.faculties.highlight(id);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Lets terminals that support it report Shift+Tab and Esc unambiguously;
        // ignored elsewhere.
        execute!(
            stdout(),
            EnableMouseCapture,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            Hide
        );
    }
}

/// Route one terminal event: overlays first, then global shortcuts, then the
/// focused component. Returns the effect requested by the core, if any.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::Quit) {
        return update(app, Action::Quit);
    }

    if tui.show_about {
        if matches!(
            event,
            TuiEvent::Escape | TuiEvent::Submit | TuiEvent::ShowAbout
        ) {
            tui.show_about = false;
        }
        return Effect::None;
    }

    // Statistics overlay swallows everything while open.
    if app.statistics.is_some() {
        match event {
            TuiEvent::Escape | TuiEvent::ShowStatistics => {
                tui.statistics_scroll = 0;
                return update(app, Action::DismissStatistics);
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                tui.statistics_scroll = tui.statistics_scroll.saturating_sub(1);
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                tui.statistics_scroll = tui.statistics_scroll.saturating_add(1);
            }
            TuiEvent::ScrollPageUp => {
                tui.statistics_scroll = tui.statistics_scroll.saturating_sub(10);
            }
            TuiEvent::ScrollPageDown => {
                tui.statistics_scroll = tui.statistics_scroll.saturating_add(10);
            }
            _ => {}
        }
        return Effect::None;
    }

    let action = match event {
        TuiEvent::ShowStatistics => Some(Action::ShowStatistics),
        TuiEvent::ShowAbout => {
            tui.show_about = true;
            None
        }
        TuiEvent::Export => Some(Action::Export(None)),
        TuiEvent::Clear => {
            tui.search_box.clear();
            tui.focus = Focus::Search;
            Some(Action::Clear)
        }
        TuiEvent::ToggleTab => {
            tui.details.toggle_tab();
            None
        }
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            None
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            None
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.details.handle_event(&event);
            None
        }
        // Typing in a list jumps to the search box and forwards the key.
        TuiEvent::InputChar(_) | TuiEvent::Backspace => {
            tui.focus = Focus::Search;
            tui.search_box
                .handle_event(&event)
                .map(|SearchEvent::Changed(text)| Action::Search(text))
        }
        _ => match tui.focus {
            Focus::Search => None,
            Focus::Cities => tui
                .cities
                .handle_event(&event)
                .map(|PickerEvent::Commit(city)| Action::SelectCity(city)),
            Focus::Universities => tui
                .universities
                .handle_event(&event)
                .map(|PickerEvent::Commit(id)| Action::SelectUniversity(id)),
            Focus::Faculties => tui
                .faculties
                .handle_event(&event)
                .map(|PickerEvent::Commit(id)| Action::SelectFaculty(id)),
        },
    };

    let Some(action) = action else {
        return Effect::None;
    };
    let effect = update(app, action);
    tui.sync(app);
    tui.details.reset_scroll();
    effect
}

/// Carry out an effect. Returns `true` when the loop should stop.
pub fn perform(app: &mut App, effect: Effect) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Export(dir) => {
            let result = export_full_catalog(app, &dir);
            update(app, Action::ExportFinished(result));
            false
        }
    }
}

fn export_full_catalog(app: &App, dir: &Path) -> Result<std::path::PathBuf, String> {
    export_to_dir(app.catalog.universities(), dir).map_err(|e| {
        warn!("Export to {} failed: {}", dir.display(), e);
        e.to_string()
    })
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let catalog = Arc::new(initialize_data());
    let mut app = App::from_config(catalog, &config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let effect = dispatch(app, tui, event);
            if effect != Effect::None {
                debug!("Performing effect: {:?}", effect);
            }
            if perform(app, effect) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            info!("Quitting");
            return Ok(());
        }
    }
}
