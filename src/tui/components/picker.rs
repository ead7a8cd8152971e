//! # Picker Component
//!
//! A titled, highlightable list used for cities, universities and faculties.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PickerState<K>` lives in `TuiState`
//! - `Picker` is created each frame with borrowed state
//!
//! Each entry pairs a key (`CityFilter`, `UniversityId`, `FacultyId`) with
//! its label. Enter commits the highlighted key.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for a picker list.
pub struct PickerState<K> {
    pub items: Vec<(K, String)>,
    pub selected: usize,
    pub list_state: ListState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent<K> {
    Commit(K),
}

impl<K: Copy + PartialEq> PickerState<K> {
    pub fn new(items: Vec<(K, String)>) -> Self {
        let mut state = Self {
            items: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
        };
        state.set_items(items);
        state
    }

    /// Replace the entries and move the highlight to the top.
    pub fn set_items(&mut self, items: Vec<(K, String)>) {
        self.items = items;
        self.selected = 0;
        self.list_state
            .select(if self.items.is_empty() { None } else { Some(0) });
    }

    /// Move the highlight onto `key` if it is listed.
    pub fn highlight(&mut self, key: K) {
        if let Some(index) = self.items.iter().position(|(k, _)| *k == key) {
            self.selected = index;
            self.list_state.select(Some(index));
        }
    }

    pub fn highlighted(&self) -> Option<K> {
        self.items.get(self.selected).map(|(k, _)| *k)
    }

    pub fn keys(&self) -> Vec<K> {
        self.items.iter().map(|(k, _)| *k).collect()
    }
}

impl<K: Copy + PartialEq> EventHandler for PickerState<K> {
    type Event = PickerEvent<K>;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                if !self.items.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.items.is_empty() {
                    self.selected = (self.selected + 1).min(self.items.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self.highlighted().map(PickerEvent::Commit),
            _ => None,
        }
    }
}

/// Transient render wrapper for a picker.
pub struct Picker<'a, K> {
    state: &'a mut PickerState<K>,
    title: &'a str,
    /// The committed entry, drawn with a marker.
    active: Option<K>,
    focused: bool,
}

impl<'a, K: Copy + PartialEq> Picker<'a, K> {
    pub fn new(state: &'a mut PickerState<K>, title: &'a str) -> Self {
        Self {
            state,
            title,
            active: None,
            focused: false,
        }
    }

    pub fn active(mut self, key: Option<K>) -> Self {
        self.active = key;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<K: Copy + PartialEq> Component for Picker<'_, K> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", self.title));

        // borders + marker column
        let label_width = usize::from(area.width.saturating_sub(4));
        let items: Vec<ListItem> = self
            .state
            .items
            .iter()
            .map(|(key, label)| {
                let is_active = self.active == Some(*key);
                let marker = if is_active { "* " } else { "  " };
                let style = if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(format!("{}{}", marker, truncate_str(label, label_width))).style(style)
            })
            .collect();

        let highlight = if self.focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(items).block(block).highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..."
/// if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn sample() -> PickerState<u8> {
        PickerState::new(vec![
            (1, "Gjilan".to_string()),
            (2, "Ferizaj".to_string()),
            (3, "Prizren".to_string()),
        ])
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut picker = sample();
        picker.handle_event(&TuiEvent::CursorUp);
        assert_eq!(picker.selected, 0);
        for _ in 0..5 {
            picker.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(picker.selected, 2);
        assert_eq!(picker.list_state.selected(), Some(2));
    }

    #[test]
    fn test_submit_commits_highlighted_key() {
        let mut picker = sample();
        picker.handle_event(&TuiEvent::CursorDown);
        assert_eq!(picker.handle_event(&TuiEvent::Submit), Some(PickerEvent::Commit(2)));
    }

    #[test]
    fn test_empty_picker_commits_nothing() {
        let mut picker: PickerState<u8> = PickerState::new(Vec::new());
        assert_eq!(picker.list_state.selected(), None);
        picker.handle_event(&TuiEvent::CursorDown);
        assert_eq!(picker.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_set_items_resets_and_highlight_moves() {
        let mut picker = sample();
        picker.handle_event(&TuiEvent::CursorDown);
        picker.set_items(vec![(7, "Peja".to_string()), (8, "Lipjan".to_string())]);
        assert_eq!(picker.highlighted(), Some(7));
        picker.highlight(8);
        assert_eq!(picker.highlighted(), Some(8));
        picker.highlight(42);
        assert_eq!(picker.highlighted(), Some(8));
        assert_eq!(picker.keys(), vec![7, 8]);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Prishtina", 20), "Prishtina");
        assert_eq!(truncate_str("University of Prishtina", 10), "Univers...");
        assert_eq!(truncate_str("Prishtina", 2), "..");
    }

    #[test]
    fn test_render_marks_active_entry() {
        let backend = TestBackend::new(24, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = sample();

        terminal
            .draw(|f| {
                Picker::new(&mut state, "Select City")
                    .active(Some(3))
                    .focused(true)
                    .render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Select City"));
        assert!(text.contains("Ferizaj"));
        assert!(text.contains("* Prizren"));
    }
}
