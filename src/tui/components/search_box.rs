//! # SearchBox Component
//!
//! Single-line text field for the live search. Every edit emits
//! `SearchEvent::Changed` with the full buffer; the parent turns that into
//! `Action::Search`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Changed(String),
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether keyboard focus is here (Prop)
    pub focused: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Display columns taken by the buffer, for cursor placement.
    fn display_width(&self) -> u16 {
        u16::try_from(self.buffer.width()).unwrap_or(u16::MAX)
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Quick Search ");

        // Keep the tail of long input visible.
        let inner_width = area.width.saturating_sub(2);
        let scroll_x = self.display_width().saturating_sub(inner_width.saturating_sub(1));
        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, scroll_x))
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        if self.focused && area.width > 2 && area.height > 2 {
            let cursor_x = area.x + 1 + (self.display_width() - scroll_x).min(inner_width);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| SearchEvent::Changed(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_emits_full_buffer() {
        let mut search = SearchBox::new();
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('l')),
            Some(SearchEvent::Changed("l".to_string()))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('a')),
            Some(SearchEvent::Changed("la".to_string()))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("l".to_string()))
        );
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_other_events_are_ignored() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(search.handle_event(&TuiEvent::Submit), None);
        assert!(search.buffer.is_empty());
    }

    #[test]
    fn test_multibyte_backspace() {
        let mut search = SearchBox::new();
        search.handle_event(&TuiEvent::InputChar('ë'));
        search.handle_event(&TuiEvent::InputChar('ç'));
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("ë".to_string()))
        );
    }

    #[test]
    fn test_render_shows_title_and_text() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new();
        search.buffer = "medicine".to_string();

        terminal.draw(|f| search.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Quick Search"));
        assert!(text.contains("medicine"));
    }
}
