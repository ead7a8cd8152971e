//! # TitleBar Component
//!
//! Top status bar: application name, the current city scope and the latest
//! status message (selection, search result count, export outcome).
//!
//! Stateless: all data arrives as props.
//!
//! 1. **Status message**: `"Kosovo Universities | City: Peja | Exporting..."`
//! 2. **Default**: `"Kosovo Universities | City: Peja"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Label of the current city filter
    pub city_label: String,
    /// Status message (e.g. "Search 'law': 4 universities")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(city_label: String, status_message: String) -> Self {
        Self {
            city_label,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Kosovo Universities | City: {}", self.city_label)
        } else {
            format!(
                "Kosovo Universities | City: {} | {}",
                self.city_label, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Peja".to_string(), "Exporting...".to_string());
        let text = rendered(&mut title_bar);
        assert!(text.contains("Kosovo Universities"));
        assert!(text.contains("City: Peja"));
        assert!(text.contains("Exporting..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("All Cities".to_string(), String::new());
        let text = rendered(&mut title_bar);
        assert!(text.contains("City: All Cities"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
