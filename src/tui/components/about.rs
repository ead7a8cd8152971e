//! # About Overlay
//!
//! Centered popup describing the browser. Opened with Ctrl+A, dismissed
//! with Esc, Enter or Ctrl+A.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use super::statistics::centered_rect;
use crate::tui::component::Component;

pub struct AboutOverlay;

impl Component for AboutOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" About ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(about_lines().join("\n"))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, overlay);
    }
}

pub fn about_lines() -> Vec<String> {
    vec![
        format!(
            "Kosovo Universities Information System v{}",
            env!("CARGO_PKG_VERSION")
        ),
        String::new(),
        String::from("A terminal browser for universities, faculties,"),
        String::from("and departments in Kosovo."),
        String::new(),
        String::from("Features:"),
        String::from("• University and faculty browsing"),
        String::from("• Live search across all levels"),
        String::from("• Statistical analysis (Ctrl+S)"),
        String::from("• JSON export (Ctrl+E)"),
        String::new(),
        String::from("Developed for educational purposes."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_about_lines_name_the_version() {
        let lines = about_lines();
        assert_eq!(
            lines[0],
            format!("Kosovo Universities Information System v{}", env!("CARGO_PKG_VERSION"))
        );
        assert!(lines.contains(&"• JSON export (Ctrl+E)".to_string()));
    }

    #[test]
    fn test_render_about() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| AboutOverlay.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("About"));
        assert!(text.contains("Developed for educational purposes."));
    }
}
