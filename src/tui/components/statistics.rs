//! # Statistics Overlay
//!
//! Centered popup showing a `StatisticsReport`. Opened with Ctrl+S,
//! dismissed with Esc (or Ctrl+S again).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::stats::StatisticsReport;
use crate::tui::component::Component;

/// Transient render wrapper for the statistics overlay.
pub struct StatisticsOverlay<'a> {
    report: &'a StatisticsReport,
    scroll: u16,
}

impl<'a> StatisticsOverlay<'a> {
    pub fn new(report: &'a StatisticsReport, scroll: u16) -> Self {
        Self { report, scroll }
    }
}

impl Component for StatisticsOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 80, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Kosovo Universities Statistics ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" PgUp/PgDn Scroll  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let text = statistics_lines(self.report).join("\n");
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, overlay);
    }
}

/// Text of the statistics overlay.
pub fn statistics_lines(report: &StatisticsReport) -> Vec<String> {
    let mut lines = vec![
        String::from("KOSOVO UNIVERSITIES SYSTEM STATISTICS"),
        "=".repeat(50),
        String::new(),
        String::from("OVERALL STATISTICS:"),
        format!("• Total Universities: {}", report.total_universities),
        format!("• Total Faculties: {}", report.total_faculties),
        format!("• Total Departments: {}", report.total_departments),
        format!("• Total Subjects: {}", report.total_subjects),
        format!("• Cities with Universities: {}", report.cities_with_universities()),
        String::new(),
        String::from("UNIVERSITIES BY CITY:"),
        "-".repeat(30),
    ];
    for entry in &report.per_city {
        lines.push(format!("{}:", entry.city));
        lines.push(format!("   • Universities: {}", entry.university_count));
        lines.push(format!("   • Faculties: {}", entry.faculty_count));
        lines.push(String::new());
    }
    lines.push(String::from("LARGEST UNIVERSITIES:"));
    lines.push("-".repeat(25));
    for (i, ranking) in report.top_by_faculty_count.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, ranking.name));
        lines.push(format!("   {} faculties", ranking.faculty_count));
        lines.push(String::new());
    }
    lines
}

/// Compute a centered rect using percentage of the outer rect.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
