use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{AboutOverlay, Details, Picker, StatisticsOverlay, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

const HELP_TEXT: &str =
    " Tab Focus  Enter Select  Ctrl+T Tabs  Ctrl+S Stats  Ctrl+E Export  Ctrl+L Clear  Ctrl+A About  Ctrl+Q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Fill, Length, Min, Percentage};

    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [left_area, right_area] =
        Layout::horizontal([Percentage(35), Percentage(65)]).areas(body_area);
    // search box, "All Cities" + eight cities, universities, faculties
    let [search_area, cities_area, universities_area, faculties_area] =
        Layout::vertical([Length(3), Length(11), Fill(1), Fill(1)]).areas(left_area);

    TitleBar::new(
        app.selection.city().label().to_string(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    tui.search_box.focused =
        tui.focus == Focus::Search && app.statistics.is_none() && !tui.show_about;
    tui.search_box.render(frame, search_area);

    Picker::new(&mut tui.cities, "Select City")
        .active(Some(app.selection.city()))
        .focused(tui.focus == Focus::Cities)
        .render(frame, cities_area);
    Picker::new(&mut tui.universities, "Select University")
        .active(app.selection.university_id())
        .focused(tui.focus == Focus::Universities)
        .render(frame, universities_area);
    Picker::new(&mut tui.faculties, "Select Faculty")
        .active(app.selection.faculty_id())
        .focused(tui.focus == Focus::Faculties)
        .render(frame, faculties_area);

    Details::new(&mut tui.details, app).render(frame, right_area);

    frame.render_widget(
        Line::from(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(report) = &app.statistics {
        StatisticsOverlay::new(report, tui.statistics_scroll).render(frame, frame.area());
    }
    if tui.show_about {
        AboutOverlay.render(frame, frame.area());
    }
}
