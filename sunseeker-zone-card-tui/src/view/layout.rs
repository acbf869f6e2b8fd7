//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::theme::colors;
use super::{card, editor, statusbar};

pub fn render(app: &App, frame: &mut Frame) {
    // Title bar + content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(app, frame, main_layout[0]);

    let content_area = main_layout[1];
    if app.editor.is_some() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(content_area);
        card::render(app, frame, columns[0]);
        editor::render(app, frame, columns[1]);
    } else {
        card::render(app, frame, content_area);
    }

    statusbar::render(app, frame, main_layout[2]);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let source = app
        .host
        .path()
        .map(|path| format!(" ({})", path.display()))
        .unwrap_or_default();
    let title = Paragraph::new(format!(" Sunseeker Zone Card{source}"))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
