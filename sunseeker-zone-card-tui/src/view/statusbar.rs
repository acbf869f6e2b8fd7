//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, CursorTarget};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(bar, area);
}

/// Shortcut hints for the current focus
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if let Some(editor) = &app.editor {
        let mut hints = vec![("Tab", "Field"), ("←→", "Change")];
        if editor.is_text_field() {
            hints.push(("Type", "Edit text"));
        }
        hints.push(("Esc", "Close"));
        return hints;
    }

    let mut hints = vec![("↑↓", "Select")];
    match app.cursor.current() {
        Some(CursorTarget::Zone(_)) => hints.push(("Enter", "Expand")),
        Some(CursorTarget::Switch(_)) => hints.push(("←→", "Change")),
        Some(CursorTarget::Row { entity_id, .. }) => {
            let editable = app
                .view()
                .and_then(|view| view.row(entity_id))
                .is_some_and(|row| row.control.kind().is_editable());
            if editable {
                hints.push(("←→", "Change"));
            }
            if app.number_input.is_some() {
                hints.push(("Enter", "Apply"));
            }
        }
        None => {}
    }
    if app.card.can_pick_zone_entity() {
        hints.push(("z", "Zone list"));
    }

    if app.card.is_editing() {
        hints.push(("s", "Submit"));
        hints.push(("Esc", "Cancel"));
    } else {
        hints.push(("e", "Edit"));
    }
    hints.extend([("C", "Collapse"), ("c", "Configure"), ("r", "Reload"), ("q", "Quit")]);
    hints
}
