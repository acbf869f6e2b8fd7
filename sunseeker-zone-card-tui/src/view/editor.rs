//! Configuration editor panel

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sunseeker_zone_card_core::services::{EditorField, NONE_SELECTED};
use unicode_width::UnicodeWidthStr;

use crate::model::{field_label, App, EditorState, FIELDS};

use super::theme::{colors, Styles};

const LABEL_WIDTH: usize = 16;
// Indent before the field label
const TEXT_INSET: usize = 2;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(state) = &app.editor else {
        return;
    };

    let block = Block::default()
        .title(" Sunseeker Zone Card Editor ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let host_state = app.card.host_state();
    let preview = state.editor.preview(&host_state.snapshot);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("  Header: ", Styles::muted()),
            Span::styled(preview.header, Style::default().fg(colors().fg)),
        ]),
        Line::from(vec![
            Span::styled("  Entity: ", Styles::muted()),
            Span::styled(preview.entity, Style::default().fg(colors().fg)),
        ]),
        Line::from(""),
    ];

    let first_field_line = lines.len();
    lines.extend(FIELDS.iter().map(|field| field_line(state, *field)));

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Changes apply and save immediately",
        Styles::muted(),
    ));

    frame.render_widget(Paragraph::new(lines), inner);

    if state.field == EditorField::Header {
        let header_line = first_field_line + 1;
        let before_cursor: String = state
            .editor
            .header_input()
            .chars()
            .take(state.header_cursor)
            .collect();
        let x = TEXT_INSET + LABEL_WIDTH + before_cursor.width();
        frame.set_cursor_position(Position::new(
            inner.x + u16::try_from(x).unwrap_or(u16::MAX),
            inner.y + u16::try_from(header_line).unwrap_or(u16::MAX),
        ));
    }
}

fn field_line(state: &EditorState, field: EditorField) -> Line<'static> {
    let config = state.editor.config();
    let value = match field {
        EditorField::Entity => {
            if config.entity.is_empty() {
                format!("‹ {NONE_SELECTED} ›")
            } else {
                format!("‹ {} ›", config.entity)
            }
        }
        EditorField::Header => state.editor.header_input().to_string(),
        EditorField::SwitchEntity => {
            format!("‹ {} ›", config.switch_entity.as_deref().unwrap_or(NONE_SELECTED))
        }
        EditorField::SwitchName => state.switch_name.clone(),
        EditorField::CollapsedCard => {
            if config.collapsed_card { "[x]" } else { "[ ]" }.to_string()
        }
    };

    let focused = state.field == field;
    let label_style = if focused { Styles::selected() } else { Styles::muted() };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<LABEL_WIDTH$}", field_label(field)), label_style),
        Span::styled(value, Style::default().fg(colors().fg)),
    ])
}
