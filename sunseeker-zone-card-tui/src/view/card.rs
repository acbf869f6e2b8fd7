//! Zone card panel

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sunseeker_zone_card_core::types::{CardView, Control, EntityRow};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, CursorTarget, NumberInput};

use super::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(view) = app.view() else {
        render_unconfigured(app, frame, area);
        return;
    };

    let marker = if view.collapsed { "▶" } else { "▼" };
    let block = Block::default()
        .title(format!(" {marker} {} ", view.header))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.editor.is_none()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.collapsed {
        let hint = Line::styled("  Collapsed, press C to expand", Styles::muted());
        frame.render_widget(Paragraph::new(hint), inner);
        return;
    }

    let (lines, cursor_line) = card_lines(app, view);

    // Keep the cursor line in sight
    let visible = usize::from(inner.height.max(1));
    let offset = cursor_line.map_or(0, |line| line.saturating_sub(visible - 1));
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

fn render_unconfigured(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Zone card ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.editor.is_none()));
    let content = vec![
        Line::from(""),
        Line::styled("  Card not configured", Style::default().fg(colors().fg)),
        Line::styled("  Pick a zone entity in the editor (c)", Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Card body lines and the index of the line under the cursor
fn card_lines<'a>(app: &'a App, view: &'a CardView) -> (Vec<Line<'a>>, Option<usize>) {
    let mut lines = Vec::new();
    let mut cursor_line = None;
    let mut mark = |lines: &Vec<Line<'a>>, target: &CursorTarget| {
        if app.cursor.is_on(target) {
            cursor_line = Some(lines.len());
        }
        app.cursor.is_on(target)
    };

    if let Some(entity_id) = app.card.zone_entity().filter(|_| app.card.can_pick_zone_entity()) {
        lines.push(Line::from(vec![
            Span::styled(" Zone list ", Styles::muted()),
            Span::styled(format!("‹ {entity_id} ›"), Style::default().fg(colors().fg)),
            Span::styled("  z", Styles::hint_key()),
        ]));
        lines.push(Line::from(""));
    }

    if let Some(switch) = &view.switch {
        let selected = mark(&lines, &CursorTarget::Switch(switch.entity_id.clone()));
        let state = toggle_span(switch.on, switch.staged);
        lines.push(Line::from(vec![
            Span::raw(" "),
            state,
            Span::raw(" "),
            Span::styled(switch.label.as_str(), row_style(selected, false)),
        ]));
        lines.push(Line::from(""));
    }

    let label_width = view
        .zones
        .iter()
        .filter(|zone| !zone.collapsed)
        .flat_map(|zone| &zone.rows)
        .map(|row| row.label.width())
        .max()
        .unwrap_or(0);

    for zone in &view.zones {
        let selected = mark(&lines, &CursorTarget::Zone(zone.name.clone()));
        let marker = if zone.collapsed { "▶" } else { "▼" };
        let count = format!(" ({})", zone.rows.len());
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} {}", zone.name), row_style(selected, true)),
            Span::styled(count, Styles::muted()),
        ]));

        if zone.collapsed {
            continue;
        }
        if zone.rows.is_empty() {
            lines.push(Line::styled("     No matching entities", Styles::muted()));
        }
        for row in &zone.rows {
            let target = CursorTarget::Row {
                zone: zone.name.clone(),
                entity_id: row.entity_id.clone(),
            };
            let selected = mark(&lines, &target);
            lines.push(row_line(row, label_width, selected, app.number_input.as_ref()));
        }
    }

    lines.push(Line::from(""));
    lines.push(button_line(view));

    (lines, cursor_line)
}

fn row_line<'a>(
    row: &'a EntityRow,
    label_width: usize,
    selected: bool,
    input: Option<&NumberInput>,
) -> Line<'a> {
    let padding = " ".repeat(label_width.saturating_sub(row.label.width()));
    let mut spans = vec![
        Span::raw("     "),
        Span::styled(row.label.as_str(), row_style(selected, false)),
        Span::raw(format!("{padding}  ")),
    ];

    let typed = input.filter(|input| input.entity_id == row.entity_id);
    spans.push(match (&row.control, typed) {
        (Control::Number { unit, .. }, Some(input)) => {
            let unit = unit.as_deref().map(|u| format!(" {u}")).unwrap_or_default();
            Span::styled(format!("{}▏{unit}", input.text), Styles::staged())
        }
        (Control::Toggle { on }, _) => toggle_span(*on, row.staged),
        (Control::Choice { .. }, _) => {
            Span::styled(format!("‹ {} ›", row.control.display_value()), value_style(row.staged))
        }
        (control, _) => Span::styled(control.display_value(), value_style(row.staged)),
    });

    if row.staged {
        spans.push(Span::styled(" *", Styles::staged()));
    }
    Line::from(spans)
}

fn toggle_span(on: bool, staged: bool) -> Span<'static> {
    let c = colors();
    let (text, color) = if on { ("● on ", c.success) } else { ("○ off", c.muted) };
    let style = if staged { Styles::staged() } else { Style::default().fg(color) };
    Span::styled(text, style)
}

fn button_line(view: &CardView) -> Line<'_> {
    let mut spans = vec![Span::raw(" ")];
    if view.editing {
        spans.push(Span::styled(format!("[ {} ]", view.buttons.submit), Styles::hint_key()));
        spans.push(Span::styled(" s  ", Styles::hint_desc()));
        spans.push(Span::styled(format!("[ {} ]", view.buttons.cancel), Styles::hint_key()));
        spans.push(Span::styled(" Esc", Styles::hint_desc()));
    } else {
        spans.push(Span::styled(format!("[ {} ]", view.buttons.edit), Styles::hint_key()));
        spans.push(Span::styled(" e", Styles::hint_desc()));
    }
    Line::from(spans)
}

fn row_style(selected: bool, bold: bool) -> Style {
    if selected {
        Styles::selected()
    } else if bold {
        Styles::title()
    } else {
        Style::default().fg(colors().fg)
    }
}

fn value_style(staged: bool) -> Style {
    if staged {
        Styles::staged()
    } else {
        Style::default().fg(colors().fg)
    }
}
