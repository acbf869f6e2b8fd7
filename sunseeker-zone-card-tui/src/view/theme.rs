//! Theme and styles

use ratatui::style::{Color, Modifier, Style};
use std::sync::atomic::{AtomicU8, Ordering};

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// Select the light or dark palette
pub fn set_light_theme(light: bool) {
    CURRENT_THEME.store(u8::from(light), Ordering::SeqCst);
}

/// Colors of the active theme
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub muted: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(220, 224, 214),
            border: Color::Rgb(70, 78, 66),
            border_focused: Color::Rgb(120, 180, 90),
            highlight: Color::Rgb(46, 125, 50),
            selected_bg: Color::Rgb(56, 92, 48),
            selected_fg: Color::White,
            success: Color::Rgb(139, 195, 74),
            warning: Color::Rgb(255, 183, 77),
            muted: Color::Rgb(120, 126, 116),
        }
    }

    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(40, 48, 36),
            border: Color::Rgb(190, 200, 184),
            border_focused: Color::Rgb(56, 142, 60),
            highlight: Color::Rgb(56, 142, 60),
            selected_bg: Color::Rgb(200, 230, 201),
            selected_fg: Color::Black,
            success: Color::Rgb(46, 125, 50),
            warning: Color::Rgb(191, 120, 0),
            muted: Color::Rgb(120, 126, 116),
        }
    }
}

/// Shared styles
pub struct Styles;

impl Styles {
    /// Row under the cursor
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// Shortcut key in a hint
    pub fn hint_key() -> Style {
        Style::default().fg(colors().warning).add_modifier(Modifier::BOLD)
    }

    /// Shortcut description in a hint
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(226, 232, 220))
    }

    /// Value waiting in the edit buffer
    pub fn staged() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }
}
