//! View layer: render the model, never mutate it

mod card;
mod editor;
mod layout;
mod statusbar;
pub mod theme;

pub use layout::render;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::render;
    use sunseeker_zone_card_core::types::CardConfig;

    use crate::model::App;
    use crate::test_utils::{configured_app, demo_app, ZONE_LIST};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_zone_headers_collapsed() {
        let text = screen(&configured_app());

        assert!(text.contains("Sunseeker Zone Card"));
        assert!(text.contains("▼ Zones"));
        assert!(text.contains("▶ Front lawn"));
        assert!(text.contains("▶ Back yard"));
        assert!(!text.contains("Global"));
        assert!(text.contains("[ Edit ]"));
    }

    #[test]
    fn expanded_zone_without_rows_says_so() {
        let mut app = configured_app();
        assert!(app.card.toggle_zone("Side strip"));

        let text = screen(&app);

        assert!(text.contains("▼ Side strip (0)"));
        assert!(text.contains("No matching entities"));
        assert!(text.contains("▶ Front lawn"));
    }

    #[test]
    fn editable_card_shows_zone_list_picker() {
        assert!(!screen(&configured_app()).contains("Zone list"));

        let mut config = CardConfig::new(ZONE_LIST);
        config.editable = true;
        let text = screen(&demo_app(Some(config)));

        assert!(text.contains("Zone list ‹ select.mower_zone ›"));
        assert!(text.contains("z Zone list"));
    }

    #[test]
    fn unconfigured_card_shows_editor() {
        let text = screen(&demo_app(None));

        assert!(text.contains("Card not configured"));
        assert!(text.contains("Sunseeker Zone Card Editor"));
        assert!(text.contains("None selected"));
    }
}
