//! Main application message

use super::{CardMessage, EditorMessage};

/// Main application message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Card interaction
    Card(CardMessage),

    /// Configuration editor interaction
    Editor(EditorMessage),

    /// Open the configuration editor
    OpenEditor,

    /// Re-read the snapshot file
    Reload,

    /// No operation (ignored events)
    Noop,
}
