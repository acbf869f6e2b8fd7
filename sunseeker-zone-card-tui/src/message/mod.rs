//! Message layer
//!
//! Input events are translated into messages; the update layer consumes them.

mod app;
mod card;
mod editor;

pub use app::AppMessage;
pub use card::CardMessage;
pub use editor::EditorMessage;
