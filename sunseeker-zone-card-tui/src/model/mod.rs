//! Model layer: everything the view reads and the update layer mutates

mod app;
mod cursor;
mod editor;

pub use app::{App, NumberInput};
pub use cursor::CursorTarget;
pub use editor::{cycle, field_label, switch_candidates, EditorState, FIELDS};
