//! Card logic
//!
//! Leaf to root: zone directory, entity matcher, value presenter, edit session,
//! view reconciler, card controller. The configuration editor sits beside the
//! controller.

mod card_controller;
mod card_editor;
mod card_state;
mod edit_session;
mod entity_matcher;
mod value_presenter;
mod view_reconciler;
mod zone_directory;

pub use card_controller::ZoneCard;
pub use card_editor::{CardEditor, EditorField, EditorPreview, FocusRestore, NONE_SELECTED};
pub use card_state::CardState;
pub use edit_session::{dispatch_value, ChangeOutcome, EditMode, EditSession, ValueChange};
pub use entity_matcher::{label_after_zone, match_entities, zone_prefix};
pub use value_presenter::{kind_of, number_bounds, present, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP};
pub use view_reconciler::{decide, patch, rebuild, reconcile, ReconcileAction, RenderInput};
pub use zone_directory::{derive_zones, is_reserved_zone, CollapseMap, RESERVED_ZONE};
