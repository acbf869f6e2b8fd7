//! English translation (en)

use super::keys::{ButtonTexts, Translations};

/// Options are canonical English, so there is nothing to map.
pub const TRANSLATIONS: Translations = Translations {
    buttons: ButtonTexts {
        submit: "Submit",
        cancel: "Cancel",
        edit: "Edit",
    },
    options: &[],
};
