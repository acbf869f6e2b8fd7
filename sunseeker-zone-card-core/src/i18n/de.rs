//! German translation (de)

use super::keys::{ButtonTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    buttons: ButtonTexts {
        submit: "Senden",
        cancel: "Abbrechen",
        edit: "Bearbeiten",
    },
    options: &[
        ("Slow", "Langsam"),
        ("Normal", "Normal"),
        ("Fast", "Schnell"),
        ("Narrow", "Schmal"),
        ("Wide", "Breit"),
        ("Change pattern", "Muster ändern"),
        ("User defined", "Benutzerdefiniert"),
    ],
};
