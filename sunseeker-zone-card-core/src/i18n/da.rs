//! Danish translation (da)

use super::keys::{ButtonTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    buttons: ButtonTexts {
        submit: "Indsend",
        cancel: "Annuller",
        edit: "Rediger",
    },
    options: &[
        ("Slow", "Langsom"),
        ("Normal", "Normal"),
        ("Fast", "Hurtig"),
        ("Narrow", "Smal"),
        ("Wide", "Bred"),
        ("Change pattern", "Skift mønster"),
        ("User defined", "Brugerdefineret"),
    ],
};
