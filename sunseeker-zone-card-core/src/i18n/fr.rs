//! French translation (fr)

use super::keys::{ButtonTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    buttons: ButtonTexts {
        submit: "Envoyer",
        cancel: "Annuler",
        edit: "Modifier",
    },
    options: &[
        ("Slow", "Lent"),
        ("Normal", "Normal"),
        ("Fast", "Rapide"),
        ("Narrow", "Étroite"),
        ("Wide", "Large"),
        ("Change pattern", "Changer le motif"),
        ("User defined", "Défini par l'utilisateur"),
    ],
};
