//! Translation key definitions
//!
//! Structs for every translated text, so a missing entry is a compile error.

/// Root structure of all translated texts
pub struct Translations {
    /// Edit-mode button captions
    pub buttons: ButtonTexts,
    /// Option texts keyed by canonical English option
    pub options: &'static [(&'static str, &'static str)],
}

/// Edit-mode button captions
pub struct ButtonTexts {
    pub submit: &'static str,
    pub cancel: &'static str,
    pub edit: &'static str,
}
