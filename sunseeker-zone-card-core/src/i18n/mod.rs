//! Translation table
//!
//! A fixed, small table: option texts and the three edit-mode buttons for
//! da/de/fr. Anything unknown falls back to the English text.

mod da;
mod de;
mod en;
mod fr;
pub mod keys;

pub use keys::{ButtonTexts, Translations};

use crate::types::ButtonLabels;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Danish
    Da,
    /// German
    De,
    /// French
    Fr,
}

impl Language {
    /// Two-letter language code
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Da => "da",
            Language::De => "de",
            Language::Fr => "fr",
        }
    }

    /// Parse a two-letter code
    pub fn from_code(code: &str) -> Option<Language> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "da" => Some(Language::Da),
            "de" => Some(Language::De),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// Language from the host's active language (`"de-AT"` -> German)
    ///
    /// Only the component before the region subtag counts; unset or unknown
    /// codes give English.
    pub fn from_host(code: Option<&str>) -> Language {
        code.and_then(|code| code.split(['-', '_']).next())
            .and_then(Language::from_code)
            .unwrap_or_default()
    }

    /// Texts for this language
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::En => &en::TRANSLATIONS,
            Language::Da => &da::TRANSLATIONS,
            Language::De => &de::TRANSLATIONS,
            Language::Fr => &fr::TRANSLATIONS,
        }
    }

    /// Button captions for the card view
    pub fn button_labels(self) -> ButtonLabels {
        let buttons = &self.translations().buttons;
        ButtonLabels {
            edit: buttons.edit.to_string(),
            submit: buttons.submit.to_string(),
            cancel: buttons.cancel.to_string(),
        }
    }
}

/// Translate a canonical English option text, returning it unchanged when unknown
pub fn translate_option(option: &str, language: Language) -> &str {
    language
        .translations()
        .options
        .iter()
        .find(|(english, _)| *english == option)
        .map_or(option, |(_, translated)| *translated)
}
