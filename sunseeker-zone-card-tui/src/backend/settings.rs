//! Runtime settings
//!
//! Read from environment variables, falling back to platform directories.

use std::path::PathBuf;

/// Configuration file override
pub const CONFIG_VAR: &str = "ZONE_CARD_CONFIG";
/// Snapshot file override
pub const STATES_VAR: &str = "ZONE_CARD_STATES";
/// Host language code
pub const LANGUAGE_VAR: &str = "ZONE_CARD_LANGUAGE";
/// Log filter directives
pub const LOG_VAR: &str = "ZONE_CARD_LOG";
/// `light` or `dark`
pub const THEME_VAR: &str = "ZONE_CARD_THEME";

const APP_DIR: &str = "sunseeker-zone-card";

/// Paths and host options for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_path: PathBuf,
    pub states_path: PathBuf,
    pub log_dir: PathBuf,
    pub language: Option<String>,
    pub light_theme: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            config_path: non_empty(CONFIG_VAR)
                .map_or_else(|| config_dir().join("config.json"), PathBuf::from),
            states_path: non_empty(STATES_VAR)
                .map_or_else(|| data_dir().join("states.json"), PathBuf::from),
            log_dir: data_dir(),
            language: non_empty(LANGUAGE_VAR),
            light_theme: non_empty(THEME_VAR)
                .is_some_and(|theme| theme.trim().eq_ignore_ascii_case("light")),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_defaults() {
        let settings = Settings::from_lookup(|key| match key {
            CONFIG_VAR => Some("/tmp/card.json".to_string()),
            STATES_VAR => Some("demos/mower_states.json".to_string()),
            LANGUAGE_VAR => Some("de-AT".to_string()),
            THEME_VAR => Some("Light".to_string()),
            _ => None,
        });

        assert_eq!(settings.config_path, PathBuf::from("/tmp/card.json"));
        assert_eq!(settings.states_path, PathBuf::from("demos/mower_states.json"));
        assert_eq!(settings.language.as_deref(), Some("de-AT"));
        assert!(settings.light_theme);
    }

    #[test]
    fn blank_values_use_defaults() {
        let settings = Settings::from_lookup(|key| (key == LANGUAGE_VAR).then(|| " ".to_string()));

        assert!(settings.config_path.ends_with("sunseeker-zone-card/config.json"));
        assert!(settings.states_path.ends_with("sunseeker-zone-card/states.json"));
        assert_eq!(settings.language, None);
        assert!(!settings.light_theme);
    }
}
