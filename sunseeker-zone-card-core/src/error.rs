//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
///
/// Only configuration handling and the configuration store return these. The
/// render path never fails: missing data degrades to an empty view instead.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CardError {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Entity not present in the current snapshot
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// Entity domain has no command mapping
    #[error("Unsupported domain: {0}")]
    UnsupportedDomain(String),

    /// Value cannot be applied to the entity
    #[error("Invalid value for {entity_id}: {message}")]
    InvalidValue { entity_id: String, message: String },

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CardError {
    /// Whether it is expected behavior (user input, missing entity), used for log
    /// classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidConfig(_)
            | Self::EntityNotFound(_)
            | Self::UnsupportedDomain(_)
            | Self::InvalidValue { .. } => true,
            Self::Serialization(_) | Self::Storage(_) => false,
        }
    }
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Core layer Result type alias
pub type CardResult<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_expected() {
        assert!(CardError::InvalidConfig("entity".to_string()).is_expected());
        assert!(CardError::UnsupportedDomain("sensor".to_string()).is_expected());
        assert!(!CardError::Storage("disk full".to_string()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CardError::EntityNotFound("select.zone".to_string());
        let json = serde_json::to_value(&err).unwrap_or_default();
        assert_eq!(json["code"], "EntityNotFound");
        assert_eq!(json["details"], "select.zone");
    }
}
