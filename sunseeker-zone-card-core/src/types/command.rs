//! Commands sent to the host platform

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{CardError, CardResult};
use crate::types::entity::domain_of;

/// Entity domains the card can write to
pub mod domain {
    pub const SELECT: &str = "select";
    pub const NUMBER: &str = "number";
    pub const SWITCH: &str = "switch";
}

/// A value entered by the user, staged or applied directly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StagedValue {
    /// Choice option or `"on"`/`"off"`
    Text(String),
    /// Bounded number
    Number(f64),
}

impl StagedValue {
    /// Text as the host would report it in the entity state
    pub fn as_state(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => format_number(*value),
        }
    }
}

/// Format a number the way the platform reports numeric states (`5` not `5.0`)
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Payload of a service call besides the entity id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ServicePayload {
    None,
    Option(String),
    Value(f64),
}

/// `dispatch(domain, service, {entity_id, payload})`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    pub entity_id: String,
    pub payload: ServicePayload,
}

impl ServiceCall {
    pub fn select_option(entity_id: impl Into<String>, option: impl Into<String>) -> Self {
        Self {
            domain: domain::SELECT.to_string(),
            service: "select_option".to_string(),
            entity_id: entity_id.into(),
            payload: ServicePayload::Option(option.into()),
        }
    }

    pub fn set_value(entity_id: impl Into<String>, value: f64) -> Self {
        Self {
            domain: domain::NUMBER.to_string(),
            service: "set_value".to_string(),
            entity_id: entity_id.into(),
            payload: ServicePayload::Value(value),
        }
    }

    pub fn turn(entity_id: impl Into<String>, on: bool) -> Self {
        Self {
            domain: domain::SWITCH.to_string(),
            service: if on { "turn_on" } else { "turn_off" }.to_string(),
            entity_id: entity_id.into(),
            payload: ServicePayload::None,
        }
    }

    /// Map a value onto the command for the entity's domain
    ///
    /// Shared by direct-apply and batch commit.
    pub fn for_value(entity_id: &str, value: &StagedValue) -> CardResult<Self> {
        let invalid = |message: &str| CardError::InvalidValue {
            entity_id: entity_id.to_string(),
            message: message.to_string(),
        };

        match (domain_of(entity_id), value) {
            (domain::SELECT, StagedValue::Text(option)) => {
                Ok(Self::select_option(entity_id, option.clone()))
            }
            (domain::NUMBER, StagedValue::Number(number)) if number.is_finite() => {
                Ok(Self::set_value(entity_id, *number))
            }
            (domain::NUMBER, StagedValue::Number(_)) => Err(invalid("number is not finite")),
            (domain::SWITCH, StagedValue::Text(state)) => match state.as_str() {
                "on" => Ok(Self::turn(entity_id, true)),
                "off" => Ok(Self::turn(entity_id, false)),
                _ => Err(invalid("switch state must be on or off")),
            },
            (domain::SELECT | domain::NUMBER | domain::SWITCH, _) => {
                Err(invalid("value kind does not match the entity domain"))
            }
            (other, _) => Err(CardError::UnsupportedDomain(other.to_string())),
        }
    }

    /// Service data body as the platform expects it
    pub fn service_data(&self) -> Value {
        match &self.payload {
            ServicePayload::None => json!({ "entity_id": self.entity_id }),
            ServicePayload::Option(option) => {
                json!({ "entity_id": self.entity_id, "option": option })
            }
            ServicePayload::Value(value) => json!({ "entity_id": self.entity_id, "value": value }),
        }
    }
}
