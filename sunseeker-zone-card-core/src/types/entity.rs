//! Entity snapshot types
//!
//! The host pushes the whole snapshot on every change; the card only reads it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entity attribute mapping (`friendly_name`, `options`, `min`, ...)
pub type Attributes = Map<String, Value>;

/// Attribute keys read by the card
pub mod attr {
    pub const FRIENDLY_NAME: &str = "friendly_name";
    pub const OPTIONS: &str = "options";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const STEP: &str = "step";
    pub const UNIT: &str = "unit_of_measurement";
}

/// Domain qualifier of an entity identifier (`"select.mower_speed"` -> `"select"`)
pub fn domain_of(entity_id: &str) -> &str {
    entity_id.split('.').next().unwrap_or(entity_id)
}

/// One state entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Filled from the snapshot key
    #[serde(skip)]
    pub entity_id: String,
    /// Current state string
    pub state: String,
    /// Attributes
    #[serde(default)]
    pub attributes: Attributes,
}

impl Entity {
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: Attributes::new(),
        }
    }

    /// Builder-style attribute setter
    #[must_use]
    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Domain qualifier of this entity
    pub fn domain(&self) -> &str {
        domain_of(&self.entity_id)
    }

    /// Human-readable name, if the host supplied a non-empty one
    pub fn friendly_name(&self) -> Option<&str> {
        self.attributes
            .get(attr::FRIENDLY_NAME)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Friendly name with the identifier as fallback
    pub fn label(&self) -> &str {
        self.friendly_name().unwrap_or(&self.entity_id)
    }

    /// Enumerated options, `None` when the attribute is missing or not a list
    pub fn options(&self) -> Option<Vec<String>> {
        let options = self.attributes.get(attr::OPTIONS)?.as_array()?;
        Some(
            options
                .iter()
                .filter_map(|option| match option {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect(),
        )
    }

    /// Numeric attribute (`min`, `max`, `step`)
    pub fn number_attribute(&self, key: &str) -> Option<f64> {
        match self.attributes.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|value| value.is_finite())
    }

    /// Unit of measurement, if any
    pub fn unit(&self) -> Option<&str> {
        self.attributes
            .get(attr::UNIT)
            .and_then(Value::as_str)
            .filter(|unit| !unit.is_empty())
    }

    pub fn is_on(&self) -> bool {
        self.state == "on"
    }
}

/// Point-in-time mapping of entity identifiers to entities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Entity>", into = "BTreeMap<String, Entity>")]
pub struct Snapshot {
    entities: BTreeMap<String, Entity>,
}

impl From<BTreeMap<String, Entity>> for Snapshot {
    fn from(mut entities: BTreeMap<String, Entity>) -> Self {
        for (entity_id, entity) in &mut entities {
            entity.entity_id.clone_from(entity_id);
        }
        Self { entities }
    }
}

impl From<Snapshot> for BTreeMap<String, Entity> {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.entities
    }
}

impl FromIterator<Entity> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self {
            entities: iter
                .into_iter()
                .map(|entity| (entity.entity_id.clone(), entity))
                .collect(),
        }
    }
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entity
    pub fn insert(&mut self, entity: Entity) {
        self.entities.insert(entity.entity_id.clone(), entity);
    }

    pub fn get(&self, entity_id: &str) -> Option<&Entity> {
        self.entities.get(entity_id)
    }

    pub fn get_mut(&mut self, entity_id: &str) -> Option<&mut Entity> {
        self.entities.get_mut(entity_id)
    }

    /// Entities in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Everything the host pushes to the card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostState {
    /// Entity snapshot
    pub snapshot: Snapshot,
    /// Active language code (`"de"`, `"fr-CA"`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl HostState {
    pub fn new(snapshot: Snapshot, language: Option<String>) -> Self {
        Self { snapshot, language }
    }
}
