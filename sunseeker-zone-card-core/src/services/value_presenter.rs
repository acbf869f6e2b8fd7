//! Value presenter
//!
//! Maps an entity's domain to a display and edit representation.

use crate::i18n::{translate_option, Language};
use crate::types::{
    attr, domain, domain_of, ChoiceOption, Control, Entity, EntityKind, StagedValue,
};

/// Number bounds used when the entity does not report them
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;

/// Presentation kind for an entity identifier
pub fn kind_of(entity_id: &str) -> EntityKind {
    match domain_of(entity_id) {
        domain::SELECT => EntityKind::Choice,
        domain::NUMBER => EntityKind::Number,
        domain::SWITCH => EntityKind::Toggle,
        _ => EntityKind::Readout,
    }
}

/// `(min, max, step)` of a number entity
pub fn number_bounds(entity: &Entity) -> (f64, f64, f64) {
    let min = entity.number_attribute(attr::MIN).unwrap_or(DEFAULT_MIN);
    let max = entity.number_attribute(attr::MAX).unwrap_or(DEFAULT_MAX);
    let step = entity
        .number_attribute(attr::STEP)
        .filter(|step| *step > 0.0)
        .unwrap_or(DEFAULT_STEP);
    (min, max, step)
}

/// Build the control for an entity
///
/// A staged value, when present, is shown instead of the live state.
pub fn present(entity: &Entity, language: Language, staged: Option<&StagedValue>) -> Control {
    let staged = staged.map(StagedValue::as_state);

    match kind_of(&entity.entity_id) {
        EntityKind::Choice => Control::Choice {
            options: entity
                .options()
                .unwrap_or_default()
                .into_iter()
                .map(|value| ChoiceOption {
                    label: translate_option(&value, language).to_string(),
                    value,
                })
                .collect(),
            selected: staged.unwrap_or_else(|| entity.state.clone()),
        },
        EntityKind::Number => {
            let (min, max, step) = number_bounds(entity);
            Control::Number {
                value: staged.unwrap_or_else(|| entity.state.clone()),
                min,
                max,
                step,
                unit: entity.unit().map(str::to_string),
            }
        }
        EntityKind::Toggle => Control::Toggle {
            on: staged.map_or_else(|| entity.is_on(), |state| state == "on"),
        },
        EntityKind::Readout => Control::Readout {
            text: match entity.unit() {
                Some(unit) => format!("{} {unit}", entity.state),
                None => entity.state.clone(),
            },
        },
    }
}
