//! Type definition module

mod command;
mod config;
mod entity;
mod view;

pub use command::{domain, format_number, ServiceCall, ServicePayload, StagedValue};
pub use config::{card_config_schema, CardConfig, CARD_TYPE, DEFAULT_HEADER};
pub use entity::{attr, domain_of, Attributes, Entity, HostState, Snapshot};
pub use view::{
    ButtonLabels, CardView, ChoiceOption, Control, EntityKind, EntityRow, SwitchView, ZoneView,
};
