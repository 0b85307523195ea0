//! Persistent preferences.
pub mod defaults;
pub mod model;

pub use model::{
    BehaviorSettings, CounterSettings, SaveLocation, SaveSettings, Settings, TemplateSettings,
    CURRENT_SCHEMA_VERSION,
};
