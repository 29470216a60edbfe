//! Configuration module — user-level client settings.

pub mod settings;

pub use settings::Settings;
