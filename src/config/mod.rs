//! Configuration model for cfnew.
//!
//! This module defines the Config struct that represents the optional
//! `.cfnew.yaml` file at the problems root. It supports forward-compatible
//! YAML parsing (unknown fields are ignored), defaults for every field, and
//! validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{DEFAULT_CONFIG_FILE, TemplateSpec};
