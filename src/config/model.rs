//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Configuration for cfnew.
///
/// This struct represents the contents of `.cfnew.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Contest label used in the README title (default: "Codeforces").
    #[serde(default = "default_contest")]
    pub contest: String,

    /// Directory holding one sub-directory per template, relative to the
    /// problems root unless absolute (default: "templates").
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Editor command, split with shell-words (default: "code").
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Template catalogue keyed by the CLI template identifier.
    ///
    /// Replaces the built-in catalogue (just `cpp`) when present.
    #[serde(default = "default_templates")]
    pub templates: BTreeMap<String, TemplateSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contest: default_contest(),
            templates_dir: default_templates_dir(),
            editor: default_editor(),
            templates: default_templates(),
        }
    }
}
