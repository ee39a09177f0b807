//! Configuration types and defaults for cfnew.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Config file looked up at the problems root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".cfnew.yaml";

/// A named bundle of starter files.
///
/// All entries are plain file names inside `{templates_dir}/{template}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateSpec {
    /// Files copied verbatim into the new problem folder.
    pub copy: Vec<String>,

    /// Files symlinked from the problem folder back into the template directory.
    pub link: Vec<String>,

    /// Files (relative to the problem folder) opened in the editor.
    pub open: Vec<String>,
}

/// The built-in C++ template: starter source, sample input, shared Makefile.
pub fn cpp_template() -> TemplateSpec {
    TemplateSpec {
        copy: vec!["code.cpp".to_string(), "input.txt".to_string()],
        link: vec!["Makefile".to_string()],
        open: vec![
            "README.md".to_string(),
            "code.cpp".to_string(),
            "input.txt".to_string(),
        ],
    }
}

// Default value functions for serde
pub(crate) fn default_contest() -> String {
    "Codeforces".to_string()
}
pub(crate) fn default_templates_dir() -> String {
    "templates".to_string()
}
pub(crate) fn default_editor() -> String {
    "code".to_string()
}
pub(crate) fn default_templates() -> BTreeMap<String, TemplateSpec> {
    let mut templates = BTreeMap::new();
    templates.insert("cpp".to_string(), cpp_template());
    templates
}
