//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{DEFAULT_CONFIG_FILE, TemplateSpec};
use crate::error::{CfnewError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

static TEMPLATE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid template name regex"));

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CfnewError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CfnewError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `{root}/.cfnew.yaml` is used
    /// when present and built-in defaults otherwise.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            return Self::load(path);
        }

        let default_path = root.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "loading config");
            Self::load(&default_path)
        } else {
            debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CfnewError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `contest` and `templates_dir` must be non-empty
    /// - `editor` must split into at least one word
    /// - template names must be letters, digits, `_` or `-`
    /// - template entries must be plain file names
    pub fn validate(&self) -> Result<()> {
        if self.contest.trim().is_empty() {
            return Err(CfnewError::ConfigError(
                "contest must not be empty".to_string(),
            ));
        }

        if self.templates_dir.trim().is_empty() {
            return Err(CfnewError::ConfigError(
                "templates_dir must not be empty".to_string(),
            ));
        }

        self.editor_command(None)?;

        for (name, template) in &self.templates {
            if !TEMPLATE_NAME_REGEX.is_match(name) {
                return Err(CfnewError::ConfigError(format!(
                    "template name '{}' may only contain letters, digits, '_' and '-'",
                    name
                )));
            }
            validate_template_files(name, template)?;
        }

        Ok(())
    }

    /// Look up a template by its CLI identifier.
    pub fn template(&self, name: &str) -> Option<&TemplateSpec> {
        self.templates.get(name)
    }

    /// Directory holding the files of the named template.
    pub fn template_dir(&self, root: &Path, name: &str) -> PathBuf {
        root.join(&self.templates_dir).join(name)
    }

    /// Split the editor command into program and arguments.
    ///
    /// `override_cmd` (from `--editor`) takes precedence over the configured editor.
    pub fn editor_command(&self, override_cmd: Option<&str>) -> Result<Vec<String>> {
        let command = override_cmd.unwrap_or(&self.editor);
        let words = shell_words::split(command).map_err(|e| {
            CfnewError::ConfigError(format!(
                "failed to parse editor command '{}': {}",
                command, e
            ))
        })?;

        if words.is_empty() {
            return Err(CfnewError::ConfigError(format!(
                "editor command is empty after parsing: '{}'",
                command
            )));
        }

        Ok(words)
    }
}

fn validate_template_files(name: &str, template: &TemplateSpec) -> Result<()> {
    let entries = template
        .copy
        .iter()
        .map(|f| ("copy", f))
        .chain(template.link.iter().map(|f| ("link", f)))
        .chain(template.open.iter().map(|f| ("open", f)));

    for (kind, file) in entries {
        if !is_plain_file_name(file) {
            return Err(CfnewError::ConfigError(format!(
                "template '{}' has invalid {} entry '{}': expected a plain file name",
                name, kind, file
            )));
        }
    }

    Ok(())
}

fn is_plain_file_name(file: &str) -> bool {
    !file.is_empty() && file != "." && file != ".." && !file.contains(['/', '\\'])
}
