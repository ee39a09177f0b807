//! Problem folder scaffolding.
//!
//! # What scaffolding does
//!
//! 1. Creates `{root}/{year}/{round}-{slug}/` (existing folders are fine)
//! 2. Writes `README.md`, replacing any previous one
//! 3. For a template in the catalogue: copies its files and links its shared
//!    files into the folder
//!
//! Any other template identifier stops after step 2. The editor is launched
//! separately by the caller with [`editor::launch_editor`].

pub mod editor;
pub mod template;


pub use editor::{EditorOutcome, launch_editor};
pub use template::{TemplateFiles, apply_template};

use crate::config::Config;
use crate::error::Result;
use crate::fs::{atomic_write_file, ensure_dir};
use crate::problem::ProblemLayout;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a scaffolding run produced. Paths are relative to the problems root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub folder: PathBuf,
    pub readme: PathBuf,
    /// `None` when the template identifier is not in the catalogue.
    pub template: Option<TemplateFiles>,
}

impl ScaffoldReport {
    /// Files to hand to the editor; empty when no template was applied.
    pub fn files_to_open(&self) -> &[PathBuf] {
        match &self.template {
            Some(files) => files.open.as_slice(),
            None => &[],
        }
    }
}

/// Create the problem folder, its README and, for known templates, the
/// template's files.
pub fn scaffold(
    root: &Path,
    layout: &ProblemLayout,
    template_name: &str,
    config: &Config,
) -> Result<ScaffoldReport> {
    let folder = root.join(&layout.folder);
    ensure_dir(&folder)?;
    debug!(folder = %folder.display(), "problem folder ready");

    atomic_write_file(root.join(layout.readme_path()), &layout.readme)?;
    info!(folder = %layout.folder_display(), "wrote README");

    let template = match config.template(template_name) {
        Some(spec) => Some(apply_template(root, layout, template_name, spec, config)?),
        None => {
            debug!(template = template_name, "template not in catalogue, skipping");
            None
        }
    };

    Ok(ScaffoldReport {
        folder: layout.folder.clone(),
        readme: layout.readme_path(),
        template,
    })
}
