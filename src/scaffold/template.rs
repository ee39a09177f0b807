//! Template application: copies and shared-file links.

use crate::config::{Config, TemplateSpec};
use crate::error::Result;
use crate::fs::{copy_into, symlink_file};
use crate::problem::ProblemLayout;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Files produced by applying a template, relative to the problems root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFiles {
    pub copied: Vec<PathBuf>,
    pub linked: Vec<PathBuf>,
    pub open: Vec<PathBuf>,
}

/// Copy and link the template's files into the problem folder.
pub fn apply_template(
    root: &Path,
    layout: &ProblemLayout,
    name: &str,
    spec: &TemplateSpec,
    config: &Config,
) -> Result<TemplateFiles> {
    let source_dir = config.template_dir(root, name);
    let folder = root.join(&layout.folder);
    let mut files = TemplateFiles::default();

    for file in &spec.copy {
        let bytes = copy_into(source_dir.join(file), &folder)?;
        debug!(file = %file, bytes, "copied template file");
        files.copied.push(layout.folder.join(file));
    }

    for file in &spec.link {
        let target = link_target(&layout.folder, &config.templates_dir, name, file);
        symlink_file(&target, folder.join(file))?;
        debug!(file = %file, target = %target.display(), "linked shared file");
        files.linked.push(layout.folder.join(file));
    }

    files.open = spec.open.iter().map(|f| layout.folder.join(f)).collect();

    info!(
        template = name,
        copied = files.copied.len(),
        linked = files.linked.len(),
        "applied template"
    );
    Ok(files)
}

/// Target stored in a shared-file symlink.
///
/// Relative template directories are reached by climbing out of the problem
/// folder, so the link keeps working if the whole root is moved.
pub fn link_target(folder: &Path, templates_dir: &str, name: &str, file: &str) -> PathBuf {
    let templates_dir = Path::new(templates_dir);
    if templates_dir.is_absolute() {
        return templates_dir.join(name).join(file);
    }

    let depth = folder
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();
    let mut target = PathBuf::new();
    for _ in 0..depth {
        target.push("..");
    }
    target.join(templates_dir).join(name).join(file)
}
