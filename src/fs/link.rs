//! Symbolic links from problem folders to shared template files.

use crate::error::{CfnewError, Result};
use std::path::Path;

/// Create a symlink at `link` pointing to `target`.
///
/// `target` is stored as given, so relative targets resolve against the
/// directory containing `link`. Fails if anything already exists at `link`.
pub fn symlink_file<P: AsRef<Path>, Q: AsRef<Path>>(target: P, link: Q) -> Result<()> {
    let target = target.as_ref();
    let link = link.as_ref();

    platform_symlink(target, link).map_err(|e| {
        CfnewError::FsError(format!(
            "failed to link '{}' -> '{}': {}",
            link.display(),
            target.display(),
            e
        ))
    })
}

#[cfg(unix)]
fn platform_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn platform_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
