//! Directory creation and template file copies.

use crate::error::{CfnewError, Result};
use std::fs;
use std::path::Path;

/// Create a directory and all of its parents. Existing directories are fine.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| {
        CfnewError::FsError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Copy `source` into `dest_dir`, keeping its file name.
///
/// An existing file of the same name is overwritten. Returns the number of
/// bytes copied.
pub fn copy_into<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest_dir: Q) -> Result<u64> {
    let source = source.as_ref();
    let dest_dir = dest_dir.as_ref();

    let file_name = source.file_name().ok_or_else(|| {
        CfnewError::FsError(format!("invalid source file '{}'", source.display()))
    })?;
    let destination = dest_dir.join(file_name);

    fs::copy(source, &destination).map_err(|e| {
        CfnewError::FsError(format!(
            "failed to copy '{}' to '{}': {}",
            source.display(),
            destination.display(),
            e
        ))
    })
}
