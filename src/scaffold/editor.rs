//! External editor launch.

use crate::error::{CfnewError, Result};
use crate::prompt::Interrupt;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// How often a running editor is checked for exit or interrupt.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How the editor step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    /// No editor was launched.
    Skipped,
    /// The editor exited with this status.
    Exited(i32),
    /// The editor was terminated by a signal.
    Signalled,
    /// An interrupt arrived while the editor ran; the editor was killed.
    Interrupted,
}

/// Run `command` (program plus leading arguments) on `files`, blocking
/// until it exits or `interrupt` is raised. The editor inherits stdio and
/// runs in `cwd`.
pub fn launch_editor(
    command: &[String],
    files: &[PathBuf],
    cwd: &Path,
    interrupt: &Interrupt,
) -> Result<EditorOutcome> {
    let Some((program, args)) = command.split_first() else {
        return Err(CfnewError::EditorError("editor command is empty".to_string()));
    };

    info!(editor = %program, files = files.len(), "launching editor");
    let mut child = Command::new(program)
        .args(args)
        .args(files)
        .current_dir(cwd)
        .spawn()
        .map_err(|e| {
            CfnewError::EditorError(format!("failed to launch '{}': {}", program, e))
        })?;

    wait_or_interrupt(&mut child, program, interrupt)
}

fn wait_or_interrupt(
    child: &mut Child,
    program: &str,
    interrupt: &Interrupt,
) -> Result<EditorOutcome> {
    loop {
        if interrupt.is_raised() {
            debug!(editor = %program, "interrupted, stopping editor");
            // The editor may already be gone; either way reap it.
            let _ = child.kill();
            let _ = child.wait();
            return Ok(EditorOutcome::Interrupted);
        }

        let status = child.try_wait().map_err(|e| {
            CfnewError::EditorError(format!("failed to wait for '{}': {}", program, e))
        })?;
        if let Some(status) = status {
            return Ok(match status.code() {
                Some(code) => EditorOutcome::Exited(code),
                None => EditorOutcome::Signalled,
            });
        }

        thread::sleep(POLL_INTERVAL);
    }
}
