//! Error types for the cfnew CLI.
//!
//! Uses thiserror for derive macros. Malformed prompt input never shows up
//! here: it is handled by re-prompting.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for cfnew operations.
#[derive(Error, Debug)]
pub enum CfnewError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Configuration file could not be read, parsed, or failed validation.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Filesystem operation failed.
    #[error("Filesystem operation failed: {0}")]
    FsError(String),

    /// Editor could not be launched or was terminated abnormally.
    #[error("Editor failed: {0}")]
    EditorError(String),

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    InputError(String),
}

impl CfnewError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CfnewError::UserError(_) => exit_codes::USER_ERROR,
            CfnewError::ConfigError(_) => exit_codes::USER_ERROR,
            CfnewError::InputError(_) => exit_codes::USER_ERROR,
            CfnewError::FsError(_) => exit_codes::FILESYSTEM_FAILURE,
            CfnewError::EditorError(_) => exit_codes::EDITOR_FAILURE,
        }
    }
}

/// Result type alias for cfnew operations.
pub type Result<T> = std::result::Result<T, CfnewError>;
