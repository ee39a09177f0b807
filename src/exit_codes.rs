//! Exit code constants for the cfnew CLI.
//!
//! - 0: Success (including end-of-input and interrupts at a prompt)
//! - 1: User error (bad config, bad editor command)
//! - 2: Filesystem failure (mkdir, write, copy, symlink)
//! - 3: Editor failure (could not start, or killed by a signal)
//!
//! When the editor itself exits non-zero, its status is passed through.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid configuration or command-line values.
pub const USER_ERROR: i32 = 1;

/// Filesystem failure while creating the problem folder or its files.
pub const FILESYSTEM_FAILURE: i32 = 2;

/// The editor could not be launched or did not exit normally.
pub const EDITOR_FAILURE: i32 = 3;

/// Clamp an arbitrary process status into the range an `ExitCode` can carry.
///
/// Statuses outside `0..=255` collapse to [`EDITOR_FAILURE`].
pub fn to_exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(EDITOR_FAILURE as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, FILESYSTEM_FAILURE, EDITOR_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_match_documented_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(FILESYSTEM_FAILURE, 2);
        assert_eq!(EDITOR_FAILURE, 3);
    }

    #[test]
    fn to_exit_byte_passes_through_valid_statuses() {
        assert_eq!(to_exit_byte(0), 0);
        assert_eq!(to_exit_byte(42), 42);
        assert_eq!(to_exit_byte(255), 255);
    }

    #[test]
    fn to_exit_byte_collapses_out_of_range() {
        assert_eq!(to_exit_byte(-1), EDITOR_FAILURE as u8);
        assert_eq!(to_exit_byte(256), EDITOR_FAILURE as u8);
    }
}
