//! Filesystem utilities for cfnew.
//!
//! Every helper maps `io::Error` into [`CfnewError::FsError`](crate::error::CfnewError)
//! with the offending path in the message.

pub mod atomic;
mod copy;
mod link;

pub use atomic::atomic_write_file;
pub use copy::{copy_into, ensure_dir};
pub use link::symlink_file;
