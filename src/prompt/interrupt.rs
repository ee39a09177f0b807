//! Interrupt capture.
//!
//! SIGINT and SIGTERM set a shared flag instead of killing the process. The
//! prompt loop polls the flag around every blocking read and ends the run
//! cleanly when it is raised.

use crate::error::{CfnewError, Result};
use signal_hook::consts::{SIGINT, SIGTERM};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Shared "an interrupt arrived" flag.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// A flag not wired to any signal. Tests raise it by hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register SIGINT and SIGTERM to raise the returned flag.
    pub fn install() -> Result<Self> {
        let interrupt = Self::new();
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&interrupt.flag)).map_err(|e| {
                CfnewError::UserError(format!(
                    "failed to install handler for signal {}: {}",
                    signal, e
                ))
            })?;
        }
        debug!("interrupt handlers installed");
        Ok(interrupt)
    }

    /// Whether an interrupt has been received.
    pub fn is_raised(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Raise the flag as if a signal had arrived.
    pub fn raise(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}
