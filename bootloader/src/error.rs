//! Hand-off error handling
//!
//! This module defines the fault kinds the hand-off core can report.
//! Both are fatal: the boot hart converts them into a halt, they are never
//! retried.

use core::fmt;

/// Hand-off error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffError {
    /// The loaded program is not a supervisor-mode image
    UnsupportedMode,

    /// Execution continued past the trap return into the loaded program
    TransferReturned,
}

impl HandoffError {
    /// Convert to an error code suitable for a firmware status word
    pub fn as_error_code(&self) -> u32 {
        match self {
            HandoffError::UnsupportedMode => 0xB001,
            HandoffError::TransferReturned => 0xF000,
        }
    }

    /// Get a human-readable description of the error
    pub fn description(&self) -> &'static str {
        match self {
            HandoffError::UnsupportedMode => {
                "fsbl can't run user binaries; try using pk instead"
            }
            HandoffError::TransferReturned => {
                "control returned from the loaded program entry"
            }
        }
    }
}

impl fmt::Display for HandoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandoffError: {} (code: {:#x})", self.description(), self.as_error_code())
    }
}

/// Result type used throughout the hand-off core
pub type Result<T = ()> = core::result::Result<T, HandoffError>;
