//! Write-once readiness flag shared by all harts

use core::sync::atomic::{AtomicBool, Ordering};

/// One-writer, many-reader readiness signal.
///
/// Starts cleared and is raised once by the boot hart. There is no way to
/// clear it again.
#[derive(Debug)]
pub struct HandoffFlag {
    ready: AtomicBool,
}

impl HandoffFlag {
    pub const fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }

    /// Raise the flag. Returns `false` if it was already raised.
    pub fn raise(&self) -> bool {
        !self.ready.swap(true, Ordering::Release)
    }

    pub fn is_raised(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

impl Default for HandoffFlag {
    fn default() -> Self {
        Self::new()
    }
}
