//! Shared hand-off region
//!
//! The loaded-program descriptor and the handoff flag live together in a
//! [`HandoffRegion`] that both roles receive by reference. The region owns
//! the barrier pairing:
//!
//! - writer: `memory_barrier()` then raise the flag ([`HandoffRegion::publish`])
//! - reader: observe the flag, then `memory_barrier()`, then read the
//!   descriptor ([`HandoffRegion::poll_once`])
//!
//! A descriptor read that is not preceded by an observed flag is not
//! offered by this API.

use static_assertions::assert_impl_all;

use super::flag::HandoffFlag;
use super::program::{LoadedProgram, ProgramSlot};
use crate::arch::HartControl;

#[derive(Debug)]
pub struct HandoffRegion {
    program: ProgramSlot,
    ready: HandoffFlag,
}

assert_impl_all!(HandoffRegion: Sync, Send);

impl HandoffRegion {
    pub const fn new() -> Self {
        Self {
            program: ProgramSlot::new(),
            ready: HandoffFlag::new(),
        }
    }

    /// Record the program the loader placed in memory.
    ///
    /// Must happen on the boot hart before [`Self::publish`].
    pub fn load_program(&self, program: LoadedProgram) {
        debug_assert!(
            !self.ready.is_raised(),
            "program descriptor changed after publication"
        );
        self.program.store(program);
    }

    /// Descriptor as seen by the boot hart, which wrote it itself.
    pub(crate) fn local_program(&self) -> LoadedProgram {
        self.program.load()
    }

    /// Make the descriptor and every memory effect before this call
    /// visible to harts that observe the flag.
    pub fn publish<H: HartControl + ?Sized>(&self, hart: &H) {
        hart.memory_barrier();
        let first = self.ready.raise();
        debug_assert!(first, "handoff flag published twice");
        log::info!("hart {}: handoff flag published", hart.hart_id());
    }

    /// The poll condition: has the boot hart published yet?
    pub fn is_published(&self) -> bool {
        self.ready.is_raised()
    }

    /// One poll step. On success the reader barrier has been issued and the
    /// returned descriptor is the published one.
    pub fn poll_once<H: HartControl + ?Sized>(&self, hart: &H) -> Option<LoadedProgram> {
        if !self.is_published() {
            return None;
        }
        hart.memory_barrier();
        Some(self.program.load())
    }

    /// Spin until the flag is published. No timeout and no backoff.
    pub fn wait<H: HartControl + ?Sized>(&self, hart: &H) -> LoadedProgram {
        log::debug!("hart {}: waiting for handoff flag", hart.hart_id());
        loop {
            if let Some(program) = self.poll_once(hart) {
                return program;
            }
            hart.spin_hint();
        }
    }
}

impl Default for HandoffRegion {
    fn default() -> Self {
        Self::new()
    }
}
