//! Architecture abstraction layer
//!
//! Every hardware touch the hand-off core makes goes through
//! [`HartControl`], so the publication protocol and the entry sequence can
//! run against a simulated hart on the host as well as on a real RISC-V
//! machine.

use core::fmt;

#[cfg(target_arch = "riscv64")]
pub mod riscv64;

/// RISC-V privilege levels, encoded as in `mstatus.MPP`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PrivilegeLevel {
    User = 0,
    Supervisor = 1,
    Machine = 3,
}

impl PrivilegeLevel {
    /// The level the bootloader itself runs at
    pub const fn bootloader() -> Self {
        PrivilegeLevel::Machine
    }

    /// Check if privilege level is higher
    pub fn is_higher_than(&self, other: &PrivilegeLevel) -> bool {
        (*self as u8) > (*other as u8)
    }

    pub fn name(self) -> &'static str {
        match self {
            PrivilegeLevel::User => "U",
            PrivilegeLevel::Supervisor => "S",
            PrivilegeLevel::Machine => "M",
        }
    }
}

impl fmt::Display for PrivilegeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-mode", self.name())
    }
}

/// Per-hart hardware operations used by the hand-off core.
///
/// One value of an implementing type represents the hart that is currently
/// executing; none of the methods target another hart.
pub trait HartControl {
    /// Id of the executing hart
    fn hart_id(&self) -> usize;

    /// Full memory barrier: all memory operations before it are visible to
    /// other harts before any memory operation after it.
    fn memory_barrier(&self);

    /// Hint issued between two polls of the handoff flag
    fn spin_hint(&self) {
        core::hint::spin_loop();
    }

    /// Program the privilege level the trap return drops to
    fn set_previous_privilege(&self, level: PrivilegeLevel);

    /// Program the exception-return target register
    fn set_exception_return(&self, entry: usize);

    /// Execute the trap-return instruction.
    ///
    /// # Safety
    ///
    /// The exception-return target and previous-privilege field must have
    /// been programmed for a valid destination. Control never comes back.
    unsafe fn trap_return(&self) -> !;

    /// Report a fatal diagnostic and stop the hart
    fn halt(&self, reason: &dyn fmt::Display) -> !;
}
