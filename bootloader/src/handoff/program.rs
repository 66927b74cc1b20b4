//! Descriptor of the program the upstream loader placed in memory

use core::fmt;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::arch::PrivilegeLevel;

/// Execution mode the loaded image was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramMode {
    Supervisor,
    User,
}

impl ProgramMode {
    pub fn from_supervisor_flag(is_supervisor: bool) -> Self {
        if is_supervisor {
            ProgramMode::Supervisor
        } else {
            ProgramMode::User
        }
    }

    pub fn is_supervisor(self) -> bool {
        matches!(self, ProgramMode::Supervisor)
    }
}

/// Entry address and mode of the loaded program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedProgram {
    pub entry: usize,
    pub mode: ProgramMode,
}

impl LoadedProgram {
    pub fn new(entry: usize, mode: ProgramMode) -> Self {
        Self { entry, mode }
    }

    pub fn supervisor(entry: usize) -> Self {
        Self::new(entry, ProgramMode::Supervisor)
    }

    /// Privilege level the entry sequence drops to for this image
    pub fn privilege(&self) -> PrivilegeLevel {
        match self.mode {
            ProgramMode::Supervisor => PrivilegeLevel::Supervisor,
            ProgramMode::User => PrivilegeLevel::User,
        }
    }
}

impl fmt::Display for LoadedProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry={:#x} mode={:?}", self.entry, self.mode)
    }
}

/// Shared storage for the [`LoadedProgram`] descriptor.
///
/// Written by the loader before the boot hart runs the hand-off; every
/// access is `Relaxed` because visibility to other harts is carried by the
/// handoff flag and its barrier pair, not by the slot itself.
#[derive(Debug)]
pub struct ProgramSlot {
    entry: AtomicUsize,
    is_supervisor: AtomicBool,
}

impl ProgramSlot {
    pub const fn new() -> Self {
        Self {
            entry: AtomicUsize::new(0),
            is_supervisor: AtomicBool::new(false),
        }
    }

    pub fn store(&self, program: LoadedProgram) {
        self.entry.store(program.entry, Ordering::Relaxed);
        self.is_supervisor
            .store(program.mode.is_supervisor(), Ordering::Relaxed);
    }

    pub fn load(&self) -> LoadedProgram {
        LoadedProgram {
            entry: self.entry.load(Ordering::Relaxed),
            mode: ProgramMode::from_supervisor_flag(self.is_supervisor.load(Ordering::Relaxed)),
        }
    }
}

impl Default for ProgramSlot {
    fn default() -> Self {
        Self::new()
    }
}
