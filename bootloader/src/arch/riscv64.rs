//! RISC-V 64 machine-mode implementation of [`HartControl`]

use core::arch::asm;
use core::fmt;

use riscv::register::{mepc, mhartid, mstatus};

use super::{HartControl, PrivilegeLevel};
use crate::error::HandoffError;

/// The hart executing this code, running in M-mode
#[derive(Debug, Clone, Copy, Default)]
pub struct MachineHart;

impl MachineHart {
    pub const fn new() -> Self {
        MachineHart
    }
}

fn to_mpp(level: PrivilegeLevel) -> mstatus::MPP {
    match level {
        PrivilegeLevel::User => mstatus::MPP::User,
        PrivilegeLevel::Supervisor => mstatus::MPP::Supervisor,
        PrivilegeLevel::Machine => mstatus::MPP::Machine,
    }
}

impl HartControl for MachineHart {
    fn hart_id(&self) -> usize {
        mhartid::read()
    }

    #[inline(always)]
    fn memory_barrier(&self) {
        unsafe {
            asm!("fence rw, rw", options(nostack, preserves_flags));
        }
    }

    fn set_previous_privilege(&self, level: PrivilegeLevel) {
        log::trace!("mstatus.MPP <- {}", level);
        #[allow(unused_unsafe)]
        unsafe {
            mstatus::set_mpp(to_mpp(level));
        }
    }

    fn set_exception_return(&self, entry: usize) {
        log::trace!("mepc <- {:#x}", entry);
        #[allow(unused_unsafe)]
        unsafe {
            mepc::write(entry);
        }
    }

    #[inline(always)]
    unsafe fn trap_return(&self) -> ! {
        unsafe {
            asm!(
                "mret",
                "tail {fault}",
                fault = sym transfer_returned,
                options(noreturn),
            )
        }
    }

    fn halt(&self, reason: &dyn fmt::Display) -> ! {
        log::error!("hart {}: fatal: {}", self.hart_id(), reason);
        park()
    }
}

// Only reachable if `mret` fell through.
extern "C" fn transfer_returned() -> ! {
    MachineHart.halt(&HandoffError::TransferReturned)
}

/// Stop the executing hart for good
pub fn park() -> ! {
    loop {
        unsafe {
            asm!("wfi", options(nomem, nostack));
        }
    }
}
