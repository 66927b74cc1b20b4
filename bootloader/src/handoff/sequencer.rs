//! Entry sequence into the loaded program
//!
//! Programs the previous-privilege field and the exception-return target,
//! then executes the trap return. Both roles use the same sequence.

use super::program::LoadedProgram;
use crate::arch::{HartControl, PrivilegeLevel};

/// Transfer control to `program`. Does not return.
///
/// # Safety
///
/// `program` must be the published descriptor: the boot hart may only pass
/// the value it published itself after translation setup, and a secondary
/// hart only one read after observing the handoff flag and issuing the
/// reader barrier. `program.entry` must be the entry point of the image the
/// loader placed in memory.
pub unsafe fn enter_program<H: HartControl + ?Sized>(hart: &H, program: &LoadedProgram) -> ! {
    let privilege = program.privilege();
    debug_assert!(
        !privilege.is_higher_than(&PrivilegeLevel::bootloader()),
        "trap return cannot raise privilege"
    );
    log::debug!(
        "hart {}: entering {:#x} in {}",
        hart.hart_id(),
        program.entry,
        privilege
    );

    hart.set_previous_privilege(privilege);
    hart.set_exception_return(program.entry);

    // SAFETY: MPP and the return target were programmed just above; the
    // caller vouches for the descriptor.
    unsafe { hart.trap_return() }
}
