//! C-ABI entry points for the rest of the bootloader
//!
//! The startup assembly and the ELF loader are linked in from outside this
//! crate. The loader reports what it placed in memory through
//! [`fsbl_set_loaded_program`]; startup then sends the boot hart to
//! [`run_loaded_program`] and every other hart to [`boot_other_hart`], or
//! all harts to [`fsbl_hart_main`].

use crate::arch::riscv64::MachineHart;
use crate::config::BootConfig;
use crate::diagnostics::{init_logger, ConsoleLogger};
use crate::drivers::Uart16550;
use crate::handoff::{self, HandoffRegion, LoadedProgram, ProgramMode};
use crate::translation::TranslationSetup;

const CONFIG: BootConfig = BootConfig::DEFAULT;

const _: () = assert!(CONFIG.validate().is_ok(), "invalid boot configuration");

static REGION: HandoffRegion = HandoffRegion::new();

static LOGGER: ConsoleLogger<Uart16550> =
    ConsoleLogger::new(unsafe { Uart16550::new(CONFIG.console_base) }, CONFIG.log_level);

unsafe extern "C" {
    /// Builds the supervisor page tables and programs `satp`
    fn supervisor_vm_init();
}

struct SupervisorVm;

impl TranslationSetup for SupervisorVm {
    fn prepare(&self) {
        unsafe { supervisor_vm_init() }
    }
}

/// Called by the loader on the boot hart once the image is in memory.
#[unsafe(no_mangle)]
pub extern "C" fn fsbl_set_loaded_program(entry: usize, is_supervisor: bool) {
    init_logger(&LOGGER, CONFIG.log_level);
    let program = LoadedProgram::new(entry, ProgramMode::from_supervisor_flag(is_supervisor));
    log::info!("loaded program: {}", program);
    REGION.load_program(program);
}

#[unsafe(no_mangle)]
pub extern "C" fn run_loaded_program() -> ! {
    handoff::run_loaded_program(&MachineHart::new(), &REGION, &SupervisorVm)
}

#[unsafe(no_mangle)]
pub extern "C" fn boot_other_hart() -> ! {
    handoff::boot_other_hart(&MachineHart::new(), &REGION)
}

/// Single entry for every hart; the role follows from `mhartid`.
#[unsafe(no_mangle)]
pub extern "C" fn fsbl_hart_main() -> ! {
    handoff::hart_main(&MachineHart::new(), &REGION, &SupervisorVm, &CONFIG)
}
