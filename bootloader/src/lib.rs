//! FSBL hand-off core
//!
//! Decides per hart whether it launches the loaded program or waits for
//! the boot hart to finish preparing it, and performs the privilege drop
//! into the program.
//!
//! Hardware access goes through [`arch::HartControl`]; on a bare-metal
//! RISC-V target the [`entry`] module binds it to the real machine and
//! exports the C-ABI entry points.

#![cfg_attr(target_os = "none", no_std)]
#![allow(unsafe_op_in_unsafe_fn)]

/// Architecture layer - privilege levels and per-hart hardware operations
pub mod arch;

/// Boot configuration
pub mod config;

/// Diagnostics - `log` backend
pub mod diagnostics;

/// Device drivers - console UART
pub mod drivers;

/// Hand-off error types
pub mod error;

/// Hand-off protocol - flag, region, phases, entry sequence, roles
pub mod handoff;

/// Address-translation preparation hook
pub mod translation;

#[cfg(all(target_arch = "riscv64", target_os = "none"))]
pub mod entry;

#[cfg(all(target_arch = "riscv64", target_os = "none", not(test)))]
mod panic;

pub use arch::{HartControl, PrivilegeLevel};
pub use config::BootConfig;
pub use error::{HandoffError, Result};
pub use handoff::{
    boot_other_hart, enter_program, hart_main, run_loaded_program, HandoffRegion, HartPhase,
    HartRole, LoadedProgram, ProgramMode,
};
pub use translation::TranslationSetup;
