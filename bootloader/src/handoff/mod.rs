//! Hart hand-off core
//!
//! The boot hart validates the loaded image, prepares address translation
//! and publishes readiness through a [`HandoffRegion`]; every other hart
//! spins on that region. All harts then leave the bootloader through the
//! same entry sequence.

pub mod flag;
pub mod phase;
pub mod program;
pub mod region;
pub mod roles;
pub mod sequencer;

pub use flag::HandoffFlag;
pub use phase::{HartPhase, HartRole};
pub use program::{LoadedProgram, ProgramMode, ProgramSlot};
pub use region::HandoffRegion;
pub use roles::{boot_other_hart, hart_main, prepare_and_publish, run_loaded_program, validate_mode};
pub use sequencer::enter_program;
