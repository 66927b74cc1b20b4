//! Boot-hart and secondary-hart entry points
//!
//! Every hart ends up in [`enter_program`]: the boot hart after validating
//! the image, preparing translation and publishing the flag, the others
//! after observing the flag.

use super::phase::{HartPhase, HartRole};
use super::program::LoadedProgram;
use super::region::HandoffRegion;
use super::sequencer::enter_program;
use crate::arch::HartControl;
use crate::config::BootConfig;
use crate::error::{HandoffError, Result};
use crate::translation::TranslationSetup;

/// Only supervisor images can be launched by this loader.
pub fn validate_mode(program: &LoadedProgram) -> Result<()> {
    if program.mode.is_supervisor() {
        Ok(())
    } else {
        Err(HandoffError::UnsupportedMode)
    }
}

/// The boot hart's `PREPARE` phase: validate, set up translation, publish.
///
/// On error nothing has been published and translation setup has not run.
pub fn prepare_and_publish<H, T>(
    hart: &H,
    region: &HandoffRegion,
    translation: &T,
) -> Result<LoadedProgram>
where
    H: HartControl + ?Sized,
    T: TranslationSetup + ?Sized,
{
    let program = region.local_program();
    validate_mode(&program)?;

    log::debug!("hart {}: preparing address translation", hart.hart_id());
    translation.prepare();

    region.publish(hart);
    Ok(program)
}

/// Boot hart path. Halts on an unsupported image; never returns.
pub fn run_loaded_program<H, T>(hart: &H, region: &HandoffRegion, translation: &T) -> !
where
    H: HartControl + ?Sized,
    T: TranslationSetup + ?Sized,
{
    let phase = HartPhase::initial(HartRole::Boot);
    log::info!("hart {}: {} as boot hart", hart.hart_id(), phase);

    match prepare_and_publish(hart, region, translation) {
        Ok(program) => {
            let phase = phase.advance(region.is_published());
            log::info!("hart {}: {} {}", hart.hart_id(), phase, program);
            // SAFETY: `program` is the descriptor this hart just published,
            // after translation setup and the writer barrier.
            unsafe { enter_program(hart, &program) }
        }
        Err(err) => hart.halt(&err),
    }
}

/// Secondary hart path: spin on the handoff flag, then enter.
pub fn boot_other_hart<H>(hart: &H, region: &HandoffRegion) -> !
where
    H: HartControl + ?Sized,
{
    let phase = HartPhase::initial(HartRole::Secondary);
    log::debug!("hart {}: {}", hart.hart_id(), phase);

    let program = region.wait(hart);
    let phase = phase.advance(region.is_published());
    log::debug!("hart {}: {} {}", hart.hart_id(), phase, program);
    // SAFETY: `wait` returns only after the flag was observed raised and the
    // reader barrier was issued, so `program` is the published descriptor.
    unsafe { enter_program(hart, &program) }
}

/// Common entry for every hart: picks the role from the hart id.
pub fn hart_main<H, T>(
    hart: &H,
    region: &HandoffRegion,
    translation: &T,
    config: &BootConfig,
) -> !
where
    H: HartControl + ?Sized,
    T: TranslationSetup + ?Sized,
{
    match HartRole::of(hart.hart_id(), config) {
        HartRole::Boot => run_loaded_program(hart, region, translation),
        HartRole::Secondary => boot_other_hart(hart, region),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handoff::program::ProgramMode;

    #[test]
    fn supervisor_image_is_accepted() {
        assert_eq!(validate_mode(&LoadedProgram::supervisor(0x8000_0000)), Ok(()));
    }

    #[test]
    fn user_image_is_rejected() {
        let program = LoadedProgram::new(0x1_0000, ProgramMode::User);
        assert_eq!(validate_mode(&program), Err(HandoffError::UnsupportedMode));
    }
}
