//! Address-translation preparation hook
//!
//! Building the supervisor page tables is done outside this crate. The
//! boot hart only needs a synchronous call that, once it returns, leaves
//! the hardware ready to run the loaded program under translation.

/// Supervisor address-translation setup run by the boot hart before
/// publication. Failures inside it are fatal to the caller's caller and
/// never reported back here.
pub trait TranslationSetup {
    fn prepare(&self);
}

impl<F: Fn()> TranslationSetup for F {
    fn prepare(&self) {
        self()
    }
}
