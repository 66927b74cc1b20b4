//! Boot Configuration - Pure Value Object
//!
//! Fixed at build time for the bare-metal target; tests build their own.
//!
//! # Examples
//!
//! ```
//! # use fsbl::config::BootConfig;
//! let config = BootConfig::default().with_boot_hart(1);
//! assert!(config.validate().is_ok());
//! ```

use log::LevelFilter;

/// NS16550A base on the QEMU `virt` machine
pub const DEFAULT_CONSOLE_BASE: usize = 0x1000_0000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootConfig {
    /// Hart that validates, prepares and publishes
    pub boot_hart: usize,
    /// MMIO base of the console UART
    pub console_base: usize,
    /// Maximum level passed to the console logger
    pub log_level: LevelFilter,
}

impl BootConfig {
    pub const DEFAULT: BootConfig = BootConfig {
        boot_hart: 0,
        console_base: DEFAULT_CONSOLE_BASE,
        log_level: LevelFilter::Info,
    };

    pub fn with_boot_hart(mut self, hart: usize) -> Self {
        self.boot_hart = hart;
        self
    }

    pub fn with_console_base(mut self, base: usize) -> Self {
        self.console_base = base;
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Validate the configuration
    pub const fn validate(&self) -> Result<(), &'static str> {
        if self.console_base == 0 {
            return Err("Console base address cannot be zero");
        }
        Ok(())
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
