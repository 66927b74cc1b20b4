//! Diagnostics - console logging

pub mod logger;

pub use logger::{init_logger, ConsoleLogger};
