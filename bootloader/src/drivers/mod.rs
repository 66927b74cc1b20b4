//! Device drivers

pub mod uart;

pub use uart::Uart16550;
