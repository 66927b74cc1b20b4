//! Bare-metal panic handler

use core::fmt::Write;
use core::panic::PanicInfo;

use crate::config::BootConfig;
use crate::drivers::Uart16550;

#[panic_handler]
fn panic(info: &PanicInfo<'_>) -> ! {
    // The logger's console lock may be held by the panicking hart, so the
    // report goes straight to the UART.
    let mut console = unsafe { Uart16550::new(BootConfig::DEFAULT.console_base) };
    let _ = console.write_str("\n=== FSBL PANIC ===\nLocation: ");
    if let Some(location) = info.location() {
        let _ = console.write_str(location.file());
        let _ = console.write_str(":");
        let _ = console.write_str(itoa::Buffer::new().format(location.line()));
    } else {
        let _ = console.write_str("unknown location");
    }
    let _ = write!(console, "\nMessage: {}\n", info.message());

    crate::arch::riscv64::park()
}
