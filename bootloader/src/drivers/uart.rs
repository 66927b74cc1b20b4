//! NS16550A UART driver used as the boot console

use core::fmt;
use core::ptr::{read_volatile, write_volatile};

use bitflags::bitflags;

// 16550 registers (offsets)
const RHR_THR: usize = 0x00; // Receive Holding / Transmit Holding
const LSR: usize = 0x05; // Line Status Register

bitflags! {
    /// Line Status Register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LineStatus: u8 {
        const DATA_READY = 1 << 0;
        const OVERRUN_ERROR = 1 << 1;
        const PARITY_ERROR = 1 << 2;
        const FRAMING_ERROR = 1 << 3;
        const BREAK_INTERRUPT = 1 << 4;
        const THR_EMPTY = 1 << 5;
        const TRANSMITTER_EMPTY = 1 << 6;
        const FIFO_ERROR = 1 << 7;
    }
}

impl LineStatus {
    pub fn can_transmit(self) -> bool {
        self.contains(LineStatus::THR_EMPTY)
    }
}

pub struct Uart16550 {
    base: usize,
}

impl Uart16550 {
    /// # Safety
    ///
    /// `base` must be the MMIO base of an NS16550-compatible UART that
    /// firmware has already configured.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    #[inline(always)]
    fn reg8(&self, off: usize) -> *mut u8 {
        (self.base + off) as *mut u8
    }

    pub fn line_status(&self) -> LineStatus {
        LineStatus::from_bits_retain(unsafe { read_volatile(self.reg8(LSR)) })
    }

    pub fn write_byte(&self, byte: u8) {
        while !self.line_status().can_transmit() {
            core::hint::spin_loop();
        }
        unsafe { write_volatile(self.reg8(RHR_THR), byte) };
    }
}

impl fmt::Write for Uart16550 {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.write_byte(b'\r');
            }
            self.write_byte(byte);
        }
        Ok(())
    }
}
