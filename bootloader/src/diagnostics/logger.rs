//! Console backend for the `log` facade

use core::fmt::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};
use spin::Mutex;

/// `log::Log` implementation writing one line per record to a console.
///
/// Harts log concurrently during hand-off, so the sink sits behind a spin
/// lock and each record is written while holding it.
pub struct ConsoleLogger<W> {
    sink: Mutex<W>,
    level: LevelFilter,
}

impl<W: Write> ConsoleLogger<W> {
    pub const fn new(sink: W, level: LevelFilter) -> Self {
        Self {
            sink: Mutex::new(sink),
            level,
        }
    }

    /// Run `f` with exclusive access to the sink
    #[cfg(test)]
    fn with_sink<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.sink.lock())
    }

    fn write_record(sink: &mut W, record: &Record<'_>) -> fmt::Result {
        writeln!(sink, "[{:<5} {}] {}", record.level(), record.target(), record.args())
    }
}

impl<W: Write + Send> Log for ConsoleLogger<W> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut sink = self.sink.lock();
        // Nowhere to report a console failure.
        let _ = Self::write_record(&mut sink, record);
    }

    fn flush(&self) {}
}

/// Install `logger` as the global logger. Later calls are ignored.
pub fn init_logger(logger: &'static dyn Log, level: LevelFilter) {
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
