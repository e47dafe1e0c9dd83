//! A simple stderr logger.

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let target = if !record.target().is_empty() {
            record.target()
        } else {
            record.module_path().unwrap_or_default()
        };
        let label = match record.level() {
            Level::Error => "Error",
            Level::Warn => "Warning",
            Level::Info => "Info",
            Level::Debug => "Debug",
            Level::Trace => "Trace",
        };

        eprintln!("{} (in {}): {}", label, target, record.args());
    }

    fn flush(&self) {}
}

/// Install the logger with the given maximum level.
///
/// Does nothing if a logger is already installed.
pub fn init(level: LevelFilter) {
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(level);
    }
}
