#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};

/// Writes match diagnostics to stderr so they never interleave with the
/// rendered boards on stdout.
struct MatchLogger;

impl log::Log for MatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: MatchLogger = MatchLogger;

/// Install the match logger at `level`. Called once by the CLI, which owns
/// the verbosity flag; repeated calls are ignored.
pub fn init_logging(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
