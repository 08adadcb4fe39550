use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Environment variable with the log level: `error`, `warn`, `info`, `debug` or `trace`.
pub const LOG_ENV: &str = "SCRABBLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from(value: Option<String>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize logging to stderr with a level taken from the `SCRABBLE_LOG` environment
/// variable. Defaults to `warn` if the variable is not set or invalid.
/// Calling it more than once has no effect.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from() {
        assert_eq!(level_from(None), LevelFilter::Warn);
        assert_eq!(level_from(Some("debug".into())), LevelFilter::Debug);
        assert_eq!(level_from(Some(" TRACE ".into())), LevelFilter::Trace);
        assert_eq!(level_from(Some("loud".into())), LevelFilter::Warn);
    }
}
