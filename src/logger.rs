use gloo_console::{debug, error, info, trace, warn};
use log::{set_logger, set_max_level, Level, LevelFilter, Log, Metadata, Record};

static LOGGER: Logger = Logger;

/// Routes the `log` facade to the browser console. Only the first call installs the logger;
/// later calls only change the max level.
#[inline]
pub fn init(level: LevelFilter) {
    let _ = set_logger(&LOGGER);
    set_max_level(level);
}

#[derive(Copy, Clone, Debug)]
pub struct Logger;

impl Log for Logger {
    #[inline]
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    #[inline]
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}", record.target(), record.args());

        match record.level() {
            Level::Error => error!(message),
            Level::Warn => warn!(message),
            Level::Info => info!(message),
            Level::Debug => debug!(message),
            Level::Trace => trace!(message),
        }
    }

    #[inline]
    fn flush(&self) {}
}
