use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use itlog_core::{Caller, Level};

use crate::{LevelLogger, Logger, default_logger};

fn record_caller<'a>(record: &Record<'a>) -> Option<Caller<'a>> {
    Some(Caller {
        file: record.file()?,
        line: record.line()?,
    })
}

impl Log for LevelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        LevelLogger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &Record) {
        let level = Level::from(record.level());
        if !LevelLogger::enabled(self, level) {
            return;
        }
        self.log_with_caller(level, record_caller(record), &record.args().to_string())
            .ok();
    }

    fn flush(&self) {}
}

/// Facade logger forwarding every record to the current default logger.
struct DefaultLoggerBridge;

impl Log for DefaultLoggerBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Logger::enabled(&*default_logger(), metadata.level().into())
    }

    fn log(&self, record: &Record) {
        let logger = default_logger();
        let level = Level::from(record.level());
        if !logger.enabled(level) {
            return;
        }
        logger.log_from(level, record_caller(record), &record.args().to_string());
    }

    fn flush(&self) {}
}

/// Routes `log::info!` and friends to [`default_logger`].
///
/// The facade's max level is set to `Trace`; filtering is left to the
/// default logger's threshold, so later [`set_default_logger`](crate::set_default_logger)
/// or [`LevelLogger::set_level`] calls take effect immediately.
/// Fails if another facade logger is already installed.
pub fn init_log_bridge() -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(DefaultLoggerBridge))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
