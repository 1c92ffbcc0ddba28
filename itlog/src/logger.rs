use itlog_core::{Caller, Level};

/// Anything that can take leveled messages.
///
/// Only [`Logger::log`] is required; the level methods forward to it. Every
/// method tracks its caller, so implementations calling
/// [`std::panic::Location::caller`] see the call site, also through `dyn Logger`.
pub trait Logger: Send + Sync {
    #[track_caller]
    fn log(&self, level: Level, message: &str);

    /// Whether a message at `level` would be written. Defaults to always.
    fn enabled(&self, level: Level) -> bool {
        let _ = level;
        true
    }

    /// Logs with a source location supplied by the caller, e.g. from a `log::Record`.
    /// The default drops `caller`.
    fn log_from(&self, level: Level, caller: Option<Caller<'_>>, message: &str) {
        let _ = caller;
        self.log(level, message);
    }

    #[track_caller]
    fn trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }

    #[track_caller]
    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    #[track_caller]
    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    #[track_caller]
    fn warn(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    #[track_caller]
    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Writes a FATAL message. Does not exit or panic; terminating is up to the caller.
    #[track_caller]
    fn fatal(&self, message: &str) {
        self.log(Level::Fatal, message);
    }
}
