use std::{
    io::{self, Write},
    panic::Location,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicU8, Ordering},
    },
};

use chrono::Utc;
use itlog_core::{Caller, FormatFlags, Level, LineFormat, LogStdout};

use crate::Logger;

/// Leveled line logger writing to a single destination.
///
/// One [`LineFormat`] is built per level at construction, each carrying the
/// level name as prefix and the shared flags. Lines below the threshold are
/// dropped; every other call writes exactly one line. The level methods
/// (`info`, `warn`, ...) come from [`Logger`].
pub struct LevelLogger {
    /// Minimum level that is written.
    level: AtomicU8,
    formats: [LineFormat; 6],
    out: Mutex<Box<dyn Write + Send>>,
}

impl LevelLogger {
    /// Creates a logger writing to `out`.
    /// An empty `flags` slice means `DATE | TIME | MSG_PREFIX`; otherwise the flags are ORed.
    pub fn new<W: Write + Send + 'static>(out: W, flags: &[FormatFlags], level: Level) -> Self {
        let flags = FormatFlags::from_list(flags);
        Self {
            level: AtomicU8::new(level as u8),
            formats: Level::ALL.map(|level| LineFormat::new(format!("{level} "), flags)),
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Logger writing to standard output.
    pub fn new_console(flags: &[FormatFlags], level: Level) -> Self {
        Self::new(LogStdout, flags, level)
    }

    /// Logger writing to standard output with the default flags.
    pub fn new_default_console(level: Level) -> Self {
        Self::new_console(&[], level)
    }

    /// Logger writing to `out` with the default flags.
    pub fn new_default<W: Write + Send + 'static>(out: W, level: Level) -> Self {
        Self::new(out, &[], level)
    }

    /// Replaces the level prefixes with terminal-colored ones.
    pub fn colored(self) -> Self {
        let flags = self.flags();
        Self {
            formats: Level::ALL
                .map(|level| LineFormat::new(format!("{} ", level.colored_name()), flags)),
            ..self
        }
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn flags(&self) -> FormatFlags {
        self.formats[0].flags()
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Writes `message` at `level`. Write errors are dropped.
    #[track_caller]
    pub fn log(&self, level: Level, message: &str) {
        self.try_log(level, message).ok();
    }

    /// Same as [`LevelLogger::log`] but returns the destination's write error.
    #[track_caller]
    pub fn try_log(&self, level: Level, message: &str) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        // Location::caller() must stay outside closures to see the caller's frame.
        let caller = if self.formats[level as usize].flags().with_caller() {
            Some(Caller::from(Location::caller()))
        } else {
            None
        };
        self.write_line(level, caller, message)
    }

    /// Writes `message` at `level` with an explicit source location.
    pub fn log_with_caller(&self, level: Level, caller: Option<Caller<'_>>, message: &str) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.write_line(level, caller, message)
    }

    fn write_line(&self, level: Level, caller: Option<Caller<'_>>, message: &str) -> io::Result<()> {
        let line = self.formats[level as usize].format_line(Utc::now(), caller, message);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(line.as_bytes())?;
        out.flush()
    }
}

impl Logger for LevelLogger {
    #[track_caller]
    fn log(&self, level: Level, message: &str) {
        LevelLogger::log(self, level, message);
    }

    fn enabled(&self, level: Level) -> bool {
        LevelLogger::enabled(self, level)
    }

    fn log_from(&self, level: Level, caller: Option<Caller<'_>>, message: &str) {
        self.log_with_caller(level, caller, message).ok();
    }
}

impl std::fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelLogger")
            .field("level", &self.level())
            .field("flags", &self.flags())
            .finish_non_exhaustive()
    }
}
