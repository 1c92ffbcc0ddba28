//! # itlog
//! Leveled, prefix-tagged line logger with a swappable process-wide default.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! itlog = "0.1.0"
//! ```
//!
//! ```rust
//! use itlog::{FormatFlags, Level, LevelLogger, LogBuffer, Logger};
//!
//! let buffer = LogBuffer::new();
//! let logger = LevelLogger::new(buffer.clone(), &[FormatFlags::MSG_PREFIX], Level::Debug);
//! logger.trace("not written");
//! logger.info("Hello, world!");
//! assert_eq!(buffer.contents(), "INFO Hello, world!\n");
//! ```
//!
//! ## Line layout
//! Flags control what precedes the message, in this order: level prefix
//! (unless `MSG_PREFIX`), `YYYY/MM/DD`, `HH:MM:SS[.ffffff]`, `file:line:`,
//! level prefix (with `MSG_PREFIX`). An empty flag list means
//! `DATE | TIME | MSG_PREFIX`.
//!
//! ```rust
//! use itlog::{FormatFlags, Level, LevelLogger, LogBuffer, Logger};
//!
//! let buffer = LogBuffer::new();
//! let logger = LevelLogger::new(buffer.clone(), &[FormatFlags::SHORT_FILE], Level::Trace);
//! logger.warn("disk almost full");
//! assert!(buffer.contents().starts_with("WARNING "));
//! assert!(buffer.contents().ends_with(": disk almost full\n"));
//! ```
//!
//! ## Default logger
//! A console logger at `DEBUG` (or `ITLOG_DEFAULT_LEVEL`) is available to code
//! that has no logger of its own. It can be swapped at any time.
//!
//! ```rust
//! use std::sync::Arc;
//! use itlog::{Level, LevelLogger, LogBuffer, Logger, default_logger, set_default_logger};
//!
//! let buffer = LogBuffer::new();
//! set_default_logger(Arc::new(LevelLogger::new_default(buffer.clone(), Level::Info)));
//! default_logger().error("Hello from the default logger");
//! assert!(buffer.contents().contains("ERROR Hello from the default logger"));
//! ```
//!
//! Any [`Logger`] implementation can be installed as the default:
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use itlog::{Level, Logger, default_logger, set_default_logger};
//!
//! #[derive(Default)]
//! struct Collect(Mutex<Vec<String>>);
//!
//! impl Logger for Collect {
//!     fn log(&self, level: Level, message: &str) {
//!         self.0.lock().unwrap().push(format!("{level}: {message}"));
//!     }
//! }
//!
//! let collect = Arc::new(Collect::default());
//! set_default_logger(collect.clone());
//! default_logger().warn("collected");
//! assert_eq!(*collect.0.lock().unwrap(), ["WARNING: collected"]);
//! ```
//!
//! ## `log` facade
//! ```rust
//! itlog::init_log_bridge().expect("a facade logger is already installed");
//! log::info!("Hello, world!");
//! ```

mod bridge;
mod default_logger;
mod level_logger;
mod logger;

pub use bridge::init_log_bridge;
pub use default_logger::{default_logger, set_default_logger};
pub use itlog_core::{
    Caller, FormatFlags, ITLOG_CONFIG, ItLogConfig, Level, LineFormat, LogBuffer, LogFile,
    LogStdout, ParseLevelError,
};
pub use level_logger::LevelLogger;
pub use logger::Logger;
