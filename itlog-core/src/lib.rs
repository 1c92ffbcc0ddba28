//! # itlog-core
//! Core utilities for itlog - levels, format flags, line formatting and sinks.

mod config;
mod flags;
mod level;
mod line_format;
mod log_writer;

pub use config::{ITLOG_CONFIG, ItLogConfig};
pub use flags::FormatFlags;
pub use level::{Level, ParseLevelError};
pub use line_format::{Caller, LineFormat};
pub use log_writer::{LogBuffer, LogFile, LogStdout};
