use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use itlog_core::ITLOG_CONFIG;

use crate::{LevelLogger, Logger};

/// Process-wide default logger, a console logger until replaced.
static DEFAULT_LOGGER: LazyLock<RwLock<Arc<dyn Logger>>> = LazyLock::new(|| {
    RwLock::new(Arc::new(LevelLogger::new_default_console(
        ITLOG_CONFIG.DEFAULT_LEVEL,
    )))
});

/// Installs `logger` as the process-wide default.
/// Handles already returned by [`default_logger`] keep pointing at the previous logger.
pub fn set_default_logger(logger: Arc<dyn Logger>) {
    *DEFAULT_LOGGER
        .write()
        .unwrap_or_else(PoisonError::into_inner) = logger;
}

/// Returns the current process-wide default logger.
pub fn default_logger() -> Arc<dyn Logger> {
    DEFAULT_LOGGER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
