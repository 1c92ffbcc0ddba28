use std::sync::LazyLock;

use derive_from_env::FromEnv;

use crate::level::Level;

#[derive(FromEnv)]
#[from_env(prefix = "ITLOG")]
#[allow(non_snake_case)]
pub struct ItLogConfig {
    /// Threshold of the process-wide default logger.
    #[from_env(default = "DEBUG")]
    pub DEFAULT_LEVEL: Level,
}

impl Default for ItLogConfig {
    fn default() -> Self {
        Self {
            DEFAULT_LEVEL: Level::Debug,
        }
    }
}

impl ItLogConfig {
    /// Reads the environment; an unparsable value falls back to the defaults.
    pub fn load() -> Self {
        Self::from_env().unwrap_or_default()
    }
}

pub static ITLOG_CONFIG: LazyLock<ItLogConfig> = LazyLock::new(ItLogConfig::load);

#[cfg(test)]
mod tests {
    use super::*;

    // One test only: it mutates the process environment.
    #[test]
    fn test_default_level_from_env() {
        // SAFETY: no other test in this crate reads or writes the environment.
        unsafe { std::env::remove_var("ITLOG_DEFAULT_LEVEL") };
        assert_eq!(ItLogConfig::load().DEFAULT_LEVEL, Level::Debug);

        unsafe { std::env::set_var("ITLOG_DEFAULT_LEVEL", "error") };
        assert_eq!(ItLogConfig::from_env().unwrap().DEFAULT_LEVEL, Level::Error);
        assert_eq!(ItLogConfig::load().DEFAULT_LEVEL, Level::Error);

        unsafe { std::env::set_var("ITLOG_DEFAULT_LEVEL", "loud") };
        assert!(ItLogConfig::from_env().is_err());
        assert_eq!(ItLogConfig::load().DEFAULT_LEVEL, Level::Debug);

        unsafe { std::env::remove_var("ITLOG_DEFAULT_LEVEL") };
    }
}
