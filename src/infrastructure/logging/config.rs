use std::path::PathBuf;

use crate::domain::models::Config;

/// Logger settings derived from the resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Directory for the log file
    pub log_dir: PathBuf,

    /// Log file name inside `log_dir`
    pub file_name: String,

    /// Mirror events to stdout in a human-readable format
    pub enable_stdout: bool,
}

impl From<&Config> for LogConfig {
    fn from(config: &Config) -> Self {
        let level = if !config.log_level().is_empty() {
            config.log_level().to_string()
        } else if config.debug() {
            "debug".to_string()
        } else {
            default_log_level()
        };

        Self {
            level,
            log_dir: PathBuf::from(config.log_dir()),
            file_name: config.log_name().to_string(),
            enable_stdout: config.debug(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ConfigLoader;

    #[test]
    fn test_from_defaulted_config() {
        let config = ConfigLoader::resolve_str("").unwrap();
        let log_config = LogConfig::from(&config);

        assert_eq!(log_config.level, "info");
        assert_eq!(log_config.log_dir, PathBuf::from("."));
        assert_eq!(log_config.file_name, "ayame.log");
        assert!(!log_config.enable_stdout);
    }

    #[test]
    fn test_debug_flag_enables_stdout_and_debug_level() {
        let config = ConfigLoader::resolve_str("debug = true\n").unwrap();
        let log_config = LogConfig::from(&config);

        assert_eq!(log_config.level, "debug");
        assert!(log_config.enable_stdout);
    }

    #[test]
    fn test_explicit_level_wins_over_debug_flag() {
        let config = ConfigLoader::resolve_str("debug = true\nlog_level = warn\n").unwrap();

        assert_eq!(LogConfig::from(&config).level, "warn");
    }
}
