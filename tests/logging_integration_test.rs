// Integration test for the logger and the configuration audit trail
// Note: installs the global subscriber, so this file holds a single test

mod common;

use std::fs;

use ayame::infrastructure::logging::{LogConfig, LoggerImpl};
use ayame::ConfigLoader;
use common::settings_file;
use tempfile::TempDir;

#[test]
fn test_audit_trail_reaches_log_file() {
    let log_dir = TempDir::new().unwrap();
    let settings = settings_file(&format!(
        "log_dir = {}\nlog_name = audit.log\nlisten_port_number = 5000\n",
        log_dir.path().display()
    ));

    let config = ConfigLoader::resolve(settings.path()).unwrap();
    let log_config = LogConfig::from(&config);
    assert_eq!(log_config.file_name, "audit.log");

    let logger = LoggerImpl::init(&log_config).unwrap();
    let config = ConfigLoader::load(settings.path()).unwrap();
    assert_eq!(config.listen_port_number(), 5000);

    // Dropping the guard flushes the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(log_dir.path().join("audit.log")).unwrap();
    let audit_lines: Vec<_> = contents
        .lines()
        .filter(|line| line.contains("resolved config"))
        .collect();

    assert_eq!(audit_lines.len(), 16, "one audit record per field");
    assert!(contents.contains("logger initialized"));
    assert!(audit_lines.iter().any(|line| {
        line.contains("\"field\":\"listen_port_number\"") && line.contains("\"value\":5000")
    }));
    assert!(audit_lines.iter().any(|line| {
        line.contains("\"field\":\"webhook_log_name\"")
            && line.contains("\"value\":\"webhook.log\"")
    }));
    assert!(audit_lines
        .iter()
        .all(|line| line.contains("\"target\":\"ayame::config\"")));
}
