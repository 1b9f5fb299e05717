use serde::Serialize;

/// Default directory for log files
pub const DEFAULT_LOG_DIR: &str = ".";
/// Default main log file name
pub const DEFAULT_LOG_NAME: &str = "ayame.log";
/// Default signaling log file name
pub const DEFAULT_SIGNALING_LOG_NAME: &str = "signaling.log";
/// Default webhook log file name
pub const DEFAULT_WEBHOOK_LOG_NAME: &str = "webhook.log";
/// Default webhook request timeout in seconds
pub const DEFAULT_WEBHOOK_REQUEST_TIMEOUT_SEC: i32 = 5;
/// Default metrics listen address
pub const DEFAULT_LISTEN_PROMETHEUS_IPV4_ADDRESS: &str = "0.0.0.0";
/// Default metrics listen port
pub const DEFAULT_LISTEN_PROMETHEUS_PORT_NUMBER: i32 = 4000;

/// Resolved configuration for the Ayame signaling server
///
/// Fields mirror the settings keys one to one. The record is built once by
/// [`ConfigLoader`](crate::infrastructure::config::ConfigLoader) and is
/// read-only afterwards: fields are only reachable through accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    // Logging
    pub(crate) debug: bool,
    pub(crate) log_dir: String,
    pub(crate) log_name: String,
    pub(crate) log_level: String,
    pub(crate) signaling_log_name: String,

    // Signaling listener
    pub(crate) listen_ipv4_address: String,
    pub(crate) listen_port_number: i32,

    // Webhooks
    pub(crate) authn_webhook_url: String,
    pub(crate) disconnect_webhook_url: String,
    pub(crate) webhook_log_name: String,
    pub(crate) webhook_request_timeout_sec: i32,

    // Metrics
    pub(crate) listen_prometheus_ipv4_address: String,
    pub(crate) listen_prometheus_port_number: i32,

    // TLS
    pub(crate) use_tls: bool,
    pub(crate) cert_file: String,
    pub(crate) key_file: String,
}

impl Config {
    /// Replace every zero-valued default-eligible field with its default
    ///
    /// Fields that already carry a value are left alone, so applying this
    /// twice is the same as applying it once.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        fill_str(&mut self.log_dir, DEFAULT_LOG_DIR);
        fill_str(&mut self.log_name, DEFAULT_LOG_NAME);
        fill_str(&mut self.signaling_log_name, DEFAULT_SIGNALING_LOG_NAME);
        fill_str(&mut self.webhook_log_name, DEFAULT_WEBHOOK_LOG_NAME);
        fill_int(
            &mut self.webhook_request_timeout_sec,
            DEFAULT_WEBHOOK_REQUEST_TIMEOUT_SEC,
        );
        fill_str(
            &mut self.listen_prometheus_ipv4_address,
            DEFAULT_LISTEN_PROMETHEUS_IPV4_ADDRESS,
        );
        fill_int(
            &mut self.listen_prometheus_port_number,
            DEFAULT_LISTEN_PROMETHEUS_PORT_NUMBER,
        );
        self
    }

    /// Verbose logging flag
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Directory holding the log files
    pub fn log_dir(&self) -> &str {
        &self.log_dir
    }

    /// Main log file name
    pub fn log_name(&self) -> &str {
        &self.log_name
    }

    /// Log level name, empty when unset
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Signaling log file name
    pub fn signaling_log_name(&self) -> &str {
        &self.signaling_log_name
    }

    /// Signaling listener address
    pub fn listen_ipv4_address(&self) -> &str {
        &self.listen_ipv4_address
    }

    /// Signaling listener port
    pub const fn listen_port_number(&self) -> i32 {
        self.listen_port_number
    }

    /// Authentication webhook URL, empty when not configured
    pub fn authn_webhook_url(&self) -> &str {
        &self.authn_webhook_url
    }

    /// Disconnect webhook URL, empty when not configured
    pub fn disconnect_webhook_url(&self) -> &str {
        &self.disconnect_webhook_url
    }

    /// Webhook log file name
    pub fn webhook_log_name(&self) -> &str {
        &self.webhook_log_name
    }

    /// Webhook request timeout in seconds
    pub const fn webhook_request_timeout_sec(&self) -> i32 {
        self.webhook_request_timeout_sec
    }

    /// Metrics endpoint address
    pub fn listen_prometheus_ipv4_address(&self) -> &str {
        &self.listen_prometheus_ipv4_address
    }

    /// Metrics endpoint port
    pub const fn listen_prometheus_port_number(&self) -> i32 {
        self.listen_prometheus_port_number
    }

    /// Whether the listener terminates TLS
    pub const fn use_tls(&self) -> bool {
        self.use_tls
    }

    /// TLS certificate path
    pub fn cert_file(&self) -> &str {
        &self.cert_file
    }

    /// TLS private key path
    pub fn key_file(&self) -> &str {
        &self.key_file
    }
}

fn fill_str(field: &mut String, default: &str) {
    if field.is_empty() {
        *field = default.to_string();
    }
}

fn fill_int(field: &mut i32, default: i32) {
    if *field == 0 {
        *field = default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_fill_empty_config() {
        let config = Config::default().with_defaults();

        assert_eq!(config.log_dir(), ".");
        assert_eq!(config.log_name(), "ayame.log");
        assert_eq!(config.signaling_log_name(), "signaling.log");
        assert_eq!(config.webhook_log_name(), "webhook.log");
        assert_eq!(config.webhook_request_timeout_sec(), 5);
        assert_eq!(config.listen_prometheus_ipv4_address(), "0.0.0.0");
        assert_eq!(config.listen_prometheus_port_number(), 4000);
    }

    #[test]
    fn test_fields_without_defaults_stay_zero() {
        let config = Config::default().with_defaults();

        assert!(!config.debug());
        assert_eq!(config.log_level(), "");
        assert_eq!(config.listen_ipv4_address(), "");
        assert_eq!(config.listen_port_number(), 0);
        assert_eq!(config.authn_webhook_url(), "");
        assert_eq!(config.disconnect_webhook_url(), "");
        assert!(!config.use_tls());
        assert_eq!(config.cert_file(), "");
        assert_eq!(config.key_file(), "");
    }

    #[test]
    fn test_log_name_and_log_dir_default_independently() {
        let config = Config {
            log_dir: "/var/log/ayame".to_string(),
            ..Default::default()
        }
        .with_defaults();

        assert_eq!(config.log_dir(), "/var/log/ayame");
        assert_eq!(config.log_name(), "ayame.log");

        let config = Config {
            log_name: "custom.log".to_string(),
            ..Default::default()
        }
        .with_defaults();

        assert_eq!(config.log_dir(), ".");
        assert_eq!(config.log_name(), "custom.log");
    }

    #[test]
    fn test_explicit_values_survive_defaults() {
        let config = Config {
            webhook_request_timeout_sec: 30,
            listen_prometheus_port_number: 9100,
            listen_prometheus_ipv4_address: "127.0.0.1".to_string(),
            ..Default::default()
        }
        .with_defaults();

        assert_eq!(config.webhook_request_timeout_sec(), 30);
        assert_eq!(config.listen_prometheus_port_number(), 9100);
        assert_eq!(config.listen_prometheus_ipv4_address(), "127.0.0.1");
    }

    proptest! {
        #[test]
        fn prop_defaults_are_idempotent(
            log_dir in "[a-z/]{0,12}",
            log_name in "[a-z.]{0,12}",
            timeout in -100i32..100,
            port in 0i32..65536,
        ) {
            let config = Config {
                log_dir,
                log_name,
                webhook_request_timeout_sec: timeout,
                listen_prometheus_port_number: port,
                ..Default::default()
            };

            let once = config.with_defaults();
            let twice = once.clone().with_defaults();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_non_zero_values_are_kept(
            timeout in 1i32..=i32::MAX,
            name in "[a-z]{1,16}\\.log",
        ) {
            let config = Config {
                webhook_request_timeout_sec: timeout,
                signaling_log_name: name.clone(),
                ..Default::default()
            }
            .with_defaults();

            prop_assert_eq!(config.webhook_request_timeout_sec(), timeout);
            prop_assert_eq!(config.signaling_log_name(), name.as_str());
        }
    }
}
