//! Audit trail for the resolved configuration
//!
//! Emits one record per configuration field once loading has finished, so the
//! effective settings are visible in the process log. Reporting goes through
//! the [`AuditSink`] capability; [`TracingAuditSink`] is the production sink.

use std::fmt;

use tracing::info;

use crate::domain::models::Config;

/// Typed value of an audited field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditValue<'a> {
    /// Flag field
    Bool(bool),
    /// Integer field
    Int(i32),
    /// Text field
    Str(&'a str),
}

impl fmt::Display for AuditValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

/// One audited field: settings key and resolved value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditEntry<'a> {
    /// Settings key
    pub field: &'static str,
    /// Resolved value
    pub value: AuditValue<'a>,
}

/// Destination for audit records
pub trait AuditSink {
    /// Record a single resolved field
    fn record(&self, entry: &AuditEntry<'_>);
}

/// Writes audit records to the process-wide `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, entry: &AuditEntry<'_>) {
        match entry.value {
            AuditValue::Bool(value) => {
                info!(target: "ayame::config", field = entry.field, value, "resolved config");
            }
            AuditValue::Int(value) => {
                info!(target: "ayame::config", field = entry.field, value, "resolved config");
            }
            AuditValue::Str(value) => {
                info!(target: "ayame::config", field = entry.field, value, "resolved config");
            }
        }
    }
}

/// All fields of `config` in settings-key order
pub fn entries(config: &Config) -> Vec<AuditEntry<'_>> {
    use AuditValue::{Bool, Int, Str};

    let entry = |field, value| AuditEntry { field, value };
    vec![
        entry("debug", Bool(config.debug())),
        entry("log_dir", Str(config.log_dir())),
        entry("log_name", Str(config.log_name())),
        entry("log_level", Str(config.log_level())),
        entry("signaling_log_name", Str(config.signaling_log_name())),
        entry("listen_ipv4_address", Str(config.listen_ipv4_address())),
        entry("listen_port_number", Int(config.listen_port_number())),
        entry("authn_webhook_url", Str(config.authn_webhook_url())),
        entry("disconnect_webhook_url", Str(config.disconnect_webhook_url())),
        entry("webhook_log_name", Str(config.webhook_log_name())),
        entry(
            "webhook_request_timeout_sec",
            Int(config.webhook_request_timeout_sec()),
        ),
        entry(
            "listen_prometheus_ipv4_address",
            Str(config.listen_prometheus_ipv4_address()),
        ),
        entry(
            "listen_prometheus_port_number",
            Int(config.listen_prometheus_port_number()),
        ),
        entry("use_tls", Bool(config.use_tls())),
        entry("cert_file", Str(config.cert_file())),
        entry("key_file", Str(config.key_file())),
    ]
}

/// Report every field of `config` to `sink`
pub fn report(config: &Config, sink: &dyn AuditSink) {
    for entry in entries(config) {
        sink.record(&entry);
    }
}
