use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::domain::models::config::Config;
use crate::infrastructure::logging::audit::{self, AuditSink, TracingAuditSink};

use super::{schema, source};

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file could not be read
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Unreadable {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The settings text is not valid INI
    #[error("Malformed settings in {origin}: {message}")]
    Malformed {
        /// Where the text came from
        origin: String,
        /// Parser message
        message: String,
    },

    /// A key that the configuration does not define
    #[error("Unknown settings key: {key}")]
    UnknownKey {
        /// Key as written in the source
        key: String,
    },

    /// A named `[section]`; every key lives at top level
    #[error("Unexpected section [{section}]. All settings belong to the top-level section")]
    UnexpectedSection {
        /// Section name
        section: String,
    },

    /// A value that does not fit the field type
    #[error("Invalid value for {key}: {value:?} is not a {expected}")]
    TypeMismatch {
        /// Settings key
        key: &'static str,
        /// Expected type name
        expected: &'static str,
        /// Offending value
        value: String,
    },

    /// A webhook URL that is not an absolute request URI
    #[error("Invalid {field}: {value:?} is not an absolute request URI ({reason})")]
    InvalidWebhookUrl {
        /// Settings key of the webhook
        field: &'static str,
        /// Offending value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Coarse classification of a [`ConfigError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source could not be read or is not valid INI
    Parse,
    /// The source does not match the configuration shape
    Schema,
    /// A checked field holds an unusable value
    Validation,
}

impl ConfigError {
    /// Which stage of loading produced this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unreadable { .. } | Self::Malformed { .. } => ErrorKind::Parse,
            Self::UnknownKey { .. }
            | Self::UnexpectedSection { .. }
            | Self::TypeMismatch { .. } => ErrorKind::Schema,
            Self::InvalidWebhookUrl { .. } => ErrorKind::Validation,
        }
    }
}

/// Configuration loader for the settings file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a settings file
    ///
    /// Steps, in order: parse, strict decode, webhook URL validation,
    /// defaults, and finally one audit record per field through `tracing`.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        Self::load_with_sink(path, &TracingAuditSink)
    }

    /// Load configuration, reporting the resolved fields to `sink`
    pub fn load_with_sink(
        path: impl AsRef<Path>,
        sink: &dyn AuditSink,
    ) -> Result<Config, ConfigError> {
        let config = Self::resolve(path)?;
        audit::report(&config, sink);
        Ok(config)
    }

    /// Load configuration without the audit step
    pub fn resolve(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let entries = source::read_file(path)?;
        let config = Self::finish(&entries)?;

        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Resolve configuration from in-memory INI text
    pub fn resolve_str(contents: &str) -> Result<Config, ConfigError> {
        let entries = source::parse_str(contents, "<inline>")?;
        Self::finish(&entries)
    }

    fn finish(entries: &[source::RawEntry]) -> Result<Config, ConfigError> {
        let config = schema::decode(entries)?;
        Self::validate(&config)?;
        debug!(entries = entries.len(), "settings decoded and validated");
        Ok(config.with_defaults())
    }

    /// Validate the webhook URLs
    ///
    /// Empty URLs mean "not configured" and are skipped.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        validate_webhook_url("authn_webhook_url", config.authn_webhook_url())?;
        validate_webhook_url("disconnect_webhook_url", config.disconnect_webhook_url())?;
        Ok(())
    }
}

fn validate_webhook_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Ok(());
    }

    let invalid = |reason: String| ConfigError::InvalidWebhookUrl {
        field,
        value: value.to_string(),
        reason,
    };

    // Url::parse strips tabs and newlines and escapes spaces, but the raw value is stored
    if value.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(invalid("contains whitespace or control characters".to_string()));
    }

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    if !url.has_host() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(())
}
