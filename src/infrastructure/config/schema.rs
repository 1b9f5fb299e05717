//! Settings schema
//!
//! Explicit mapping from settings keys to [`Config`] fields. Decoding is strict:
//! unknown keys, named sections and values that do not fit the field type are
//! all rejected. Keys are matched case-insensitively.

use crate::domain::models::Config;

use super::loader::ConfigError;
use super::source::RawEntry;

/// Value type expected by a settings key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `true`/`false` and their INI spellings
    Bool,
    /// Decimal `i32`
    Int,
    /// Any text
    Str,
}

impl FieldKind {
    /// Human-readable type name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Int => "32-bit integer",
            Self::Str => "string",
        }
    }
}

enum Slot {
    Bool(fn(&mut Config) -> &mut bool),
    Int(fn(&mut Config) -> &mut i32),
    Str(fn(&mut Config) -> &mut String),
}

/// One row of the schema table
pub struct FieldSpec {
    /// Settings key, lowercase
    pub key: &'static str,
    slot: Slot,
}

impl FieldSpec {
    /// Value type this key expects
    pub const fn kind(&self) -> FieldKind {
        match self.slot {
            Slot::Bool(_) => FieldKind::Bool,
            Slot::Int(_) => FieldKind::Int,
            Slot::Str(_) => FieldKind::Str,
        }
    }
}

/// Every settings key understood by the loader, in report order
pub static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "debug",
        slot: Slot::Bool(|c| &mut c.debug),
    },
    FieldSpec {
        key: "log_dir",
        slot: Slot::Str(|c| &mut c.log_dir),
    },
    FieldSpec {
        key: "log_name",
        slot: Slot::Str(|c| &mut c.log_name),
    },
    FieldSpec {
        key: "log_level",
        slot: Slot::Str(|c| &mut c.log_level),
    },
    FieldSpec {
        key: "signaling_log_name",
        slot: Slot::Str(|c| &mut c.signaling_log_name),
    },
    FieldSpec {
        key: "listen_ipv4_address",
        slot: Slot::Str(|c| &mut c.listen_ipv4_address),
    },
    FieldSpec {
        key: "listen_port_number",
        slot: Slot::Int(|c| &mut c.listen_port_number),
    },
    FieldSpec {
        key: "authn_webhook_url",
        slot: Slot::Str(|c| &mut c.authn_webhook_url),
    },
    FieldSpec {
        key: "disconnect_webhook_url",
        slot: Slot::Str(|c| &mut c.disconnect_webhook_url),
    },
    FieldSpec {
        key: "webhook_log_name",
        slot: Slot::Str(|c| &mut c.webhook_log_name),
    },
    FieldSpec {
        key: "webhook_request_timeout_sec",
        slot: Slot::Int(|c| &mut c.webhook_request_timeout_sec),
    },
    FieldSpec {
        key: "listen_prometheus_ipv4_address",
        slot: Slot::Str(|c| &mut c.listen_prometheus_ipv4_address),
    },
    FieldSpec {
        key: "listen_prometheus_port_number",
        slot: Slot::Int(|c| &mut c.listen_prometheus_port_number),
    },
    FieldSpec {
        key: "use_tls",
        slot: Slot::Bool(|c| &mut c.use_tls),
    },
    FieldSpec {
        key: "cert_file",
        slot: Slot::Str(|c| &mut c.cert_file),
    },
    FieldSpec {
        key: "key_file",
        slot: Slot::Str(|c| &mut c.key_file),
    },
];

/// Look up a key, ignoring ASCII case
pub fn lookup(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.key.eq_ignore_ascii_case(key))
}

/// Decode raw entries into a [`Config`] without defaults applied
///
/// Later entries for the same key overwrite earlier ones.
pub fn decode(entries: &[RawEntry]) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    for entry in entries {
        if let Some(section) = &entry.section {
            return Err(ConfigError::UnexpectedSection {
                section: section.clone(),
            });
        }

        let spec = lookup(entry.key.trim()).ok_or_else(|| ConfigError::UnknownKey {
            key: entry.key.clone(),
        })?;

        let value = entry.value.trim();
        let mismatch = || ConfigError::TypeMismatch {
            key: spec.key,
            expected: spec.kind().name(),
            value: value.to_string(),
        };

        match spec.slot {
            Slot::Bool(field) => *field(&mut config) = parse_bool(value).ok_or_else(mismatch)?,
            Slot::Int(field) => *field(&mut config) = parse_int(value).ok_or_else(mismatch)?,
            Slot::Str(field) => *field(&mut config) = value.to_string(),
        }
    }

    Ok(config)
}

/// Empty means unset (`false`)
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "0" | "f" | "false" | "n" | "no" | "off" => Some(false),
        "1" | "t" | "true" | "y" | "yes" | "on" => Some(true),
        _ => None,
    }
}

/// Empty means unset (`0`)
fn parse_int(value: &str) -> Option<i32> {
    if value.is_empty() {
        return Some(0);
    }
    value.parse().ok()
}
