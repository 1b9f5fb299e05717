//! Settings source reading
//!
//! Turns an INI settings file into a flat list of raw entries. No key or type
//! checking happens here; that is the job of [`super::schema`].

use std::path::Path;

use ini::{Ini, ParseOption};
use tracing::debug;

use super::loader::ConfigError;

/// One `key = value` line as it appeared in the settings source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Section name, `None` for the top-level section
    pub section: Option<String>,
    /// Key as written
    pub key: String,
    /// Raw value, comments and surrounding quotes removed
    pub value: String,
}

impl RawEntry {
    /// Entry in the top-level section
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            section: None,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Read and parse the settings file at `path`
pub fn read_file(path: &Path) -> Result<Vec<RawEntry>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "read settings file");
    parse_str(&contents, &path.display().to_string())
}

/// Parse INI text into raw entries
///
/// `origin` names the source in error messages.
pub fn parse_str(contents: &str, origin: &str) -> Result<Vec<RawEntry>, ConfigError> {
    // Backslashes are literal so Windows paths survive unchanged
    let opt = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };

    let ini = Ini::load_from_str_opt(contents, opt).map_err(|e| ConfigError::Malformed {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;

    let entries = ini
        .iter()
        .flat_map(|(section, props)| {
            props.iter().map(move |(key, value)| RawEntry {
                section: section.map(str::to_string),
                key: key.to_string(),
                value: value.trim().to_string(),
            })
        })
        .collect();

    Ok(entries)
}
