//! Configuration management infrastructure
//!
//! Startup settings loading:
//! - INI file reading
//! - Strict, case-insensitive key mapping
//! - Webhook URL validation
//! - Defaults for unset fields

pub mod loader;
pub mod schema;
pub mod source;

pub use loader::{ConfigError, ConfigLoader, ErrorKind};
