//! Ayame - startup configuration for the WebRTC signaling server
//!
//! Loads the INI settings file, validates it, fills defaults, and records an
//! audit trail of the resolved values before any service starts.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the [`Config`] record and its defaults
//! - **Infrastructure Layer** (`infrastructure`): settings file loading and logging
//! - **CLI Layer** (`cli`): the `ayame` bootstrap binary
//!
//! # Example
//!
//! ```no_run
//! use ayame::ConfigLoader;
//!
//! let config = ConfigLoader::load("config.ini")?;
//! println!("listening on port {}", config.listen_port_number());
//! # Ok::<(), ayame::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

/// Build version of this binary
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used types for convenience
pub use domain::models::Config;
pub use infrastructure::config::{ConfigError, ConfigLoader, ErrorKind};
pub use infrastructure::logging::{AuditSink, TracingAuditSink};
