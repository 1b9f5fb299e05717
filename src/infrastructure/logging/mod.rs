//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON log file
//! - Optional stdout mirror in debug mode
//! - Audit trail of the resolved configuration

pub mod audit;
pub mod config;
pub mod logger;

pub use audit::{AuditEntry, AuditSink, AuditValue, TracingAuditSink};
pub use config::LogConfig;
pub use logger::LoggerImpl;
