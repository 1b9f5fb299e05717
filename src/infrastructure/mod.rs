//! Infrastructure layer module
//!
//! This module contains the integrations with the outside world:
//! - Settings file loading and validation
//! - Logging infrastructure and configuration audit trail

pub mod config;
pub mod logging;
