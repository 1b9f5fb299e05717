//! Domain layer for the Ayame signaling server
//!
//! This module contains the configuration model shared by every service.

pub mod models;
