//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ayame")]
#[command(about = "Ayame - WebRTC signaling server", long_about = None)]
#[command(version = crate::VERSION)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, default_value = "./config.ini")]
    pub config: PathBuf,

    /// Resolve and validate the settings file, print it, and exit
    #[arg(long)]
    pub check: bool,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}
