//! Command-line bootstrap for the `ayame` binary.
//!
//! Resolves the settings file, installs the process logger from the resolved
//! logging fields, and writes the configuration audit trail. The signaling,
//! webhook, metrics and TLS services consume the returned [`Config`].

pub mod output;
pub mod types;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{audit, LogConfig, LoggerImpl, TracingAuditSink};
use output::{output, CommandOutput};

pub use types::Cli;

/// Resolved configuration as shown to the operator
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    /// Build version
    pub version: &'static str,
    /// Settings file the values came from
    pub config_path: PathBuf,
    /// Resolved values
    pub config: Config,
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "ayame {} - settings from {}",
            self.version,
            self.config_path.display()
        )];
        for entry in audit::entries(&self.config) {
            lines.push(format!("  {} = {}", entry.field, entry.value));
        }
        lines.join("\n")
    }
}

/// Resolved configuration plus the live logger
///
/// Keep this alive for as long as the process logs; dropping it flushes the
/// log file.
pub struct Bootstrap {
    /// Shared read-only configuration for the downstream services
    pub config: Arc<Config>,
    _logger: LoggerImpl,
}

/// Run the bootstrap described by `cli`
///
/// Returns `None` in `--check` mode, where nothing beyond validation happens.
pub fn execute(cli: &Cli) -> Result<Option<Bootstrap>> {
    let config = ConfigLoader::resolve(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;

    if cli.check {
        let result = ConfigOutput {
            version: crate::VERSION,
            config_path: cli.config.clone(),
            config,
        };
        output(&result, cli.json);
        return Ok(None);
    }

    let logger = LoggerImpl::init(&LogConfig::from(&config))?;
    audit::report(&config, &TracingAuditSink);
    info!(version = crate::VERSION, "ayame configuration ready");

    if cli.json {
        let result = ConfigOutput {
            version: crate::VERSION,
            config_path: cli.config.clone(),
            config: config.clone(),
        };
        output(&result, true);
    }

    Ok(Some(Bootstrap {
        config: Arc::new(config),
        _logger: logger,
    }))
}

/// Report a fatal bootstrap error to the operator
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": chain,
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
}
