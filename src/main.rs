//! Ayame bootstrap entry point.

use std::process::ExitCode;

use clap::Parser;

use ayame::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::execute(&cli) {
        Ok(Some(bootstrap)) => {
            tracing::info!(
                listen_port_number = bootstrap.config.listen_port_number(),
                use_tls = bootstrap.config.use_tls(),
                "handing configuration to signaling services"
            );
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            cli::handle_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}
