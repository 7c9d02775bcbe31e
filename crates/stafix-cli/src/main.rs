mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod progress;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("🚀 STAFIX CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Amber(args) => {
            info!("Dispatching to 'amber' command.");
            commands::amber::run(args)
        }
        Commands::Gromacs(args) => {
            info!("Dispatching to 'gromacs' command.");
            commands::gromacs::run(args)
        }
    };

    if let Err(e) = &command_result {
        error!("❌ Command failed: {}", e);
    } else {
        info!("✅ Command completed successfully.");
    }

    command_result
}
