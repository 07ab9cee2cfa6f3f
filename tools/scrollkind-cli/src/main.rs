//! Scrollkind CLI — probe and exercise trackpad scroll monitoring.
//!
//! Usage:
//!   scrollkind check     Report the selected provider and platform support
//!   scrollkind watch     Start monitoring and report scroll attribution

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "scrollkind",
    about = "Trackpad scroll detection with a uniform cross-platform contract",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check provider selection and platform capabilities
    Check,

    /// Start monitoring and report whether scrolls come from a trackpad
    Watch,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    scrollkind_common::logging::init_logging(&scrollkind_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Check => commands::check::run(),
        Commands::Watch => commands::watch::run(),
    }
}
