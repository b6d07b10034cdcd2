//! nocbot - NOC automation for DNA Center and Webex Teams
//!
//! Main entry point for the nocbot CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod clients;
mod commands;

use commands::{client, devices, post, token};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// nocbot - NOC automation for DNA Center and Webex Teams
#[derive(Parser)]
#[command(name = "nocbot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config directory (default: ~/.config/nocbot)
    #[arg(long, global = true, env = "NOCBOT_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and print a DNA Center session token
    Token(token::TokenArgs),

    /// Locate a wired client by IPv4 address
    Client(client::ClientArgs),

    /// Show the DNA Center device inventory
    Devices(devices::DevicesArgs),

    /// Post a message to a Webex room
    Post(post::PostArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing: console (human-readable) + rotating JSON file
    let filter = if cli.verbose {
        "nocbot=debug,nocbot_webex=debug,nocbot_dnac=debug,nocbot_config=debug,info"
    } else {
        "nocbot=info,nocbot_webex=info,nocbot_dnac=info,nocbot_config=info,warn"
    };

    let log_dir = nocbot_config::xdg_config_dir()
        .map(|d| d.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(&log_dir, "nocbot.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "nocbot=trace,nocbot_webex=trace,nocbot_dnac=trace,nocbot_config=trace,info",
                )),
        )
        .init();

    // Load layered configuration
    let loaded = nocbot_config::load_config_with_options(None, cli.config_dir.as_deref())?;
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }

    // Create context for commands
    let ctx = commands::Context {
        config: loaded.config,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    // Dispatch to command handlers
    match cli.command {
        Commands::Token(args) => token::run(args, &ctx).await,
        Commands::Client(args) => client::run(args, &ctx).await,
        Commands::Devices(args) => devices::run(args, &ctx).await,
        Commands::Post(args) => post::run(args, &ctx).await,
    }
}
