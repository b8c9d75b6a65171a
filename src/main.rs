//! dot3: terminal client for the dot3 document filtering and retrieval service

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dot3_client::config::{init_logging, Config};
use std::path::PathBuf;
use tracing::debug;

use commands::{Action, OutputFormat};

#[derive(Parser)]
#[command(name = "dot3")]
#[command(about = "Filter words, index PDFs and query documents on a dot3 server")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "dot3.toml")]
    config: PathBuf,

    /// Server base URL (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Action(Action),

    /// Interactive session: load once, then one action per line
    Shell,

    /// Write a default configuration file
    Init {
        /// Output directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(url) = cli.api_url {
        config.server.base_url = url;
        config.validate()?;
    }

    init_logging(&config.logging, cli.verbose)?;
    debug!("Using server {}", config.server.base_url);

    match cli.command {
        Commands::Action(action) => commands::run_action(config, action, cli.format).await,
        Commands::Shell => commands::run_shell(config, cli.format).await,
        Commands::Init { path } => commands::init_config(path).await,
    }
}
