// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! # Facts API server CLI
//!
//! The `factsd` binary runs the facts aggregation service.
//!
//! ## Commands
//!
//! - `factsd serve` - Run the HTTP server (default when no subcommand)
//! - `factsd config show|validate|generate` - Configuration management
//!
//! Configuration is discovered from `--config`, `FACTS_CONFIG_PATH`,
//! `./facts-config.yaml`, `~/.facts-api/config.yaml`, or
//! `/etc/facts-api/config.yaml`, in that order.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod server;

use commands::ConfigCommand;

/// Facts aggregation service - mixed categorized facts from three upstreams
#[derive(Parser)]
#[command(name = "factsd")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(
        short,
        long,
        global = true,
        env = "FACTS_CONFIG_PATH",
        value_name = "FILE"
    )]
    config: Option<PathBuf>,

    /// HTTP API host (overrides configuration)
    #[arg(long, global = true, env = "FACTS_HOST")]
    host: Option<String>,

    /// HTTP API port (overrides configuration)
    #[arg(long, global = true, env = "FACTS_PORT")]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the facts aggregation server
    Serve,

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::run(cli.config, cli.host, cli.port).await,
        Command::Config { command } => commands::config::handle_command(command, cli.config).await,
    }
}
