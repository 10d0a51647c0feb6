//! CLI command definitions.

pub mod appliances;
pub mod operations;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the homelink appliance gateway.
#[derive(Debug, Parser)]
#[command(name = "homelink")]
#[command(about = "CLI client for the homelink appliance gateway", long_about = None)]
pub struct Cli {
    /// Gateway base URL.
    #[arg(long, env = "HOMELINK_URL")]
    pub base_url: Option<String>,

    /// Passphrase sent with operation commands.
    #[arg(long, env = "HOMELINK_PASSPHRASE", default_value = "", hide_env_values = true)]
    pub passphrase: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Appliance catalog.
    Appliances(appliances::AppliancesCommand),
    /// Appliance operations.
    Operations(operations::OperationsCommand),
}
