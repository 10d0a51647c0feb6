//! Appliance CLI commands.

use clap::{Parser, Subcommand};

/// Appliance catalog commands.
#[derive(Debug, Parser)]
pub struct AppliancesCommand {
    #[command(subcommand)]
    pub action: AppliancesAction,
}

/// Available appliance actions.
#[derive(Debug, Subcommand)]
pub enum AppliancesAction {
    /// List all appliances known to the gateway.
    List,
}
