//! Operation CLI commands.

use clap::{Parser, Subcommand};

/// Appliance operation commands.
#[derive(Debug, Parser)]
pub struct OperationsCommand {
    #[command(subcommand)]
    pub action: OperationsAction,
}

/// Available operation actions.
#[derive(Debug, Subcommand)]
pub enum OperationsAction {
    /// List the operations an appliance supports.
    List {
        /// Appliance ID.
        appliance_id: String,
    },
    /// Run an operation on an appliance.
    Send {
        /// Appliance ID.
        appliance_id: String,
        /// Operation ID.
        operation_id: String,
    },
}
