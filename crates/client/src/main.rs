//! homelink CLI entry point.

use std::sync::Arc;

use clap::Parser;
use homelink_client::cli::{Cli, Commands, OutputFormat};
use homelink_client::client::ApiClient;
use homelink_client::output::{format_output, pretty};
use homelink_core::config::StaticConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homelink_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StaticConfig {
        base_url: cli.base_url.clone(),
        passphrase: cli.passphrase.clone(),
    };
    let client = ApiClient::new(Arc::new(config));

    match cli.command {
        Commands::Appliances(appliances_cmd) => {
            use homelink_client::cli::appliances::AppliancesAction;
            match appliances_cmd.action {
                AppliancesAction::List => {
                    let appliances = client.fetch_appliance_list().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&appliances, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_appliances(&appliances))
                        }
                    }
                }
            }
        }
        Commands::Operations(operations_cmd) => {
            use homelink_client::cli::operations::OperationsAction;
            match operations_cmd.action {
                OperationsAction::List { appliance_id } => {
                    let operations = client.fetch_operation_list(&appliance_id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&operations, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_operations(&operations))
                        }
                    }
                }
                OperationsAction::Send {
                    appliance_id,
                    operation_id,
                } => {
                    let confirmation = client.post_operation(&appliance_id, &operation_id).await?;
                    if !cli.quiet {
                        println!(
                            "{}",
                            pretty::format_confirmation(&appliance_id, &operation_id, &confirmation)
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
