mod domain;
mod config;
mod inventory;
mod messages;
mod channel;
mod clients;
mod processor;
mod customer;
mod report;
mod app_system;

#[cfg(test)]
mod mock_framework;

use std::process::ExitCode;

use tracing::{error, info};
use crate::app_system::{setup_tracing, ShopError, ShopSystem};
use crate::config::SimulationConfig;
use crate::report::Report;

#[tokio::main]
async fn main() -> ExitCode {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SimulationConfig::default();
    info!(expected_orders = config.expected_orders(), "Opening the shop");

    match run(&config).await {
        Ok(report) => {
            print!("{}", report);
            info!("Shop closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run aborted");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &SimulationConfig) -> Result<Report, ShopError> {
    let system = ShopSystem::start(config)?;
    let outcome = system.finish().await?;
    Ok(outcome.report)
}
