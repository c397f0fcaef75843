use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::{SetupError, ShopError};
use crate::channel::ChannelPair;
use crate::config::SimulationConfig;
use crate::customer::{CustomerAgent, CustomerSummary, ProductPicker, UniformPicker};
use crate::domain::CustomerId;
use crate::inventory::Catalog;
use crate::processor::OrderProcessor;
use crate::report::Report;

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub report: Report,
    #[allow(dead_code)]
    pub catalog: Catalog,
    #[allow(dead_code)]
    pub customers: Vec<CustomerSummary>,
}

/// The running shop: one order processor plus its customers.
///
/// Responsible for starting every task, wiring the channels, and waiting for
/// all of them before the report is produced.
pub struct ShopSystem {
    processor: JoinHandle<Result<Catalog, ShopError>>,
    customers: Vec<JoinHandle<Result<CustomerSummary, ShopError>>>,
}

impl ShopSystem {
    /// Starts a run whose customers pick products uniformly at random.
    pub fn start(config: &SimulationConfig) -> Result<Self, SetupError> {
        let seed = config.seed;
        Self::start_with_pickers(config, |customer| {
            Box::new(UniformPicker::new(seed.map(|seed| seed ^ u64::from(customer.0))))
        })
    }

    pub fn start_with_pickers(
        config: &SimulationConfig,
        mut picker_for: impl FnMut(CustomerId) -> Box<dyn ProductPicker>,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        info!(
            products = config.num_products,
            customers = config.num_customers,
            orders_per_customer = config.orders_per_customer,
            routing = ?config.routing,
            "Starting shop"
        );

        // The catalog is complete before any customer exists.
        let catalog = Catalog::initialize(config.num_products, config.initial_stock);
        let (client, endpoint) = ChannelPair::open(config.routing);

        let processor = OrderProcessor::new(catalog, endpoint, config.expected_orders(), config.service_time);
        let processor = tokio::spawn(processor.run());

        let customers = (1..=config.num_customers)
            .map(|n| {
                let id = CustomerId(n);
                let agent = CustomerAgent::new(
                    id,
                    client.clone(),
                    picker_for(id),
                    config.num_products,
                    config.orders_per_customer,
                    config.think_time,
                );
                tokio::spawn(agent.run())
            })
            .collect();

        // Only customers may keep the request channel open.
        drop(client);

        Ok(Self { processor, customers })
    }

    /// Waits for the processor to finish, then for every customer, then reports.
    pub async fn finish(self) -> Result<RunOutcome, ShopError> {
        let catalog = self.processor.await.map_err(|e| {
            error!(error = %e, "Order processor task failed");
            ShopError::TaskFailed(e.to_string())
        })??;

        let mut customers = Vec::with_capacity(self.customers.len());
        for handle in self.customers {
            let summary = handle.await.map_err(|e| {
                error!(error = %e, "Customer task failed");
                ShopError::TaskFailed(e.to_string())
            })??;
            debug!(
                customer = %summary.customer,
                responses = summary.responses_read,
                successes = summary.successes_read,
                "Customer joined"
            );
            customers.push(summary);
        }

        catalog.check_invariants()?;
        let report = Report::from_catalog(&catalog);
        info!(
            total_requests = report.total_requests,
            successful = report.successful_orders,
            failed = report.failed_orders,
            "All customers finished"
        );

        Ok(RunOutcome { report, catalog, customers })
    }
}
