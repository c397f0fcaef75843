//! The single consumer of the request channel.

use std::time::Duration;

use tracing::{debug, error, info, instrument};

use crate::app_system::ShopError;
use crate::channel::ProcessorEndpoint;
use crate::inventory::Catalog;
use crate::messages::OrderRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorState {
    Running,
    Done,
}

/// Server loop owning the catalog for the whole run.
///
/// Stops after exactly `expected_orders` orders. The channel model has no
/// end-of-stream marker, so the target must equal the number of orders the
/// customers will send.
pub struct OrderProcessor {
    catalog: Catalog,
    endpoint: ProcessorEndpoint,
    expected_orders: u64,
    processed: u64,
    service_time: Duration,
    state: ProcessorState,
}

impl OrderProcessor {
    pub fn new(catalog: Catalog, endpoint: ProcessorEndpoint, expected_orders: u64, service_time: Duration) -> Self {
        let state = if expected_orders == 0 { ProcessorState::Done } else { ProcessorState::Running };
        Self {
            catalog,
            endpoint,
            expected_orders,
            processed: 0,
            service_time,
            state,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> ProcessorState {
        self.state
    }

    #[allow(dead_code)]
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Serves orders until the target is reached, then hands the catalog back.
    #[instrument(name = "order_processor", skip(self), fields(expected = self.expected_orders))]
    pub async fn run(mut self) -> Result<Catalog, ShopError> {
        info!("OrderProcessor starting");
        while self.state == ProcessorState::Running {
            let Some(request) = self.endpoint.recv().await else {
                error!(processed = self.processed, "Request channel closed before all orders arrived");
                return Err(ShopError::RequestChannelClosed {
                    processed: self.processed,
                    expected: self.expected_orders,
                });
            };

            self.handle_order(request)?;

            if !self.service_time.is_zero() {
                tokio::time::sleep(self.service_time).await;
            }
        }
        info!(processed = self.processed, "OrderProcessor done");
        Ok(self.catalog)
    }

    /// Applies one order to the catalog and writes its result back.
    #[instrument(skip(self, request), fields(customer = %request.order.customer, product_index = request.order.product_index))]
    pub fn handle_order(&mut self, request: OrderRequest) -> Result<(), ShopError> {
        let OrderRequest { order, route } = request;
        let result = self.catalog.fulfill_or_record_failure(order.product_index, order.customer);
        debug!(result = %result, "Order processed");

        self.endpoint.reply(route, result)?;

        self.processed += 1;
        if self.processed >= self.expected_orders {
            self.state = ProcessorState::Done;
        }
        Ok(())
    }

    #[allow(dead_code)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
