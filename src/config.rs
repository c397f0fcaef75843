//! Fixed parameters of a simulation run.

use std::time::Duration;

use crate::app_system::SetupError;

pub const NUM_PRODUCTS: usize = 20;
pub const NUM_CUSTOMERS: u32 = 5;
pub const ORDERS_PER_CUSTOMER: u32 = 10;
pub const INITIAL_STOCK: u32 = 2;
pub const SERVICE_TIME: Duration = Duration::from_secs(1);
pub const THINK_TIME: Duration = Duration::from_secs(1);

/// How replies find their way back to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseRouting {
    /// One response channel read by every customer. A reply goes to whichever
    /// customer reads next, which is not necessarily the one that asked.
    #[default]
    Shared,
    /// Each order carries its own reply slot, so replies always reach the sender.
    Addressed,
}

/// Configuration for one run of the shop
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub num_products: usize,
    pub num_customers: u32,
    pub orders_per_customer: u32,
    pub initial_stock: u32,
    /// Simulated processing delay applied by the server after each order
    pub service_time: Duration,
    /// Simulated pause a customer takes between orders
    pub think_time: Duration,
    pub routing: ResponseRouting,
    /// Random seed (for reproducibility)
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_products: NUM_PRODUCTS,
            num_customers: NUM_CUSTOMERS,
            orders_per_customer: ORDERS_PER_CUSTOMER,
            initial_stock: INITIAL_STOCK,
            service_time: SERVICE_TIME,
            think_time: THINK_TIME,
            routing: ResponseRouting::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Number of orders the processor must handle before it is done.
    pub fn expected_orders(&self) -> u64 {
        u64::from(self.num_customers) * u64::from(self.orders_per_customer)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.num_products == 0 {
            return Err(SetupError::EmptyCatalog);
        }
        if i64::try_from(self.num_products).is_err() {
            return Err(SetupError::CatalogTooLarge(self.num_products));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_parameters() {
        let config = SimulationConfig::default();
        assert_eq!(config.num_products, 20);
        assert_eq!(config.expected_orders(), 50);
        assert_eq!(config.routing, ResponseRouting::Shared);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let config = SimulationConfig { num_products: 0, ..SimulationConfig::default() };
        assert_eq!(config.validate(), Err(SetupError::EmptyCatalog));
    }
}
