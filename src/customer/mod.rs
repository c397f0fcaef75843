//! Customer agents: independent producers of orders.

mod picker;

pub use picker::*;

use std::time::Duration;

use tracing::{info, instrument};

use crate::app_system::ShopError;
use crate::clients::ShopClient;
use crate::domain::{CustomerId, Order};

/// What one customer saw over its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerSummary {
    pub customer: CustomerId,
    pub responses_read: u32,
    pub successes_read: u32,
}

pub struct CustomerAgent {
    id: CustomerId,
    client: ShopClient,
    picker: Box<dyn ProductPicker>,
    catalog_len: usize,
    orders: u32,
    think_time: Duration,
}

impl CustomerAgent {
    pub fn new(
        id: CustomerId,
        client: ShopClient,
        picker: Box<dyn ProductPicker>,
        catalog_len: usize,
        orders: u32,
        think_time: Duration,
    ) -> Self {
        Self {
            id,
            client,
            picker,
            catalog_len,
            orders,
            think_time,
        }
    }

    /// Places `orders` orders one after another, waiting for a reply each time.
    ///
    /// Every reply read is printed as `Customer_<N> received: <result>`,
    /// attributed to this customer whichever order it answers.
    #[instrument(name = "customer", skip(self), fields(customer = %self.id))]
    pub async fn run(mut self) -> Result<CustomerSummary, ShopError> {
        let mut summary = CustomerSummary {
            customer: self.id,
            responses_read: 0,
            successes_read: 0,
        };

        for _ in 0..self.orders {
            let product_index = self.picker.pick(self.catalog_len);
            let result = self.client.place_order(Order::new(product_index, self.id)).await?;

            println!("{} received: {}", self.id, result);
            summary.responses_read += 1;
            if result.is_success() {
                summary.successes_read += 1;
            }

            if !self.think_time.is_zero() {
                tokio::time::sleep(self.think_time).await;
            }
        }

        info!(responses = summary.responses_read, successes = summary.successes_read, "Customer finished");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResponseRouting;
    use crate::domain::{Money, OrderResult};
    use crate::mock_framework::{create_mock_shop, expect_order};

    #[tokio::test]
    async fn test_customer_sends_fixed_number_of_orders() {
        let (client, mut endpoint) = create_mock_shop(ResponseRouting::Addressed);
        let agent = CustomerAgent::new(
            CustomerId(2),
            client,
            Box::new(ScriptedPicker::new([4, 0, 9])),
            10,
            3,
            Duration::ZERO,
        );
        let task = tokio::spawn(agent.run());

        let mut seen = Vec::new();
        for step in 0..3 {
            let (order, route) = expect_order(&mut endpoint).await.expect("Expected an order");
            assert_eq!(order.customer, CustomerId(2));
            seen.push(order.product_index);
            let result = if step == 1 {
                OrderResult::OutOfStock { description: "Product_1".into() }
            } else {
                OrderResult::Fulfilled { description: "Product_5".into(), price: Money::from_units(50) }
            };
            endpoint.reply(route, result).unwrap();
        }

        let summary = task.await.unwrap().unwrap();
        assert_eq!(seen, vec![4, 0, 9]);
        assert_eq!(summary.responses_read, 3);
        assert_eq!(summary.successes_read, 2);

        // The agent is done and has dropped its client.
        assert!(endpoint.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_customer_fails_when_processor_disappears() {
        let (client, mut endpoint) = create_mock_shop(ResponseRouting::Shared);
        let agent = CustomerAgent::new(
            CustomerId(1),
            client,
            Box::new(ScriptedPicker::new([0])),
            1,
            2,
            Duration::ZERO,
        );
        let task = tokio::spawn(agent.run());

        expect_order(&mut endpoint).await.expect("Expected an order");
        drop(endpoint);

        assert_eq!(task.await.unwrap(), Err(ShopError::ResponseChannelClosed));
    }
}
