use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, Mutex};
use tracing::{debug, instrument};

use crate::app_system::ShopError;
use crate::domain::{Order, OrderResult};
use crate::messages::{OrderRequest, ResponseRoute};

type SharedResponses = Arc<Mutex<mpsc::UnboundedReceiver<OrderResult>>>;

/// Customer-side handle onto the channel pair.
///
/// Cheap to clone; every customer agent holds its own clone.
#[derive(Clone)]
pub struct ShopClient {
    requests: mpsc::UnboundedSender<OrderRequest>,
    responses: Option<SharedResponses>,
}

impl ShopClient {
    pub(crate) fn shared(requests: mpsc::UnboundedSender<OrderRequest>, responses: SharedResponses) -> Self {
        Self { requests, responses: Some(responses) }
    }

    pub(crate) fn addressed(requests: mpsc::UnboundedSender<OrderRequest>) -> Self {
        Self { requests, responses: None }
    }

    /// Sends one order and waits for one result.
    ///
    /// With shared routing the result is simply the next one on the response
    /// channel and may belong to another customer's order.
    #[instrument(skip(self), fields(customer = %order.customer, product_index = order.product_index))]
    pub async fn place_order(&self, order: Order) -> Result<OrderResult, ShopError> {
        debug!("Sending request");
        self.send_order(order)?.wait().await
    }

    /// Puts an order on the request channel without waiting for the reply.
    pub fn send_order(&self, order: Order) -> Result<PendingReply, ShopError> {
        let (route, pending) = match &self.responses {
            Some(shared) => (ResponseRoute::Shared, PendingReply::Shared(Arc::clone(shared))),
            None => {
                let (respond_to, response) = oneshot::channel();
                (ResponseRoute::Direct(respond_to), PendingReply::Direct(response))
            }
        };

        self.requests
            .send(OrderRequest { order, route })
            .map_err(|_| ShopError::ProcessorUnavailable)?;
        Ok(pending)
    }
}

/// A reply that has not been read yet.
pub enum PendingReply {
    Shared(SharedResponses),
    Direct(oneshot::Receiver<OrderResult>),
}

impl PendingReply {
    pub async fn wait(self) -> Result<OrderResult, ShopError> {
        match self {
            PendingReply::Shared(responses) => {
                let mut responses = responses.lock().await;
                responses.recv().await.ok_or(ShopError::ResponseChannelClosed)
            }
            PendingReply::Direct(response) => response.await.map_err(|_| ShopError::ResponseDropped),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ResponseRouting;
    use crate::domain::{CustomerId, Money, Order, OrderResult};
    use crate::mock_framework::{create_mock_shop, expect_order};

    #[tokio::test]
    async fn test_place_order_addressed() {
        let (client, mut endpoint) = create_mock_shop(ResponseRouting::Addressed);

        let order_task = tokio::spawn(async move { client.place_order(Order::new(2, CustomerId(9))).await });

        let (order, route) = expect_order(&mut endpoint).await.expect("Expected an order");
        assert_eq!(order, Order::new(2, CustomerId(9)));
        let result = OrderResult::Fulfilled { description: "Product_3".into(), price: Money::from_units(30) };
        endpoint.reply(route, result.clone()).unwrap();

        assert_eq!(order_task.await.unwrap(), Ok(result));
    }

    #[tokio::test]
    async fn test_shared_reply_goes_to_next_reader() {
        let (client, mut endpoint) = create_mock_shop(ResponseRouting::Shared);

        // Customer 1 places an order but customer 2 reads the reply.
        let _unread = client.send_order(Order::new(0, CustomerId(1))).unwrap();
        let (_, route) = expect_order(&mut endpoint).await.expect("Expected an order");
        endpoint.reply(route, OrderResult::OutOfStock { description: "Product_1".into() }).unwrap();

        let reader = client.send_order(Order::new(5, CustomerId(2))).unwrap();
        assert_eq!(
            reader.wait().await,
            Ok(OrderResult::OutOfStock { description: "Product_1".into() })
        );
    }

    #[tokio::test]
    async fn test_place_order_without_processor() {
        let (client, endpoint) = create_mock_shop(ResponseRouting::Addressed);
        drop(endpoint);
        let result = client.place_order(Order::new(0, CustomerId(1))).await;
        assert_eq!(result, Err(crate::app_system::ShopError::ProcessorUnavailable));
    }
}
