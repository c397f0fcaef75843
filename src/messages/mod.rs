use tokio::sync::oneshot;
use crate::domain::{Order, OrderResult};

/// Reply slot for an order whose answer must reach its own sender.
pub type OrderResponse = oneshot::Sender<OrderResult>;

/// Where the processor writes the result of an order.
#[derive(Debug)]
pub enum ResponseRoute {
    /// Onto the shared response channel, read by whichever customer is waiting.
    Shared,
    /// Back to the customer that placed the order.
    Direct(OrderResponse),
}

/// One message on the request channel.
#[derive(Debug)]
pub struct OrderRequest {
    pub order: Order,
    pub route: ResponseRoute,
}
