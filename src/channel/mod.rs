//! The request/response channel pair between customers and the order processor.
//!
//! The request channel has many writers (every [`ShopClient`] clone) and one
//! reader (the [`ProcessorEndpoint`]). With [`ResponseRouting::Shared`] the
//! response channel has one writer and many readers that take turns: a reply is
//! consumed by whichever customer reads next, exactly like a shared pipe.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::warn;

use crate::app_system::ShopError;
use crate::clients::ShopClient;
use crate::config::ResponseRouting;
use crate::domain::OrderResult;
use crate::messages::{OrderRequest, ResponseRoute};

pub struct ChannelPair;

impl ChannelPair {
    /// Opens both channels and returns the customer side and the processor side.
    pub fn open(routing: ResponseRouting) -> (ShopClient, ProcessorEndpoint) {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();

        let client = match routing {
            ResponseRouting::Shared => ShopClient::shared(request_tx, Arc::new(Mutex::new(response_rx))),
            ResponseRouting::Addressed => ShopClient::addressed(request_tx),
        };
        let endpoint = ProcessorEndpoint {
            requests: request_rx,
            responses: response_tx,
        };
        (client, endpoint)
    }
}

/// The order processor's end of the channel pair.
pub struct ProcessorEndpoint {
    requests: mpsc::UnboundedReceiver<OrderRequest>,
    responses: mpsc::UnboundedSender<OrderResult>,
}

impl ProcessorEndpoint {
    /// Waits for the next order. `None` once every client has been dropped.
    pub async fn recv(&mut self) -> Option<OrderRequest> {
        self.requests.recv().await
    }

    pub fn reply(&self, route: ResponseRoute, result: OrderResult) -> Result<(), ShopError> {
        match route {
            ResponseRoute::Shared => self
                .responses
                .send(result)
                .map_err(|_| ShopError::ResponseChannelClosed),
            ResponseRoute::Direct(respond_to) => {
                // The sender gave up waiting; the order is still final.
                if respond_to.send(result).is_err() {
                    warn!("Customer dropped its reply slot before the result arrived");
                }
                Ok(())
            }
        }
    }
}
