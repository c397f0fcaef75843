//! # Mock Framework
//!
//! Utilities for testing customers and clients without a running order processor.
//!
//! Use [`create_mock_shop`] to get a client and the raw processor end of the
//! channel pair. Then use [`expect_order`] to assert what arrives and
//! [`ProcessorEndpoint::reply`] to answer it however the test needs.

use crate::channel::{ChannelPair, ProcessorEndpoint};
use crate::clients::ShopClient;
use crate::config::ResponseRouting;
use crate::domain::Order;
use crate::messages::ResponseRoute;

/// Creates a client plus the processor side of its channels, with nobody serving them.
pub fn create_mock_shop(routing: ResponseRouting) -> (ShopClient, ProcessorEndpoint) {
    ChannelPair::open(routing)
}

/// Waits for the next order on the request channel
pub async fn expect_order(endpoint: &mut ProcessorEndpoint) -> Option<(Order, ResponseRoute)> {
    endpoint.recv().await.map(|request| (request.order, request.route))
}
