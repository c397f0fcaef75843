use thiserror::Error;

use crate::inventory::InventoryError;

/// Failures detected before any order is sent. Always fatal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SetupError {
    #[error("Catalog must contain at least one product")]
    EmptyCatalog,
    #[error("Catalog of {0} products cannot be addressed by order indices")]
    CatalogTooLarge(usize),
}

/// Failures of a running system.
///
/// Per-order problems (unknown product, no stock) are not errors; they travel
/// back to the customer as an `OrderResult`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    #[error("Setup failed: {0}")]
    Setup(#[from] SetupError),
    #[error("Request channel closed after {processed} of {expected} orders")]
    RequestChannelClosed { processed: u64, expected: u64 },
    #[error("Order processor is no longer accepting orders")]
    ProcessorUnavailable,
    #[error("Response channel closed")]
    ResponseChannelClosed,
    #[error("Order processor dropped the reply")]
    ResponseDropped,
    #[error("Task failed: {0}")]
    TaskFailed(String),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
