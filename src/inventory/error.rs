use thiserror::Error;

/// Errors raised by catalog lookups and consistency checks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Invalid product index {index} (catalog has {len} products)")]
    InvalidIndex { index: i64, len: usize },
    #[error("Inventory invariant violated for {description}: {detail}")]
    InvariantViolated { description: String, detail: String },
}
