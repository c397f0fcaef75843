//! The catalog of products and the single operation that mutates it.

pub mod catalog;
pub mod error;

pub use catalog::*;
pub use error::*;
