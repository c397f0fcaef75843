use std::fmt;

use super::Money;

/// Label a customer is known by, rendered as `Customer_<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub u32);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer_{}", self.0)
    }
}

/// A catalog entry together with its sales bookkeeping.
///
/// Only the inventory mutates these counters; everyone else gets read access.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub(crate) description: String,
    pub(crate) price: Money,
    pub(crate) initial_stock: u32,
    pub(crate) stock: u32,
    pub(crate) request_count: u32,
    pub(crate) sold_count: u32,
    pub(crate) unsatisfied_requesters: Vec<CustomerId>,
}

impl Product {
    pub fn new(description: impl Into<String>, price: Money, initial_stock: u32) -> Self {
        Self {
            description: description.into(),
            price,
            initial_stock,
            stock: initial_stock,
            request_count: 0,
            sold_count: 0,
            unsatisfied_requesters: Vec::new(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    #[allow(dead_code)]
    pub fn price(&self) -> Money {
        self.price
    }

    #[allow(dead_code)]
    pub fn initial_stock(&self) -> u32 {
        self.initial_stock
    }

    #[allow(dead_code)]
    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn request_count(&self) -> u32 {
        self.request_count
    }

    pub fn sold_count(&self) -> u32 {
        self.sold_count
    }

    pub fn unsatisfied_requesters(&self) -> &[CustomerId] {
        &self.unsatisfied_requesters
    }

    pub fn unsatisfied_count(&self) -> u32 {
        self.unsatisfied_requesters.len() as u32
    }

    pub fn revenue(&self) -> Money {
        self.price * self.sold_count
    }
}
