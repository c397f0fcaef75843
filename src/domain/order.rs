use std::fmt;

use super::{CustomerId, Money};

/// A request for one unit of one product.
///
/// The index is signed so that out-of-range references (e.g. `-1`) can travel
/// on the wire and be rejected by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub product_index: i64,
    pub customer: CustomerId,
}

impl Order {
    pub fn new(product_index: i64, customer: CustomerId) -> Self {
        Self { product_index, customer }
    }
}

/// Outcome of processing one [`Order`].
#[derive(Debug, Clone, PartialEq)]
pub enum OrderResult {
    Fulfilled { description: String, price: Money },
    OutOfStock { description: String },
    InvalidIndex { index: i64 },
}

impl OrderResult {
    pub fn is_success(&self) -> bool {
        matches!(self, OrderResult::Fulfilled { .. })
    }
}

impl fmt::Display for OrderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderResult::Fulfilled { description, price } => {
                write!(f, "Order successful: {}, Price={}", description, price)
            }
            OrderResult::OutOfStock { description } => {
                write!(f, "Order failed: {} is out of stock", description)
            }
            OrderResult::InvalidIndex { .. } => write!(f, "Invalid product index"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_text() {
        let ok = OrderResult::Fulfilled { description: "Product_3".into(), price: Money::from_units(30) };
        assert_eq!(ok.to_string(), "Order successful: Product_3, Price=30.00");
        assert!(ok.is_success());

        let failed = OrderResult::OutOfStock { description: "Product_3".into() };
        assert_eq!(failed.to_string(), "Order failed: Product_3 is out of stock");
        assert!(!failed.is_success());

        assert_eq!(OrderResult::InvalidIndex { index: -1 }.to_string(), "Invalid product index");
    }

    #[test]
    fn test_customer_label() {
        assert_eq!(CustomerId(4).to_string(), "Customer_4");
    }
}
