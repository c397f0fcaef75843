use tracing::{debug, instrument};

use super::InventoryError;
use crate::domain::{CustomerId, Money, OrderResult, Product};

/// Fixed-size, index-addressed collection of products.
///
/// A `Catalog` has exactly one owner at a time. While orders are flowing that
/// owner is the order processor, and every mutation goes through
/// [`Catalog::fulfill_or_record_failure`] with `&mut self`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds `Product_1..=Product_n` priced 10.00, 20.00, ... each holding
    /// `initial_stock` units.
    pub fn initialize(num_products: usize, initial_stock: u32) -> Self {
        let products = (1..=num_products as u64)
            .map(|n| Product::new(format!("Product_{}", n), Money::from_units(n * 10), initial_stock))
            .collect();
        Self { products }
    }

    #[cfg(test)]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn product(&self, index: i64) -> Result<&Product, InventoryError> {
        let slot = self.slot(index)?;
        Ok(&self.products[slot])
    }

    fn slot(&self, index: i64) -> Result<usize, InventoryError> {
        usize::try_from(index)
            .ok()
            .filter(|slot| *slot < self.products.len())
            .ok_or(InventoryError::InvalidIndex { index, len: self.products.len() })
    }

    /// Sells one unit of the product at `index` to `customer`, or records the
    /// customer as unsatisfied when the product has run out.
    ///
    /// An index outside the catalog leaves every product untouched and yields
    /// [`OrderResult::InvalidIndex`].
    #[instrument(skip(self, customer), fields(customer = %customer))]
    pub fn fulfill_or_record_failure(&mut self, index: i64, customer: CustomerId) -> OrderResult {
        let slot = match self.slot(index) {
            Ok(slot) => slot,
            Err(e) => {
                debug!(error = %e, "Rejecting order");
                return OrderResult::InvalidIndex { index };
            }
        };

        let product = &mut self.products[slot];
        product.request_count += 1;

        if product.stock > 0 {
            product.stock -= 1;
            product.sold_count += 1;
            debug!(product = %product.description, stock = product.stock, "Unit sold");
            OrderResult::Fulfilled {
                description: product.description.clone(),
                price: product.price,
            }
        } else {
            product.unsatisfied_requesters.push(customer);
            debug!(product = %product.description, "Out of stock");
            OrderResult::OutOfStock {
                description: product.description.clone(),
            }
        }
    }

    /// Verifies the bookkeeping relations that must hold for every product.
    pub fn check_invariants(&self) -> Result<(), InventoryError> {
        for product in &self.products {
            let violation = |detail: String| InventoryError::InvariantViolated {
                description: product.description.clone(),
                detail,
            };

            if product.stock > product.initial_stock {
                return Err(violation(format!(
                    "stock {} exceeds initial stock {}",
                    product.stock, product.initial_stock
                )));
            }
            if product.sold_count + product.stock != product.initial_stock {
                return Err(violation(format!(
                    "sold {} + stock {} != initial stock {}",
                    product.sold_count, product.stock, product.initial_stock
                )));
            }
            if product.request_count != product.sold_count + product.unsatisfied_count() {
                return Err(violation(format!(
                    "requests {} != sold {} + unsatisfied {}",
                    product.request_count,
                    product.sold_count,
                    product.unsatisfied_count()
                )));
            }
        }
        Ok(())
    }
}
