//! Final summary derived from the catalog once every order has been served.

use std::fmt;

use crate::domain::{CustomerId, Money};
use crate::inventory::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductLine {
    pub description: String,
    pub requests: u32,
    pub sold: u32,
    pub unsatisfied: Vec<CustomerId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub products: Vec<ProductLine>,
    pub total_requests: u64,
    pub successful_orders: u64,
    pub failed_orders: u64,
    pub total_revenue: Money,
}

impl Report {
    /// Read-only pass over the catalog; calling it twice yields the same report.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let products = catalog
            .iter()
            .map(|product| ProductLine {
                description: product.description().to_string(),
                requests: product.request_count(),
                sold: product.sold_count(),
                unsatisfied: product.unsatisfied_requesters().to_vec(),
            })
            .collect();

        Self {
            products,
            total_requests: catalog.iter().map(|p| u64::from(p.request_count())).sum(),
            successful_orders: catalog.iter().map(|p| u64::from(p.sold_count())).sum(),
            failed_orders: catalog.iter().map(|p| u64::from(p.unsatisfied_count())).sum(),
            total_revenue: catalog.iter().map(|p| p.revenue()).sum(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== Summary Report ===")?;
        for line in &self.products {
            writeln!(f, "Product: {}", line.description)?;
            writeln!(f, "Requests: {}", line.requests)?;
            writeln!(f, "Sold: {}", line.sold)?;
            write!(f, "Unsatisfied Users: ")?;
            if line.unsatisfied.is_empty() {
                write!(f, "None")?;
            } else {
                let names: Vec<String> = line.unsatisfied.iter().map(|c| c.to_string()).collect();
                write!(f, "{}", names.join(" "))?;
            }
            writeln!(f)?;
            writeln!(f)?;
        }

        writeln!(f, "=== Overall Statistics ===")?;
        writeln!(f, "Total Requests: {}", self.total_requests)?;
        writeln!(f, "Successful Orders: {}", self.successful_orders)?;
        writeln!(f, "Failed Orders: {}", self.failed_orders)?;
        writeln!(f, "Total Revenue: {}", self.total_revenue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::initialize(2, 1);
        catalog.fulfill_or_record_failure(1, CustomerId(1));
        catalog.fulfill_or_record_failure(1, CustomerId(3));
        catalog.fulfill_or_record_failure(1, CustomerId(2));
        catalog
    }

    #[test]
    fn test_totals() {
        let report = Report::from_catalog(&sample_catalog());
        assert_eq!(report.total_requests, 3);
        assert_eq!(report.successful_orders, 1);
        assert_eq!(report.failed_orders, 2);
        assert_eq!(report.total_revenue, Money::from_units(20));
        assert_eq!(report.products[1].unsatisfied, vec![CustomerId(3), CustomerId(2)]);
    }

    #[test]
    fn test_rendered_layout() {
        let rendered = Report::from_catalog(&sample_catalog()).to_string();
        let expected = "\n=== Summary Report ===\n\
            Product: Product_1\nRequests: 0\nSold: 0\nUnsatisfied Users: None\n\n\
            Product: Product_2\nRequests: 3\nSold: 1\nUnsatisfied Users: Customer_3 Customer_2\n\n\
            === Overall Statistics ===\n\
            Total Requests: 3\nSuccessful Orders: 1\nFailed Orders: 2\nTotal Revenue: 20.00\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_reporting_is_repeatable() {
        let catalog = sample_catalog();
        let first = Report::from_catalog(&catalog);
        let second = Report::from_catalog(&catalog);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}
