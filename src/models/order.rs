//! Order summary aggregation.

use super::ProductName;
use std::collections::HashMap;

/// One line of an order summary: a distinct product and its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// The product.
    pub product: ProductName,
    /// How many times the product occurs in the cart.
    pub quantity: usize,
}

/// Quantity-aggregated view of a cart, derived on demand and never persisted.
///
/// Distinct products appear in the order they were first encountered while
/// scanning the item sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    lines: Vec<OrderLine>,
}

impl OrderSummary {
    /// Aggregates an item sequence into per-product quantity lines.
    #[must_use]
    pub fn from_items(items: &[ProductName]) -> Self {
        let mut lines: Vec<OrderLine> = Vec::new();
        let mut index: HashMap<&ProductName, usize> = HashMap::new();

        for item in items {
            if let Some(&at) = index.get(item) {
                lines[at].quantity += 1;
            } else {
                index.insert(item, lines.len());
                lines.push(OrderLine {
                    product: item.clone(),
                    quantity: 1,
                });
            }
        }

        Self { lines }
    }

    /// Returns the summary lines in first-seen product order.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns the number of distinct products.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total number of articles (sum of all quantities).
    #[must_use]
    pub fn total(&self) -> usize {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Returns `true` if the summary holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn items(names: &[&str]) -> Vec<ProductName> {
        names
            .iter()
            .map(|n| ProductName::new(*n).unwrap())
            .collect()
    }

    #[test]
    fn test_aggregation_counts_and_first_seen_order() {
        let summary = OrderSummary::from_items(&items(&["A", "B", "A", "C", "B", "A"]));

        let rendered: Vec<(&str, usize)> = summary
            .lines()
            .iter()
            .map(|line| (line.product.as_str(), line.quantity))
            .collect();
        assert_eq!(rendered, vec![("A", 3), ("B", 2), ("C", 1)]);
        assert_eq!(summary.total(), 6);
        assert_eq!(summary.distinct(), 3);
    }

    #[test]
    fn test_empty_items_yield_empty_summary() {
        let summary = OrderSummary::from_items(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_single_item() {
        let summary = OrderSummary::from_items(&items(&["Tea"]));
        assert_eq!(summary.lines().len(), 1);
        assert_eq!(summary.lines()[0].product.as_str(), "Tea");
        assert_eq!(summary.lines()[0].quantity, 1);
    }
}
