//! Order message rendering.

use crate::models::OrderSummary;
use std::fmt::Write as _;

/// Renders the order message handed off via the deep link.
///
/// The literal layout (French text and emoji markers) is fixed for behavioral
/// parity with the existing external flow: a header with the store display
/// name, an article count, one `• <name> x<count>` line per distinct product,
/// and a closing confirmation line.
#[must_use]
pub fn render_order_message(summary: &OrderSummary, store_name: &str) -> String {
    let mut message = format!("🌿 *Nouvelle Commande - {store_name}*\n\n");
    let _ = writeln!(message, "📦 *Articles ({})* :", summary.total());

    for line in summary.lines() {
        let _ = writeln!(message, "• {} x{}", line.product, line.quantity);
    }

    message.push_str("\n✅ Je souhaite valider cette commande.");
    message
}

/// Renders a plain-text summary table for terminal status output.
#[must_use]
pub fn render_summary_table(summary: &OrderSummary) -> String {
    let mut out = String::new();
    for line in summary.lines() {
        let _ = writeln!(out, "  {} x{}", line.product, line.quantity);
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::ProductName;

    fn summary_of(names: &[&str]) -> OrderSummary {
        let items: Vec<ProductName> = names
            .iter()
            .map(|n| ProductName::new(*n).unwrap())
            .collect();
        OrderSummary::from_items(&items)
    }

    #[test]
    fn test_message_literal_layout() {
        let summary = summary_of(&["Thiakry", "Ndambé", "Thiakry"]);
        let message = render_order_message(&summary, "Sen Ndou Ndougou");

        assert_eq!(
            message,
            "🌿 *Nouvelle Commande - Sen Ndou Ndougou*\n\n\
             📦 *Articles (3)* :\n\
             • Thiakry x2\n\
             • Ndambé x1\n\
             \n✅ Je souhaite valider cette commande."
        );
    }

    #[test]
    fn test_single_item_line() {
        let summary = summary_of(&["Tea"]);
        let message = render_order_message(&summary, "Sen Ndou Ndougou");
        assert!(message.contains("• Tea x1"));
        assert!(message.contains("📦 *Articles (1)* :"));
    }

    #[test]
    fn test_summary_table() {
        let summary = summary_of(&["A", "B", "A"]);
        let table = render_summary_table(&summary);
        assert_eq!(table, "  A x2\n  B x1\n");
    }
}
