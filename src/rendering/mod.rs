//! Message rendering.
//!
//! Renders the quantity-aggregated order summary into the fixed-format
//! message the external flow expects.

mod order;

pub use order::{render_order_message, render_summary_table};
