//! Data models for comptoir.
//!
//! This module contains all the core data structures used throughout the system.

mod cart;
mod contact;
mod events;
mod notification;
mod order;
mod product;

pub use cart::CartState;
pub use contact::ContactSubmission;
pub use events::{CartEvent, EventMeta};
pub use notification::{
    Notification, NotificationId, NotificationKind, NotificationPhase, NotificationTimings,
};
pub use order::{OrderLine, OrderSummary};
pub use product::ProductName;
