//! CLI command implementations.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `add` | Add a product to the cart |
//! | `status` | Show the cart contents |
//! | `checkout` | Validate the order and hand it off via the deep link |
//! | `contact` | Submit the contact form |
//! | `config` | Show the active configuration |
//! | `session` | Interactive line-oriented storefront session |
//!
//! # Example Usage
//!
//! ```bash
//! # Add a product
//! comptoir add "Thiakry"
//!
//! # Validate the order and open WhatsApp
//! comptoir checkout --open
//!
//! # Interactive session
//! comptoir session
//! ```

mod core;
mod session;
mod terminal;

pub use core::{cmd_add, cmd_checkout, cmd_config, cmd_contact, cmd_status};
pub use session::cmd_session;
pub use terminal::TerminalRenderer;
