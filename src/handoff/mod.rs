//! Order handoff to the external messaging application.
//!
//! The only outbound interface of the system: a pre-formatted deep link
//! opened in an external browsing context.

mod whatsapp;

pub use whatsapp::{BrowserOpener, LinkOpener, RecordingOpener, WhatsAppLink};
