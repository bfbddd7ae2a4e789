//! WhatsApp deep-link construction and opening.

use crate::{Error, Result};
use std::fmt;
use std::sync::Mutex;

/// Base URL of the WhatsApp click-to-chat service.
const BASE_URL: &str = "https://wa.me";

/// A constructed WhatsApp deep link carrying a pre-filled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    url: String,
}

impl WhatsAppLink {
    /// Builds a deep link for a recipient with the message percent-encoded as
    /// the `text` query value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the recipient identifier is empty.
    pub fn new(recipient: &str, message: &str) -> Result<Self> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(Error::InvalidInput(
                "recipient identifier cannot be empty".to_string(),
            ));
        }

        let encoded = urlencoding::encode(message);
        Ok(Self {
            url: format!("{BASE_URL}/{recipient}?text={encoded}"),
        })
    }

    /// Returns the full URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for WhatsAppLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Trait for opening a deep link in an external browsing context.
pub trait LinkOpener: Send + Sync {
    /// Opens the link.
    ///
    /// # Errors
    ///
    /// Returns an error if the link could not be handed to the environment.
    fn open(&self, link: &WhatsAppLink) -> Result<()>;
}

/// Opens deep links in the system browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl BrowserOpener {
    /// Creates a new browser opener.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LinkOpener for BrowserOpener {
    fn open(&self, link: &WhatsAppLink) -> Result<()> {
        webbrowser::open(link.as_str()).map_err(|e| Error::OperationFailed {
            operation: "open_deep_link".to_string(),
            cause: e.to_string(),
        })
    }
}

/// Records opened links instead of launching anything. Test fake.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<WhatsAppLink>>,
}

impl RecordingOpener {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the links opened so far.
    #[must_use]
    pub fn opened(&self) -> Vec<WhatsAppLink> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, link: &WhatsAppLink) -> Result<()> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(link.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_link_layout() {
        let link = WhatsAppLink::new("221778902001", "bonjour").unwrap();
        assert_eq!(link.as_str(), "https://wa.me/221778902001?text=bonjour");
    }

    #[test]
    fn test_message_is_percent_encoded() {
        let link = WhatsAppLink::new("221778902001", "deux mots\nsur deux lignes").unwrap();
        assert!(link.as_str().contains("deux%20mots%0Asur%20deux%20lignes"));
    }

    #[test]
    fn test_encoded_text_round_trips() {
        let message = "🌿 *Nouvelle Commande*\n\n• Tea x1";
        let link = WhatsAppLink::new("221778902001", message).unwrap();
        let encoded = link.as_str().split("?text=").nth(1).unwrap();
        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_empty_recipient_rejected() {
        assert!(WhatsAppLink::new("  ", "msg").is_err());
    }

    #[test]
    fn test_recording_opener() {
        let opener = RecordingOpener::new();
        let link = WhatsAppLink::new("221778902001", "msg").unwrap();
        opener.open(&link).unwrap();
        assert_eq!(opener.opened(), vec![link]);
    }
}
