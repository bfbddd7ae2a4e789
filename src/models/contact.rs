//! Contact form submission.

/// A submission from the storefront contact form.
///
/// Submissions are acknowledged with a success notification and logged; they
/// are not delivered or stored anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Sender name, if provided.
    pub name: Option<String>,
    /// Sender email, if provided.
    pub email: Option<String>,
    /// Message body.
    pub message: String,
}

impl ContactSubmission {
    /// Creates a submission with just a message body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            name: None,
            email: None,
            message: message.into(),
        }
    }

    /// Sets the sender name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the sender email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
