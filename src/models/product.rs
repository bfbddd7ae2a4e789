//! Product name type.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a product as displayed on the storefront.
///
/// Always non-empty: construction trims surrounding whitespace and rejects
/// names that are empty afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Creates a new product name.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput(
                "product name cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ProductName {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_product_name_trims_whitespace() {
        let name = ProductName::new("  Thiakry  ").unwrap();
        assert_eq!(name.as_str(), "Thiakry");
    }

    #[test]
    fn test_product_name_rejects_empty() {
        assert!(ProductName::new("").is_err());
        assert!(ProductName::new("   ").is_err());
    }

    #[test]
    fn test_product_name_display() {
        let name = ProductName::new("Ndambé").unwrap();
        assert_eq!(name.to_string(), "Ndambé");
    }
}
