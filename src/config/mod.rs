//! Configuration management.

use crate::models::NotificationTimings;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default store display name used in the order message header.
const DEFAULT_STORE_NAME: &str = "Sen Ndou Ndougou";

/// Default order recipient, international format.
const DEFAULT_RECIPIENT: &str = "221778902001";

/// Main configuration for comptoir.
#[derive(Debug, Clone)]
pub struct ComptoirConfig {
    /// Profile directory holding the persisted cart.
    pub data_dir: PathBuf,
    /// Storefront identity.
    pub store: StoreInfo,
    /// Notification lifecycle delays.
    pub notifications: NotificationTimings,
    /// Logging settings.
    pub logging: Option<LoggingSettings>,
}

/// Storefront identity used in order messages and the deep link.
#[derive(Debug, Clone)]
pub struct StoreInfo {
    /// Display name rendered into the order message header.
    pub name: String,
    /// WhatsApp recipient identifier (phone number, international format).
    pub whatsapp_recipient: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_STORE_NAME.to_string(),
            whatsapp_recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

/// Logging section of the configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingSettings {
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Level filter expression (`tracing` env-filter syntax).
    pub filter: Option<String>,
    /// Log file path; stderr when absent.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Profile data directory.
    pub data_dir: Option<String>,
    /// Store section.
    pub store: Option<ConfigFileStore>,
    /// Notifications section.
    pub notifications: Option<ConfigFileNotifications>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

/// Store section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileStore {
    /// Display name.
    pub name: Option<String>,
    /// WhatsApp recipient identifier.
    pub whatsapp_recipient: Option<String>,
}

/// Notifications section in config file, delays in milliseconds.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileNotifications {
    /// Reveal delay.
    pub reveal_ms: Option<u64>,
    /// Visible duration for item-added notifications.
    pub item_added_ms: Option<u64>,
    /// Visible duration for contact-accepted notifications.
    pub contact_ms: Option<u64>,
    /// Visible duration for empty-cart notices.
    pub empty_cart_ms: Option<u64>,
    /// Fade duration.
    pub fade_ms: Option<u64>,
}

impl Default for ComptoirConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store: StoreInfo::default(),
            notifications: NotificationTimings::default(),
            logging: None,
        }
    }
}

impl ComptoirConfig {
    /// Loads configuration from the default location, falling back to
    /// defaults when no config file exists.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from_file(&path).unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable config file {}: {e}", path.display());
            Self::default()
        })
    }

    /// Loads configuration from an explicit TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {}", path.display(), e),
        })?;

        let file: ConfigFile = toml::from_str(&raw).map_err(|e| {
            Error::InvalidInput(format!("malformed config file {}: {e}", path.display()))
        })?;

        Ok(Self::from_file(file))
    }

    /// Resolves a parsed config file against defaults.
    #[must_use]
    pub fn from_file(file: ConfigFile) -> Self {
        let defaults = Self::default();
        let store_defaults = StoreInfo::default();
        let timing_defaults = NotificationTimings::default();

        let store = file.store.map_or_else(StoreInfo::default, |s| StoreInfo {
            name: s.name.unwrap_or(store_defaults.name),
            whatsapp_recipient: s
                .whatsapp_recipient
                .unwrap_or(store_defaults.whatsapp_recipient),
        });

        let notifications =
            file.notifications
                .map_or(timing_defaults, |n| NotificationTimings {
                    reveal: millis_or(n.reveal_ms, timing_defaults.reveal),
                    item_added_visible: millis_or(
                        n.item_added_ms,
                        timing_defaults.item_added_visible,
                    ),
                    contact_visible: millis_or(n.contact_ms, timing_defaults.contact_visible),
                    empty_cart_visible: millis_or(
                        n.empty_cart_ms,
                        timing_defaults.empty_cart_visible,
                    ),
                    fade: millis_or(n.fade_ms, timing_defaults.fade),
                });

        Self {
            data_dir: file.data_dir.map_or(defaults.data_dir, PathBuf::from),
            store,
            notifications,
            logging: file.logging,
        }
    }
}

fn millis_or(value: Option<u64>, fallback: Duration) -> Duration {
    value.map_or(fallback, Duration::from_millis)
}

/// Returns the default profile data directory.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "comptoir").map_or_else(
        || PathBuf::from(".comptoir"),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Returns the default config file path, when a config directory exists.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "comptoir")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComptoirConfig::default();
        assert_eq!(config.store.name, "Sen Ndou Ndougou");
        assert_eq!(config.store.whatsapp_recipient, "221778902001");
        assert_eq!(
            config.notifications.item_added_visible,
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn test_from_file_overrides() {
        let file: ConfigFile = toml::from_str(
            r#"
            data_dir = "/tmp/comptoir-test"

            [store]
            name = "Comptoir Test"

            [notifications]
            item_added_ms = 1500
            "#,
        )
        .unwrap();

        let config = ComptoirConfig::from_file(file);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/comptoir-test"));
        assert_eq!(config.store.name, "Comptoir Test");
        // Untouched fields keep their defaults.
        assert_eq!(config.store.whatsapp_recipient, "221778902001");
        assert_eq!(
            config.notifications.item_added_visible,
            Duration::from_millis(1500)
        );
        assert_eq!(config.notifications.fade, Duration::from_millis(300));
    }

    #[test]
    fn test_malformed_file_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            ComptoirConfig::load_from_file(&path),
            Err(Error::InvalidInput(_))
        ));
    }
}
