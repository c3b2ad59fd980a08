//! Configuration loading.
//!
//! Configuration is a TOML file in which every field is optional:
//!
//! ```toml
//! default_status = "Private"
//!
//! [storage]
//! key = "AddressBook"
//! dir = "/var/lib/address-book"
//!
//! [bootstrap]
//! enabled = true
//! endpoint = "https://randomuser.me/api/"
//! timeout_secs = 10
//! ```

pub mod error;

pub use error::ConfigError;

use crate::core::ContactStatus;
use crate::storage::STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default remote profile endpoint.
pub const DEFAULT_BOOTSTRAP_ENDPOINT: &str = "https://randomuser.me/api/";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const APP_DIR: &str = "address-book";
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Status filter active at startup
    pub default_status: ContactStatus,
    pub storage: StorageConfig,
    pub bootstrap: BootstrapConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key the contact list is stored under
    pub key: String,
    /// Directory of the file store; defaults to the platform data dir
    pub dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: STORAGE_KEY.to_string(),
            dir: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Fetch a profile when the stored list is empty
    pub enabled: bool,
    pub endpoint: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_BOOTSTRAP_ENDPOINT.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist. Other read errors and parse errors still fail.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// `<config_dir>/address-book/config.toml`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Directory for the file store: `storage.dir`, or
    /// `<data_dir>/address-book`.
    pub fn storage_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.storage.dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(ConfigError::NoDataDir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.storage.key, "AddressBook");
        assert_eq!(config.default_status, ContactStatus::Work);
        assert!(config.bootstrap.enabled);
        assert_eq!(config.bootstrap.endpoint, DEFAULT_BOOTSTRAP_ENDPOINT);
        assert_eq!(config.bootstrap.timeout_secs, Some(10));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            default_status = "Private"

            [bootstrap]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.default_status, ContactStatus::Private);
        assert!(!config.bootstrap.enabled);
        assert_eq!(config.bootstrap.endpoint, DEFAULT_BOOTSTRAP_ENDPOINT);
        assert_eq!(config.storage.key, "AddressBook");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = Config::from_toml_str(r#"default_status = "Home""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn explicit_storage_dir_wins() {
        let config = Config::from_toml_str(
            r#"
            [storage]
            key = "Contacts"
            dir = "/srv/address-book"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.key, "Contacts");
        assert_eq!(
            config.storage_dir().unwrap(),
            PathBuf::from("/srv/address-book")
        );
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[bootstrap]\ntimeout_secs = 3\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.bootstrap.timeout_secs, Some(3));
    }

    #[test]
    fn strict_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("absent.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
