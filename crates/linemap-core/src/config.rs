// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Settings service and storage port.
//!
//! Only viewer settings are stored; drawings never outlive a session.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::settings::{ViewerSettings, SETTINGS_KEY};

/// Storage port for raw JSON blobs keyed by logical name.
pub trait ConfigStore {
    /// Load a raw blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw blob, replacing any previous one.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;

    /// Whether a blob is stored under `key`.
    fn contains(&self, key: &str) -> Result<bool, ConfigError> {
        match self.load_raw(key) {
            Ok(_) => Ok(true),
            Err(ConfigError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// Refused to overwrite an existing entry.
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(String),
    /// No platform config directory could be determined.
    #[error("could not resolve config dir")]
    NoConfigDir,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Serializes settings as JSON and delegates storage to a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load `key`. Missing or blank blobs yield `Ok(None)`.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        let bytes = match self.store.load_raw(key) {
            Ok(bytes) => bytes,
            Err(ConfigError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Store `value` under `key` as pretty JSON.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }

    /// Viewer settings, or defaults when none are stored.
    pub fn viewer_settings(&self) -> Result<ViewerSettings, ConfigError> {
        Ok(self.load(SETTINGS_KEY)?.unwrap_or_default())
    }

    /// Write default viewer settings. Without `force`, existing settings are
    /// left alone and `AlreadyExists` is returned.
    pub fn init_viewer_settings(&self, force: bool) -> Result<ViewerSettings, ConfigError> {
        if !force && self.store.contains(SETTINGS_KEY)? {
            return Err(ConfigError::AlreadyExists(SETTINGS_KEY.into()));
        }
        let settings = ViewerSettings::default();
        self.save(SETTINGS_KEY, &settings)?;
        Ok(settings)
    }
}
