//! Configuration loading for the monitor.
//!
//! The configuration is a single JSON document:
//!
//! ```json
//! {
//!     "websites": { "<site-name>": "<url>" },
//!     "sender": { "account": "...", "password": "...", "host": "..." },
//!     "recipients": ["a@example.com"]
//! }
//! ```
//!
//! `sender` and `recipients` are only required when mail delivery is
//! requested.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// SMTP account used to send the summary email. Opaque pass-through from
/// configuration to the notifier.
#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    pub account: String,
    pub password: String,
    pub host: String,
}

/// Full monitor configuration.
///
/// `websites` is a `BTreeMap` so that iteration is sorted by site name,
/// independent of key order in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub websites: BTreeMap<String, String>,
    #[serde(default)]
    pub sender: Option<Sender>,
    #[serde(default)]
    pub recipients: Vec<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Cannot read config file: {}", e),
            ConfigError::Json(e) => write!(f, "Cannot parse config file: {}", e),
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }
}
