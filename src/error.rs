//! Error types
//!
//! Fetch failures never reach the user, but they are kept typed so the app
//! layer can tell a failed catalog load apart from an empty one.

use thiserror::Error;

/// Why a call to the backend did not produce a usable value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection, DNS, TLS or body read failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-success status
    #[error("unexpected status: {0}")]
    Status(u16),

    /// Body was not the JSON shape we expected
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_connect() {
            FetchError::Transport(format!("connection failed: {}", err))
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Rejected selector input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("unknown brand: {0}")]
    UnknownBrand(String),

    #[error("{brand} has no model named {model}")]
    UnknownModel { brand: String, model: String },

    #[error("{0} GB is not offered for this device")]
    UnknownStorage(u32),
}

/// Configuration loading failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
