//! Configuration management for the contact assistant.
//!
//! All settings come from environment variables (with `.env` support via
//! `dotenvy`) and every one has a default, so a bare `contact-assistant`
//! invocation works out of the box.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON data file (default: data.json)
    pub data_file: PathBuf,

    /// Log level used when RUST_LOG is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_DATA_FILE`: path of the JSON data file (default: data.json)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, without failing when it is absent.
        let _ = dotenvy::dotenv();

        let data_file = env::var("ASSISTANT_DATA_FILE").unwrap_or_else(|_| "data.json".to_string());
        if data_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_DATA_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file: PathBuf::from(data_file),
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("data.json"),
            log_level: "error".to_string(),
        }
    }
}
