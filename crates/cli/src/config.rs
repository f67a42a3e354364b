//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MENULINK_DATA_DIR` - Directory holding the local cart storage (default: .menulink)
//! - `MENULINK_CURRENCY` - Display currency code (default: INR)
//! - `MENULINK_PAGE_SIZE` - Menu items revealed per page (default: 10)
//!
//! Command-line flags take precedence over these values.

use std::path::PathBuf;

use menulink_cart::DEFAULT_PAGE_SIZE;
use menulink_core::CurrencyCode;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".menulink";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory of the file-backed key-value store
    pub data_dir: PathBuf,
    /// Currency used when displaying prices
    pub currency: CurrencyCode,
    /// Menu pager page size
    pub page_size: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            currency: CurrencyCode::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = get("MENULINK_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);

        let currency = match get("MENULINK_CURRENCY") {
            Some(value) => value
                .parse::<CurrencyCode>()
                .map_err(|e| ConfigError::InvalidEnvVar("MENULINK_CURRENCY".to_string(), e))?,
            None => defaults.currency,
        };

        let page_size = match get("MENULINK_PAGE_SIZE") {
            Some(value) => parse_page_size(&value)
                .map_err(|e| ConfigError::InvalidEnvVar("MENULINK_PAGE_SIZE".to_string(), e))?,
            None => defaults.page_size,
        };

        Ok(Self {
            data_dir,
            currency,
            page_size,
        })
    }
}

/// Parse a page size, which must be a positive integer.
pub fn parse_page_size(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}
