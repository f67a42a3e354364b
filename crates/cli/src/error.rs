//! Errors surfaced by the command-line front end.
//!
//! Cart operations themselves never fail; these cover user input, output and
//! configuration.

use menulink_core::PriceError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A price argument was rejected.
    #[error("Invalid price: {0}")]
    Price(#[from] PriceError),

    /// An item ID argument was empty.
    #[error("Item id cannot be empty")]
    EmptyId,

    /// Checkout was requested for an empty cart.
    #[error("Cart is empty, nothing to order")]
    EmptyCart,

    /// The WhatsApp number contains no digits.
    #[error("Invalid WhatsApp number: {0}")]
    InvalidWhatsApp(String),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
