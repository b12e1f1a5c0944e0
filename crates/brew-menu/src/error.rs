//! Menu error types.
//!
//! Selection events never fail; these errors only come from the edges of the
//! engine: decoding catalog payloads, loading configuration, and opening a
//! session for a product that is not on offer.

use thiserror::Error;

/// Errors that can occur while loading menu data or opening a session.
#[derive(Error, Debug)]
pub enum MenuError {
    /// Product not found among the offered size variants.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A session was requested with no products to choose from.
    #[error("No products to customize")]
    NoProducts,

    /// Catalog payload could not be decoded.
    #[error("Failed to parse menu: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration could not be decoded.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
