//! Listing error types.

use thiserror::Error;

/// Errors raised by listing interactions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// The add-to-cart control is disabled for this product.
    #[error("Product {0} is out of stock")]
    OutOfStock(u64),

    /// A pagination control that is not shown was activated.
    #[error("The {0} control is hidden on this page")]
    ControlHidden(&'static str),

    /// A submitted product payload could not be decoded.
    #[error("Invalid item payload: {0}")]
    InvalidItem(String),
}

impl From<serde_json::Error> for ListingError {
    fn from(e: serde_json::Error) -> Self {
        ListingError::InvalidItem(e.to_string())
    }
}
