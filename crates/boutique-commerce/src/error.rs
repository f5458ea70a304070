//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and catalog operations.
///
/// Unknown products, missing or corrupt stored carts and quantity underflow
/// are defined behavior, not errors; see [`crate::cart::CartStore`].
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A product id could not be parsed.
    #[error("Invalid product id: {0:?}")]
    InvalidProductId(String),

    /// Writing the cart to storage failed.
    #[error("Cache error: {0}")]
    CacheError(String),
}

impl From<boutique_cache::CacheError> for CommerceError {
    fn from(e: boutique_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}
