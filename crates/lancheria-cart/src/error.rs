//! Cart and configuration error types.

use thiserror::Error;

use crate::ids::LineItemId;
use crate::money::Money;

/// Errors that can occur in cart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Checkout attempted with no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Positional removal outside the current sequence.
    #[error("Index {index} out of range for cart with {len} items")]
    OutOfRange { index: usize, len: usize },

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(LineItemId),

    /// Prices are never below zero.
    #[error("Negative price: {0}")]
    NegativePrice(Money),

    /// Arithmetic overflow in the cart total.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Deep link could not be built.
    #[error("Invalid link: {0}")]
    InvalidLink(String),
}

impl From<url::ParseError> for CartError {
    fn from(e: url::ParseError) -> Self {
        CartError::InvalidLink(e.to_string())
    }
}

/// Errors that can occur while loading store configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML document failed to parse.
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed config violates a store rule.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
