//! Stable line item identifiers.
//!
//! A position in the cart shifts whenever an earlier item is removed, so
//! removal controls carry a `LineItemId` instead of an index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "item-";

/// Identifier assigned to a line item when it is added to a cart.
///
/// Ids come from a per-cart counter and are never reused by that cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineItemId(u64);

impl LineItemId {
    /// Create an ID from its raw sequence number.
    pub fn new(seq: u64) -> Self {
        Self(seq)
    }

    /// Get the raw sequence number.
    pub fn seq(&self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub(crate) fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.0)
    }
}

impl FromStr for LineItemId {
    type Err = std::num::ParseIntError;

    /// Parse the `item-<n>` form written into `data-item-id` attributes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(PREFIX).unwrap_or(s).parse().map(Self)
    }
}
