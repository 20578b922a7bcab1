//! Cart and line item types.

use crate::config::WhatsAppSettings;
use crate::error::CartError;
use crate::ids::LineItemId;
use crate::money::Money;
use crate::whatsapp::{self, CheckoutLink};
use serde::{Deserialize, Serialize};

/// A shopping cart for one page session.
///
/// The total is always computed from the items, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
    next_id: LineItemId,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: LineItemId::new(1),
        }
    }

    /// Append an item to the end of the cart.
    ///
    /// Returns an error if:
    /// - The price is negative
    /// - The new total would overflow
    ///
    /// Every accepted price is non-negative and the running total fits, so
    /// the total of any subset of items fits as well.
    pub fn add(&mut self, name: impl Into<String>, price: Money) -> Result<LineItemId, CartError> {
        if price.is_negative() {
            tracing::warn!(price = %price, "rejected negative price");
            return Err(CartError::NegativePrice(price));
        }
        if self.total().checked_add(price).is_none() {
            tracing::warn!(price = %price, "rejected price that overflows the total");
            return Err(CartError::Overflow);
        }

        let id = self.next_id;
        self.next_id = id.next();

        let item = LineItem {
            id,
            name: name.into(),
            price,
        };
        tracing::debug!(item_id = %id, name = %item.name, price = %price, "item added to cart");
        self.items.push(item);
        Ok(id)
    }

    /// Remove the item at a zero-based position.
    ///
    /// Later items shift down by one. An index past the end leaves the cart
    /// untouched and returns `OutOfRange`.
    pub fn remove_at(&mut self, index: usize) -> Result<LineItem, CartError> {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "remove index out of range");
            return Err(CartError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(index);
        tracing::debug!(item_id = %removed.id, index, remaining = self.items.len(), "item removed from cart");
        Ok(removed)
    }

    /// Remove an item by its stable id.
    pub fn remove_item(&mut self, id: &LineItemId) -> Result<LineItem, CartError> {
        match self.position(id) {
            Some(index) => self.remove_at(index),
            None => {
                tracing::warn!(item_id = %id, "remove of unknown item");
                Err(CartError::ItemNotInCart(*id))
            }
        }
    }

    /// Remove every item. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
    }

    /// Sum of the prices of all present items.
    pub fn total(&self) -> Money {
        // `add` keeps this sum within range
        Money::new(
            self.items
                .iter()
                .map(|i| i.price.amount_cents)
                .fold(0, i64::saturating_add),
        )
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by ID.
    pub fn get_item(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Current position of an item.
    pub fn position(&self, id: &LineItemId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }

    /// Build the WhatsApp checkout link for the current contents.
    ///
    /// Does not clear the cart; the same order can be sent again.
    pub fn checkout(&self, settings: &WhatsAppSettings) -> Result<CheckoutLink, CartError> {
        if self.is_empty() {
            tracing::warn!("checkout attempted with empty cart");
            return Err(CartError::EmptyCart);
        }

        let message = whatsapp::order_message(self, &settings.order_greeting);
        let link = whatsapp::deep_link(&settings.number, &message)?;
        tracing::info!(
            items = self.items.len(),
            total = %self.total(),
            "checkout link built"
        );
        Ok(CheckoutLink::new(link, message))
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Stable identifier.
    pub id: LineItemId,
    /// Display label.
    pub name: String,
    /// Price.
    pub price: Money,
}

impl LineItem {
    /// Row text used on the page and in the order message.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.price.display())
    }
}
