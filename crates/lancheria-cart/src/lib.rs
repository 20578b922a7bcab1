//! Cart and checkout logic for the Lancheria landing page.
//!
//! This crate holds everything on the page that carries state or formats a
//! wire message:
//!
//! - **Cart**: ordered line items with a derived total and stable item ids
//! - **Render**: a pure projection of the cart for the list, total and badge
//! - **WhatsApp**: order message composition and `wa.me` deep links
//! - **Config**: store content and contact settings loaded from TOML
//!
//! # Example
//!
//! ```rust
//! use lancheria_cart::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add("X-Burger", Money::new(1050)).unwrap();
//! cart.add("Suco", Money::new(425)).unwrap();
//! assert_eq!(cart.total().display_amount(), "14.75");
//!
//! let link = cart.checkout(&WhatsAppSettings::default()).unwrap();
//! assert!(link.url().starts_with("https://wa.me/"));
//! ```

pub mod cart;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod render;
pub mod whatsapp;

pub use cart::{Cart, LineItem};
pub use error::{CartError, ConfigError};
pub use ids::LineItemId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, LineItem};
    pub use crate::config::{
        BusinessConfig, FaqEntry, MapConfig, MenuEntry, StoreConfig, WhatsAppSettings,
    };
    pub use crate::error::{CartError, ConfigError};
    pub use crate::ids::LineItemId;
    pub use crate::money::Money;
    pub use crate::render::{CartRow, CartView};
    pub use crate::whatsapp::{
        deep_link, maps_search_url, order_message, with_default_message, CheckoutLink,
    };
}
