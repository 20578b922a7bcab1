//! Page interaction state.
//!
//! Each model here is the state behind one DOM behavior, kept free of
//! browser types so it can be tested natively. The `web` module binds them
//! to events.

mod anchor;
mod faq;
mod header;
mod keys;
mod nav;
mod reveal;

pub use anchor::*;
pub use faq::*;
pub use header::*;
pub use keys::*;
pub use nav::*;
pub use reveal::*;

/// CSS class that marks an open menu, toggle or FAQ item.
pub const ACTIVE_CLASS: &str = "active";
