//! Lancheria landing page - client-side interactivity.
//!
//! This workload demonstrates:
//! - An in-memory cart with WhatsApp checkout
//! - Mobile navigation, FAQ accordion and smooth anchor scrolling
//! - Header elevation and entrance animations driven by scroll
//!
//! The interaction state lives in [`interactions`] and builds on any target.
//! The Leptos page is compiled only with `--features web` on wasm32.

pub mod content;
pub mod interactions;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
