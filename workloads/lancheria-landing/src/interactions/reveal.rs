//! Entrance animation when a card scrolls into view.

use std::time::Duration;

/// Share of an element that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay before the first visibility pass after mount, so cards already on
/// screen animate without waiting for a scroll.
pub const INITIAL_REVEAL_DELAY: Duration = Duration::from_millis(100);

pub const HIDDEN_STYLE: &str = "opacity: 0; transform: translateY(30px);";
pub const REVEALED_STYLE: &str = "opacity: 1; transform: translateY(0);";
pub const REVEAL_TRANSITION: &str = "transition: opacity 0.6s ease, transform 0.6s ease;";

/// Fraction of an element's height inside a viewport starting at 0.
///
/// `top` is the element's top relative to the viewport, as reported by
/// `getBoundingClientRect`.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return if (0.0..=viewport_height).contains(&top) { 1.0 } else { 0.0 };
    }

    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Reveal state of a single element. Once revealed it stays revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed a new measurement. Returns true when this call revealed it.
    pub fn observe(&mut self, top: f64, height: f64, viewport_height: f64) -> bool {
        if self.revealed {
            return false;
        }
        if visible_fraction(top, height, viewport_height) >= REVEAL_THRESHOLD {
            self.revealed = true;
            return true;
        }
        false
    }

    /// Inline style for the element's current state.
    pub fn style(&self) -> String {
        let state = if self.revealed { REVEALED_STYLE } else { HIDDEN_STYLE };
        format!("{} {}", state, REVEAL_TRANSITION)
    }
}
