//! Keyboard activation for elements acting as links.

/// Whether a `KeyboardEvent.key` value should follow a `role="link"`
/// element, the way Enter follows an anchor. Space is accepted too since
/// the map placeholder reads as a button.
pub fn activates_link(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
