//! Smooth scrolling to in-page anchors.

/// Element id targeted by an in-page link, or `None` for `#` and
/// anything that is not a fragment link.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts the target just below the fixed header.
pub fn anchor_scroll_target(href: &str, target_offset_top: f64, header_height: f64) -> Option<f64> {
    anchor_id(href).map(|_| target_offset_top - header_height)
}
