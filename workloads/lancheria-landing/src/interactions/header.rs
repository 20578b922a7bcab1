//! Header shadow on scroll.

/// Scroll offset (px) past which the header looks elevated.
pub const ELEVATION_THRESHOLD: f64 = 100.0;

pub const HEADER_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";
pub const HEADER_SHADOW_ELEVATED: &str = "0 4px 20px rgba(0, 0, 0, 0.15)";

/// Box shadow for the fixed header at a vertical scroll offset.
pub fn header_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > ELEVATION_THRESHOLD {
        HEADER_SHADOW_ELEVATED
    } else {
        HEADER_SHADOW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_shadow_threshold() {
        assert_eq!(header_shadow(0.0), HEADER_SHADOW);
        assert_eq!(header_shadow(100.0), HEADER_SHADOW);
        assert_eq!(header_shadow(100.5), HEADER_SHADOW_ELEVATED);
        assert_eq!(header_shadow(2400.0), HEADER_SHADOW_ELEVATED);
    }
}
