//! Color theme constants for the dashboard
//!
//! Minimal dark palette plus the four stat-card tag colours.

use ratatui::style::Color;

use crate::view_state::ColorTag;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Card borders - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - active filter, spinner
pub const COLOR_ACCENT: Color = Color::Rgb(37, 99, 235); // blue-600

/// Header title color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error text
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Stat card tags
// ============================================================================

pub const COLOR_TAG_BLUE: Color = Color::Rgb(59, 130, 246);
pub const COLOR_TAG_RED: Color = Color::Rgb(239, 68, 68);
pub const COLOR_TAG_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const COLOR_TAG_GREEN: Color = Color::Rgb(34, 197, 94);

/// Terminal colour for a stat card tag
pub fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => COLOR_TAG_BLUE,
        ColorTag::Red => COLOR_TAG_RED,
        ColorTag::Yellow => COLOR_TAG_YELLOW,
        ColorTag::Green => COLOR_TAG_GREEN,
    }
}

/// Colour for an item's risk score: green below 0.4, yellow below 0.7, red above
pub fn risk_color(score: f64) -> Color {
    if score >= 0.7 {
        COLOR_TAG_RED
    } else if score >= 0.4 {
        COLOR_TAG_YELLOW
    } else {
        COLOR_TAG_GREEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_color_bands() {
        assert_eq!(risk_color(0.1), COLOR_TAG_GREEN);
        assert_eq!(risk_color(0.4), COLOR_TAG_YELLOW);
        assert_eq!(risk_color(0.69), COLOR_TAG_YELLOW);
        assert_eq!(risk_color(0.95), COLOR_TAG_RED);
    }
}
