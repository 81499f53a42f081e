//! Paint styles attached to scene geometry.

use serde::{Deserialize, Serialize};

/// Colours used by the scene. Any CSS colour string a renderer accepts works;
/// hex colours may carry a two-digit alpha suffix (see [`with_alpha`]).
pub mod palette {
    /// Fully transparent, the default for fill and stroke.
    pub const TRANSPARENT: &str = "#0000";
    pub const OCEAN: &str = "darkblue";
    pub const ICE: &str = "white";
    /// Device bodies and gamepad handles.
    pub const LAND_DARK: &str = "#143f27";
    /// Keys, buttons and sticks.
    pub const LAND_LIGHT: &str = "#2e8b57";
    pub const NIGHT_LINES: &str = "yellow";
    pub const NIGHT_SHADOW: &str = "#000a";
}

/// How a shape is painted.
///
/// The default draws nothing: fill and stroke are fully transparent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub fill: String,
    pub stroke: String,
    pub line_width: f64,
    pub shadow_color: String,
    pub shadow_blur: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: palette::TRANSPARENT.to_string(),
            stroke: palette::TRANSPARENT.to_string(),
            line_width: 1.0,
            shadow_color: "#000".to_string(),
            shadow_blur: 0.0,
        }
    }
}

impl Style {
    /// A style that only fills.
    pub fn filled(color: impl Into<String>) -> Self {
        Self::default().with_fill(color)
    }

    /// A style that only strokes.
    pub fn stroked(color: impl Into<String>) -> Self {
        Self::default().with_stroke(color)
    }

    pub fn with_fill(mut self, color: impl Into<String>) -> Self {
        self.fill = color.into();
        self
    }

    pub fn with_stroke(mut self, color: impl Into<String>) -> Self {
        self.stroke = color.into();
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_shadow(mut self, color: impl Into<String>, blur: f64) -> Self {
        self.shadow_color = color.into();
        self.shadow_blur = blur;
        self
    }
}

/// Append a two-hex-digit alpha channel to a `#rrggbb` colour.
pub fn with_alpha(color: &str, alpha: u8) -> String {
    format!("{color}{alpha:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_invisible() {
        let style = Style::default();
        assert_eq!(style.fill, "#0000");
        assert_eq!(style.stroke, "#0000");
        assert_eq!(style.line_width, 1.0);
        assert_eq!(style.shadow_color, "#000");
        assert_eq!(style.shadow_blur, 0.0);
    }

    #[test]
    fn test_filled_keeps_other_defaults() {
        let style = Style::filled(palette::LAND_DARK);
        assert_eq!(style.fill, "#143f27");
        assert_eq!(style.stroke, palette::TRANSPARENT);
    }

    #[test]
    fn test_alpha_suffix_is_zero_padded() {
        assert_eq!(with_alpha(palette::LAND_LIGHT, 0xff), "#2e8b57ff");
        assert_eq!(with_alpha(palette::LAND_LIGHT, 0x88), "#2e8b5788");
        assert_eq!(with_alpha(palette::LAND_LIGHT, 0), "#2e8b5700");
        assert_eq!(with_alpha(palette::LAND_LIGHT, 9), "#2e8b5709");
    }

    #[test]
    fn test_builder_setters() {
        let style = Style::stroked("yellow")
            .with_line_width(2.5)
            .with_shadow("#fff", 4.0);
        assert_eq!(style.stroke, "yellow");
        assert_eq!(style.line_width, 2.5);
        assert_eq!(style.shadow_color, "#fff");
        assert_eq!(style.shadow_blur, 4.0);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let style: Style = serde_json::from_str(r#"{"fill":"white"}"#).unwrap();
        assert_eq!(style, Style::filled("white"));
    }
}
