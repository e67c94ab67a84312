//! Color handling for blueprint diagrams.
//!
//! This module provides the [`Color`] type, a thin wrapper around the
//! `color` crate's `DynamicColor` that parses CSS color strings and converts
//! them into SVG attribute values.

use std::str::FromStr;

use color::DynamicColor;

/// A parsed CSS color.
///
/// Accepts any CSS color syntax: `"#1f77b4"`, `"rgb(31, 119, 180)"`,
/// `"steelblue"`, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parse a CSS color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use sbp_core::color::Color;
    ///
    /// let band = Color::new("#eef3f8").unwrap();
    /// let stroke = Color::new("slategray").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha component of this color, 0.0 (transparent) to 1.0
    /// (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns a sanitized string usable as an SVG element id.
    ///
    /// Marker definitions are deduplicated per color, so the id must be
    /// stable for a given color and contain only id-safe characters.
    pub fn to_id_safe_string(self) -> String {
        let mut sanitized = self
            .to_string()
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', '.', '%', ';'], "_");

        // SVG ids must not start with a digit
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_and_named() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("red").is_ok());
        assert!(Color::new("rgb(31, 119, 180)").is_ok());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::new("definitely not a color").is_err());
    }

    #[test]
    fn test_default_is_opaque_black() {
        let color = Color::default();
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_id_safe_string() {
        let id = Color::new("#ff8000").unwrap().to_id_safe_string();
        assert!(!id.contains('#'));
        assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
        assert!(!id.chars().next().unwrap().is_ascii_digit());
    }

    #[test]
    fn test_id_safe_string_is_stable() {
        let a = Color::new("steelblue").unwrap().to_id_safe_string();
        let b = Color::new("steelblue").unwrap().to_id_safe_string();
        assert_eq!(a, b);
    }
}
