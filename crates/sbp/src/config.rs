//! Configuration types for blueprint layout and styling.
//!
//! This module provides the configuration structures that control how
//! blueprints are laid out and styled. All types implement
//! [`serde::Deserialize`] so the CLI can load them from TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Spacing, box sizing, lane order and label wrapping.
//! - [`StyleConfig`] - Visual styling options such as colors.
//!
//! # Example
//!
//! ```
//! # use sbp::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert!(config.layout().lane_order().is_none());
//! ```

use serde::Deserialize;

use sbp_core::{color::Color, lane::Lane};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from the given sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout configuration for the blueprint grid.
///
/// All values have defaults and all are overridable, so a TOML config only
/// names what it changes. Spacing values are in abstract drawing units (the
/// SVG exporter maps them 1:1 to pixels).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Row order override. `None` uses [`Lane::CANONICAL_ORDER`].
    lane_order: Option<Vec<Lane>>,

    /// Minimum width of an action box.
    box_width: f32,

    /// Height of an action box; also the height of every lane row.
    box_height: f32,

    /// Horizontal gap between step columns.
    column_gap: f32,

    /// Vertical gap between lane rows.
    row_gap: f32,

    /// Horizontal gap between boxes stacked in the same cell.
    stack_gap: f32,

    /// Wrap labels longer than this many characters onto multiple lines.
    label_wrap_width: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lane_order: None,
            box_width: 120.0,
            box_height: 48.0,
            column_gap: 48.0,
            row_gap: 36.0,
            stack_gap: 12.0,
            label_wrap_width: None,
        }
    }
}

impl LayoutConfig {
    /// Creates a layout configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the lane row order (builder style).
    pub fn with_lane_order(mut self, order: Vec<Lane>) -> Self {
        self.lane_order = Some(order);
        self
    }

    /// Sets the minimum action box width (builder style).
    pub fn with_box_width(mut self, width: f32) -> Self {
        self.box_width = width;
        self
    }

    /// Sets the action box height (builder style).
    pub fn with_box_height(mut self, height: f32) -> Self {
        self.box_height = height;
        self
    }

    /// Sets the gap between step columns (builder style).
    pub fn with_column_gap(mut self, gap: f32) -> Self {
        self.column_gap = gap;
        self
    }

    /// Sets the gap between lane rows (builder style).
    pub fn with_row_gap(mut self, gap: f32) -> Self {
        self.row_gap = gap;
        self
    }

    /// Sets the gap between boxes sharing one cell (builder style).
    pub fn with_stack_gap(mut self, gap: f32) -> Self {
        self.stack_gap = gap;
        self
    }

    /// Enables label wrapping at the given character width (builder style).
    pub fn with_label_wrap_width(mut self, width: usize) -> Self {
        self.label_wrap_width = Some(width);
        self
    }

    /// Returns the configured lane order override, if any.
    pub fn lane_order(&self) -> Option<&[Lane]> {
        self.lane_order.as_deref()
    }

    /// Returns the minimum action box width.
    pub fn box_width(&self) -> f32 {
        self.box_width
    }

    /// Returns the action box height.
    pub fn box_height(&self) -> f32 {
        self.box_height
    }

    /// Returns the gap between step columns.
    pub fn column_gap(&self) -> f32 {
        self.column_gap
    }

    /// Returns the gap between lane rows.
    pub fn row_gap(&self) -> f32 {
        self.row_gap
    }

    /// Returns the gap between boxes sharing one cell.
    pub fn stack_gap(&self) -> f32 {
        self.stack_gap
    }

    /// Returns the label wrap width, if wrapping is enabled.
    pub fn label_wrap_width(&self) -> Option<usize> {
        self.label_wrap_width
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are stored as CSS color strings and validated when read, so a
/// typo in a config file fails before any output is written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color for the whole document.
    background_color: Option<String>,

    /// Fill color for the lane row bands.
    band_color: Option<String>,

    /// Stroke color for boxes and connectors.
    stroke_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background color, or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid CSS
    /// color.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        Self::parse_color(self.background_color.as_deref(), "background color")
    }

    /// Returns the parsed lane band color, or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid CSS
    /// color.
    pub fn band_color(&self) -> Result<Option<Color>, String> {
        Self::parse_color(self.band_color.as_deref(), "band color")
    }

    /// Returns the parsed stroke color, defaulting to black.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid CSS
    /// color.
    pub fn stroke_color(&self) -> Result<Color, String> {
        Ok(Self::parse_color(self.stroke_color.as_deref(), "stroke color")?
            .unwrap_or_default())
    }

    fn parse_color(value: Option<&str>, what: &str) -> Result<Option<Color>, String> {
        value
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("invalid {what} in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();

        assert!(layout.lane_order().is_none());
        assert_eq!(layout.box_width(), 120.0);
        assert_eq!(layout.box_height(), 48.0);
        assert!(layout.label_wrap_width().is_none());
    }

    #[test]
    fn test_layout_builders() {
        let layout = LayoutConfig::new()
            .with_lane_order(vec![Lane::Process, Lane::Customer])
            .with_box_width(80.0)
            .with_label_wrap_width(14);

        assert_eq!(layout.lane_order(), Some([Lane::Process, Lane::Customer].as_slice()));
        assert_eq!(layout.box_width(), 80.0);
        assert_eq!(layout.label_wrap_width(), Some(14));
    }

    #[test]
    fn test_style_color_validation() {
        let style = StyleConfig {
            background_color: Some("white".to_string()),
            band_color: Some("no such color".to_string()),
            stroke_color: None,
        };

        assert!(style.background_color().unwrap().is_some());
        assert!(style.band_color().is_err());
        assert!(style.stroke_color().is_ok());
    }
}
