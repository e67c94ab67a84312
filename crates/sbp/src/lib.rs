//! sbp - A text DSL for generating service blueprint swimlane diagrams.
//!
//! Parsing, layout and SVG rendering for service blueprints: each input line
//! is one step, each step a chain of lane-tagged actions joined by one-way
//! (`/`), two-way (`//`) or invisible (`|`) connectors.

pub mod config;
pub mod layout;

mod error;
mod export;

pub use sbp_core::{blueprint, color, geometry, lane, scene};

pub use error::SbpError;
pub use layout::LayoutError;

use log::{debug, info};

use config::AppConfig;
use export::svg::SvgBuilder;

/// Facade for processing blueprints through parsing, layout and rendering.
///
/// # Examples
///
/// ```
/// use sbp::{BlueprintBuilder, config::AppConfig};
///
/// let source = "Order:C Click order/F Confirm/B Reserve stock";
///
/// let builder = BlueprintBuilder::new(AppConfig::default());
/// let blueprint = builder.parse(source).expect("valid source");
/// let scene = builder.layout(&blueprint).expect("layout succeeds");
/// let svg = builder.render_svg(&scene).expect("render succeeds");
///
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct BlueprintBuilder {
    config: AppConfig,
}

impl BlueprintBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse blueprint source text into a semantic [`blueprint::Blueprint`].
    ///
    /// # Errors
    ///
    /// Returns [`SbpError::Parse`] carrying one diagnostic per malformed
    /// line, alongside the source text for rich reporting.
    pub fn parse(&self, source: &str) -> Result<blueprint::Blueprint, SbpError> {
        info!("Parsing blueprint");

        let blueprint = sbp_parser::parse(source)
            .map_err(|err| SbpError::new_parse_error(err, source))?;

        debug!("Blueprint parsed successfully");
        Ok(blueprint)
    }

    /// Lay out a parsed blueprint into a positioned [`scene::Scene`].
    ///
    /// The layout is a pure function of the blueprint and the configured
    /// [`config::LayoutConfig`]; identical inputs produce bit-identical
    /// scenes.
    ///
    /// # Errors
    ///
    /// Returns [`SbpError::Layout`] if a custom lane order omits a
    /// referenced lane.
    pub fn layout(&self, blueprint: &blueprint::Blueprint) -> Result<scene::Scene, SbpError> {
        info!("Laying out blueprint");

        let scene = layout::layout(blueprint, self.config.layout())?;

        debug!(
            boxes_count = scene.boxes().len(),
            connectors_count = scene.connectors().len();
            "Layout calculated"
        );
        Ok(scene)
    }

    /// Render a laid-out scene to an SVG document string.
    ///
    /// # Errors
    ///
    /// Returns [`SbpError::Export`] if the configured style is invalid.
    pub fn render_svg(&self, scene: &scene::Scene) -> Result<String, SbpError> {
        let exporter = SvgBuilder::new().with_style(self.config.style()).build()?;
        let rendered = exporter.export_scene(scene);

        info!("SVG rendered successfully");
        Ok(rendered)
    }
}
