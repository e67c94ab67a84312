//! SVG rendering for laid-out scenes.
//!
//! [`SvgBuilder`] validates the style configuration up front, so a bad color
//! in a config file fails before any drawing happens; the resulting [`Svg`]
//! exporter maps a [`Scene`] onto an in-memory SVG document.
//!
//! Drawing order is background, lane bands and names, step names, connector
//! lines, then boxes with their labels, so connectors tuck under the box
//! edges they touch.

use svg::{
    Document,
    node::{Text as SvgText, element as svg_element},
};

use sbp_core::{
    blueprint::ConnectorKind,
    color::Color,
    geometry::{Bounds, Insets, Point},
    scene::Scene,
};

use crate::{config::StyleConfig, export::Error};

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE: u16 = 12;
const LINE_HEIGHT: f32 = 14.0;
/// Gap between the lane name gutter and the first column.
const GUTTER_GAP: f32 = 16.0;
/// Vertical space reserved above the grid for step names.
const HEADER_HEIGHT: f32 = 30.0;
/// Per-character width estimate for the lane name gutter.
const GLYPH_WIDTH: f32 = 7.2;

/// Builder for the SVG exporter.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a style configuration (builder style).
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Validate the style and build the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`] if a configured color cannot be parsed.
    pub fn build(self) -> Result<Svg, Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        Ok(Svg {
            background: style.background_color().map_err(Error::Style)?,
            band: style.band_color().map_err(Error::Style)?,
            stroke: style.stroke_color().map_err(Error::Style)?,
        })
    }
}

/// The SVG exporter with validated style values.
#[derive(Debug)]
pub struct Svg {
    background: Option<Color>,
    band: Option<Color>,
    stroke: Color,
}

impl Svg {
    /// Render a scene to an SVG document string.
    pub fn export_scene(&self, scene: &Scene) -> String {
        // The gutter holds the lane names to the left of the grid.
        let gutter = scene
            .lane_rows()
            .iter()
            .map(|row| row.lane().name().chars().count())
            .max()
            .unwrap_or(0) as f32
            * GLYPH_WIDTH
            + GUTTER_GAP;

        // Content origin within the document.
        let margin = Insets::uniform(24.0);
        let origin = Point::new(margin.left() + gutter, margin.top() + HEADER_HEIGHT);
        let doc_width = origin.x() + scene.size().width() + margin.right();
        let doc_height = origin.y() + scene.size().height() + margin.bottom();

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {doc_width} {doc_height}"))
            .set("width", doc_width)
            .set("height", doc_height);

        if let Some(background) = &self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0.0)
                    .set("y", 0.0)
                    .set("width", doc_width)
                    .set("height", doc_height)
                    .set("fill", background)
                    .set("fill-opacity", background.alpha()),
            );
        }

        doc = doc.add(self.marker_definitions());
        doc = self.render_lanes(doc, scene, origin, margin, doc_width);
        doc = self.render_step_names(doc, scene, origin);
        doc = self.render_connectors(doc, scene, origin);
        doc = self.render_boxes(doc, scene, origin);

        doc.to_string()
    }

    /// Arrowhead marker definitions, one pair per stroke color.
    fn marker_definitions(&self) -> svg_element::Definitions {
        let color_id = self.stroke.to_id_safe_string();

        let head = svg_element::Marker::new()
            .set("id", format!("arrow-head-{color_id}"))
            .set("markerWidth", 10)
            .set("markerHeight", 10)
            .set("refX", 9)
            .set("refY", 5)
            .set("orient", "auto")
            .set("markerUnits", "userSpaceOnUse")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", &self.stroke),
            );

        let tail = svg_element::Marker::new()
            .set("id", format!("arrow-tail-{color_id}"))
            .set("markerWidth", 10)
            .set("markerHeight", 10)
            .set("refX", 1)
            .set("refY", 5)
            .set("orient", "auto")
            .set("markerUnits", "userSpaceOnUse")
            .add(
                svg_element::Path::new()
                    .set("d", "M 10 0 L 0 5 L 10 10 z")
                    .set("fill", &self.stroke),
            );

        svg_element::Definitions::new().add(head).add(tail)
    }

    fn render_lanes(
        &self,
        mut doc: Document,
        scene: &Scene,
        origin: Point,
        margin: Insets,
        doc_width: f32,
    ) -> Document {
        for row in scene.lane_rows() {
            let y = origin.y() + row.y();

            if let Some(band) = &self.band {
                doc = doc.add(
                    svg_element::Rectangle::new()
                        .set("x", margin.left())
                        .set("y", y)
                        .set("width", doc_width - margin.horizontal_sum())
                        .set("height", row.height())
                        .set("fill", band)
                        .set("fill-opacity", band.alpha()),
                );
            }

            doc = doc.add(
                svg_element::Text::new("")
                    .set("x", margin.left())
                    .set("y", y + row.height() / 2.0)
                    .set("text-anchor", "start")
                    .set("dominant-baseline", "central")
                    .set("font-family", FONT_FAMILY)
                    .set("font-size", FONT_SIZE)
                    .set("fill", &self.stroke)
                    .add(SvgText::new(row.lane().name())),
            );
        }
        doc
    }

    fn render_step_names(&self, mut doc: Document, scene: &Scene, origin: Point) -> Document {
        for column in scene.columns() {
            doc = doc.add(
                svg_element::Text::new("")
                    .set("x", origin.x() + column.x() + column.width() / 2.0)
                    .set("y", origin.y() - HEADER_HEIGHT / 2.0)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-family", FONT_FAMILY)
                    .set("font-size", FONT_SIZE + 2)
                    .set("font-weight", "bold")
                    .set("fill", &self.stroke)
                    .add(SvgText::new(column.name())),
            );
        }
        doc
    }

    fn render_connectors(&self, mut doc: Document, scene: &Scene, origin: Point) -> Document {
        let color_id = self.stroke.to_id_safe_string();

        for segment in scene.connectors() {
            // `None` segments are metadata only; both boxes are drawn, no line.
            if !segment.kind().is_visible() {
                continue;
            }

            let from = scene.boxes()[segment.from()].bounds();
            let to = scene.boxes()[segment.to()].bounds();
            let (start, end) = connector_anchors(from, to);

            let mut line = svg_element::Line::new()
                .set("x1", origin.x() + start.x())
                .set("y1", origin.y() + start.y())
                .set("x2", origin.x() + end.x())
                .set("y2", origin.y() + end.y())
                .set("stroke", &self.stroke)
                .set("stroke-width", 1.5)
                .set("marker-end", format!("url(#arrow-head-{color_id})"));

            if segment.kind() == ConnectorKind::TwoWay {
                line = line.set("marker-start", format!("url(#arrow-tail-{color_id})"));
            }

            doc = doc.add(line);
        }
        doc
    }

    fn render_boxes(&self, mut doc: Document, scene: &Scene, origin: Point) -> Document {
        for positioned in scene.boxes() {
            let bounds = positioned.bounds();

            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", origin.x() + bounds.min_x())
                    .set("y", origin.y() + bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", "white")
                    .set("stroke", &self.stroke)
                    .set("stroke-width", 1.0)
                    .set("rx", 4.0),
            );

            let center = bounds.center();
            let line_count = positioned.lines().len() as f32;
            let first_y =
                origin.y() + center.y() - (line_count - 1.0) / 2.0 * LINE_HEIGHT;

            let mut text = svg_element::Text::new("")
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-family", FONT_FAMILY)
                .set("font-size", FONT_SIZE)
                .set("fill", &self.stroke);

            for (index, line) in positioned.lines().iter().enumerate() {
                text = text.add(
                    svg_element::TSpan::new("")
                        .set("x", origin.x() + center.x())
                        .set("y", first_y + index as f32 * LINE_HEIGHT)
                        .add(SvgText::new(line.as_str())),
                );
            }

            doc = doc.add(text);
        }
        doc
    }
}

/// Pick the facing edge midpoints of two boxes for a connector line.
fn connector_anchors(from: Bounds, to: Bounds) -> (Point, Point) {
    if to.min_y() > from.max_y() {
        // Target is below: bottom edge to top edge.
        (
            Point::new(from.center().x(), from.max_y()),
            Point::new(to.center().x(), to.min_y()),
        )
    } else if to.max_y() < from.min_y() {
        // Target is above: top edge to bottom edge.
        (
            Point::new(from.center().x(), from.min_y()),
            Point::new(to.center().x(), to.max_y()),
        )
    } else if to.min_x() >= from.max_x() {
        // Same row, target to the right (stacked cell neighbors).
        (
            Point::new(from.max_x(), from.center().y()),
            Point::new(to.min_x(), to.center().y()),
        )
    } else {
        (
            Point::new(from.min_x(), from.center().y()),
            Point::new(to.max_x(), to.center().y()),
        )
    }
}

#[cfg(test)]
mod tests {
    use sbp_core::geometry::Size;

    use crate::{config::LayoutConfig, layout};

    use super::*;

    fn render(source: &str) -> String {
        let blueprint = sbp_parser::parse(source).expect("test source must parse");
        let scene = layout::layout(&blueprint, &LayoutConfig::default()).unwrap();
        SvgBuilder::new().build().unwrap().export_scene(&scene)
    }

    #[test]
    fn test_export_contains_boxes_and_labels() {
        let rendered = render("Order:C Click order/F Confirm");

        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("Click order"));
        assert!(rendered.contains("Confirm"));
        assert!(rendered.contains("Order"));
        // All four lane names appear in the gutter.
        for name in ["Customer", "Front", "Back", "Process"] {
            assert!(rendered.contains(name), "missing lane name {name}");
        }
    }

    #[test]
    fn test_two_way_connector_has_both_markers() {
        let rendered = render("Restock:B Update//P Check DB");

        assert!(rendered.contains("marker-end"));
        assert!(rendered.contains("marker-start"));
    }

    #[test]
    fn test_pipe_connector_draws_no_line() {
        let rendered = render("S:C Wait|F Greet");

        assert!(!rendered.contains("<line"));
        // Both boxes are still drawn.
        assert!(rendered.contains("Wait"));
        assert!(rendered.contains("Greet"));
    }

    #[test]
    fn test_default_style_builds() {
        assert!(SvgBuilder::new().with_style(&StyleConfig::default()).build().is_ok());
    }

    #[test]
    fn test_connector_anchors_face_each_other() {
        let top = Bounds::from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let below = Bounds::from_top_left(Point::new(0.0, 30.0), Size::new(10.0, 10.0));

        let (start, end) = connector_anchors(top, below);
        assert_eq!(start.y(), 10.0);
        assert_eq!(end.y(), 30.0);

        let (start, end) = connector_anchors(below, top);
        assert_eq!(start.y(), 30.0);
        assert_eq!(end.y(), 10.0);
    }
}
