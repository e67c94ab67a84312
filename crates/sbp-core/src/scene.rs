//! The positioned layout model produced by the layout engine.
//!
//! A [`Scene`] is the fully resolved geometric description of one blueprint:
//! fixed lane rows, one column per step, one positioned box per action, and
//! connector descriptors linking consecutive actions of a step. The scene is
//! renderer-agnostic; exporters map it onto their output document without
//! recomputing any geometry.
//!
//! Scene coordinates start at the content origin `(0, 0)`; margins, gutters
//! and headers are a renderer concern.

use crate::{
    blueprint::ConnectorKind,
    geometry::{Bounds, Size},
    lane::Lane,
};

/// One horizontal lane row of the diagram.
///
/// Row positions are identical across all columns, which is what keeps the
/// lanes visually continuous over the whole diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneRow {
    lane: Lane,
    y: f32,
    height: f32,
}

impl LaneRow {
    pub fn new(lane: Lane, y: f32, height: f32) -> Self {
        Self { lane, y, height }
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// The y-offset of the row's top edge.
    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// One step column of the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct StepColumn {
    name: String,
    x: f32,
    width: f32,
}

impl StepColumn {
    pub fn new(name: impl Into<String>, x: f32, width: f32) -> Self {
        Self {
            name: name.into(),
            x,
            width,
        }
    }

    /// The step name, drawn above the column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The x-offset of the column's left edge.
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// A laid-out action box.
///
/// `column_index` and `row_index` address the cell in the lane grid;
/// `bounds` is the resolved rectangle within the scene. Several boxes may
/// share one cell when a step revisits a lane; they keep their source
/// sub-order.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedBox {
    lane: Lane,
    label: String,
    lines: Vec<String>,
    column_index: usize,
    row_index: usize,
    bounds: Bounds,
}

impl PositionedBox {
    pub fn new(
        lane: Lane,
        label: impl Into<String>,
        lines: Vec<String>,
        column_index: usize,
        row_index: usize,
        bounds: Bounds,
    ) -> Self {
        Self {
            lane,
            label: label.into(),
            lines,
            column_index,
            row_index,
            bounds,
        }
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// The original, unwrapped label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The label split into display lines (one entry when no wrapping
    /// applies).
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The index of this box's step within the scene's columns.
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// The index of this box's lane within the scene's rows.
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A connector between two boxes of the same column.
///
/// `from` and `to` are indices into [`Scene::boxes`]. Segments of kind
/// [`ConnectorKind::None`] are retained as metadata and carry no stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorSegment {
    from: usize,
    to: usize,
    kind: ConnectorKind,
}

impl ConnectorSegment {
    pub fn new(from: usize, to: usize, kind: ConnectorKind) -> Self {
        Self { from, to, kind }
    }

    /// Index of the earlier box within [`Scene::boxes`].
    pub fn from(&self) -> usize {
        self.from
    }

    /// Index of the later box within [`Scene::boxes`].
    pub fn to(&self) -> usize {
        self.to
    }

    pub fn kind(&self) -> ConnectorKind {
        self.kind
    }
}

/// The fully resolved scene graph for one blueprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    lane_rows: Vec<LaneRow>,
    columns: Vec<StepColumn>,
    boxes: Vec<PositionedBox>,
    connectors: Vec<ConnectorSegment>,
    size: Size,
}

impl Scene {
    pub fn new(
        lane_rows: Vec<LaneRow>,
        columns: Vec<StepColumn>,
        boxes: Vec<PositionedBox>,
        connectors: Vec<ConnectorSegment>,
        size: Size,
    ) -> Self {
        Self {
            lane_rows,
            columns,
            boxes,
            connectors,
            size,
        }
    }

    /// The lane rows, top to bottom.
    pub fn lane_rows(&self) -> &[LaneRow] {
        &self.lane_rows
    }

    /// The step columns, left to right in source order.
    pub fn columns(&self) -> &[StepColumn] {
        &self.columns
    }

    /// All boxes; within one column they appear in action source order.
    pub fn boxes(&self) -> &[PositionedBox] {
        &self.boxes
    }

    /// The boxes of one column, in action source order.
    pub fn boxes_in_column(&self, column_index: usize) -> impl Iterator<Item = &PositionedBox> {
        self.boxes
            .iter()
            .filter(move |positioned| positioned.column_index() == column_index)
    }

    /// All connector segments, including stroke-less `None` segments.
    pub fn connectors(&self) -> &[ConnectorSegment] {
        &self.connectors
    }

    /// The total content extent of the scene.
    pub fn size(&self) -> Size {
        self.size
    }
}
