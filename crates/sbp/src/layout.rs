//! Deterministic layout engine for parsed blueprints.
//!
//! [`layout`] turns a [`Blueprint`] into a fully resolved [`Scene`]: fixed
//! lane rows, one column per step, one positioned box per action, and
//! connector segments between consecutive actions of a step. The function is
//! pure; the same blueprint and configuration always produce bit-identical
//! coordinates.
//!
//! Row positions are shared by all columns (`row_index * (box_height +
//! row_gap)`), which keeps the lanes continuous across the whole diagram.
//! Column widths are computed independently per step from its widest label.
//! When a step revisits a lane, the boxes share that cell side by side in
//! source sub-order, so row heights stay uniform.

use log::debug;
use thiserror::Error;

use sbp_core::{
    blueprint::Blueprint,
    geometry::{Bounds, Point, Size},
    lane::Lane,
    scene::{ConnectorSegment, LaneRow, PositionedBox, Scene, StepColumn},
};

use crate::config::LayoutConfig;

/// Deterministic per-character width estimate, in drawing units.
///
/// Real text measurement would pull font loading into the layout engine and
/// make coordinates depend on the host's installed fonts; a character-count
/// estimate is close enough at the renderer's default font size.
const GLYPH_WIDTH: f32 = 7.2;

/// Horizontal padding between a box edge and its label.
const LABEL_INSET: f32 = 8.0;

/// Errors produced by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The blueprint references a lane that the configured lane order does
    /// not contain. Lanes are never silently dropped.
    #[error("lane `{0}` is referenced by the blueprint but missing from the configured lane order")]
    UnmappedLane(Lane),
}

/// Lay out a blueprint into a positioned scene.
///
/// # Errors
///
/// Returns [`LayoutError::UnmappedLane`] if a custom lane order omits a lane
/// that the blueprint references.
pub fn layout(blueprint: &Blueprint, config: &LayoutConfig) -> Result<Scene, LayoutError> {
    let lane_order: Vec<Lane> = match config.lane_order() {
        Some(order) => order.to_vec(),
        None => Lane::CANONICAL_ORDER.to_vec(),
    };

    for lane in blueprint.referenced_lanes() {
        if !lane_order.contains(&lane) {
            return Err(LayoutError::UnmappedLane(lane));
        }
    }

    let row_pitch = config.box_height() + config.row_gap();
    let lane_rows: Vec<LaneRow> = lane_order
        .iter()
        .enumerate()
        .map(|(row_index, &lane)| {
            LaneRow::new(lane, row_index as f32 * row_pitch, config.box_height())
        })
        .collect();

    let mut columns = Vec::with_capacity(blueprint.steps().len());
    let mut boxes = Vec::new();
    let mut connectors = Vec::new();
    let mut column_x = 0.0;

    for (column_index, step) in blueprint.steps().iter().enumerate() {
        // Resolve each action to its row, display lines and natural width.
        let slots: Vec<(usize, Vec<String>, f32)> = step
            .actions()
            .iter()
            .map(|action| {
                let row = lane_order
                    .iter()
                    .position(|&lane| lane == action.lane())
                    .expect("referenced lanes were validated against the lane order");
                let lines = match config.label_wrap_width() {
                    Some(width) => wrap_label(action.label(), width),
                    None => vec![action.label().to_string()],
                };
                let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                let width = config
                    .box_width()
                    .max(longest as f32 * GLYPH_WIDTH + 2.0 * LABEL_INSET);
                (row, lines, width)
            })
            .collect();

        // Total width of each cell; a cell holds every box of this column
        // that lands on the same row, side by side in source sub-order.
        let mut cell_widths = vec![0.0f32; lane_order.len()];
        let mut cell_counts = vec![0usize; lane_order.len()];
        for (row, _, width) in &slots {
            cell_widths[*row] += width;
            cell_counts[*row] += 1;
        }
        for (width, count) in cell_widths.iter_mut().zip(&cell_counts) {
            if *count > 1 {
                *width += config.stack_gap() * (*count - 1) as f32;
            }
        }

        let column_width = cell_widths
            .iter()
            .fold(config.box_width(), |acc, &w| acc.max(w));

        // Place the boxes, keeping a per-row cursor for shared cells.
        let first_box = boxes.len();
        let mut cursors = vec![0.0f32; lane_order.len()];
        for (action, (row, lines, width)) in step.actions().iter().zip(slots) {
            let cell_start = column_x + (column_width - cell_widths[row]) / 2.0;
            let top_left = Point::new(cell_start + cursors[row], row as f32 * row_pitch);
            cursors[row] += width + config.stack_gap();

            boxes.push(PositionedBox::new(
                action.lane(),
                action.label(),
                lines,
                column_index,
                row,
                Bounds::from_top_left(top_left, Size::new(width, config.box_height())),
            ));
        }

        // Connectors never cross column boundaries: each segment links two
        // consecutive actions of this step.
        for offset in 1..step.actions().len() {
            if let Some(kind) = step.actions()[offset - 1].connector_to_next() {
                connectors.push(ConnectorSegment::new(
                    first_box + offset - 1,
                    first_box + offset,
                    kind,
                ));
            }
        }

        columns.push(StepColumn::new(step.name(), column_x, column_width));
        column_x += column_width + config.column_gap();
    }

    let width = columns
        .last()
        .map(|column| column.x() + column.width())
        .unwrap_or(0.0);
    let height = if lane_rows.is_empty() {
        0.0
    } else {
        lane_rows.len() as f32 * row_pitch - config.row_gap()
    };

    debug!(
        columns_count = columns.len(),
        boxes_count = boxes.len(),
        connectors_count = connectors.len();
        "Scene laid out"
    );

    Ok(Scene::new(
        lane_rows,
        columns,
        boxes,
        connectors,
        Size::new(width, height),
    ))
}

/// Greedy word wrap at the given character width.
///
/// Words longer than the width stay unbroken on their own line. Wrapping
/// re-joins words with single spaces, so runs of internal whitespace are
/// normalized; unwrapped labels pass through verbatim.
fn wrap_label(label: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in label.split_whitespace() {
        let word_len = word.chars().count();
        if !current.is_empty() && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
