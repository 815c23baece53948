mod edges;
mod grid;
pub mod router;
pub(crate) mod types;

pub use grid::GRID_UNIT;
pub use types::*;

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::ir::{BillingGraph, NodeKind};
use crate::selection::Selection;

/// Computes one frame of the visualization from a single consistent
/// snapshot of measured boxes, zoom scale and selection. Boxes lag the
/// anchors by one paint pass; nodes without a box simply have no routed
/// edge yet.
pub fn compute_scene(
    graph: &BillingGraph,
    boxes: &HashMap<String, NodeBox>,
    scale: f32,
    selection: &Selection,
    config: &LayoutConfig,
) -> Scene {
    let placed = grid::assign_anchors(graph, selection);
    let (regular_paths, highlighted_paths) =
        edges::classify_edges(graph, &placed, boxes, scale, config);

    let workspace_count = placed
        .iter()
        .filter(|entry| entry.node.kind == NodeKind::Workspace)
        .count();
    let height = (config.canvas_base_height
        + workspace_count as f32 * config.workspace_row_height)
        .max(config.canvas_min_height);
    let column_extent = placed
        .iter()
        .map(|entry| entry.anchor.x * GRID_UNIT + config.card_width)
        .fold(config.canvas_min_width, f32::max);

    Scene {
        nodes: placed,
        regular_paths,
        highlighted_paths,
        width: column_extent,
        height,
    }
}
