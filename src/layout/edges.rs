use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::ir::{BillingGraph, NodeKind};

use super::{NodeBox, PlacedNode, RoutedPath, Side, router};

/// Routes the incoming edge of every visible non-root node and partitions
/// the results by selection. An edge is only routed when both endpoints
/// have a measured box; a missing box (node not painted yet, or filtered
/// out) skips the edge without error. Regular paths come first so the
/// renderer draws them under the highlighted ones.
pub(super) fn classify_edges(
    graph: &BillingGraph,
    placed: &[PlacedNode],
    boxes: &HashMap<String, NodeBox>,
    scale: f32,
    config: &LayoutConfig,
) -> (Vec<RoutedPath>, Vec<RoutedPath>) {
    let mut regular = Vec::new();
    let mut highlighted = Vec::new();

    for entry in placed {
        let Some(parent_id) = entry.node.depends_on.as_deref() else {
            continue;
        };
        // dangling references were already surfaced at graph build
        let Some(parent) = graph.node(parent_id) else {
            continue;
        };
        let (Some(source_box), Some(target_box)) =
            (boxes.get(parent_id), boxes.get(entry.node.id.as_str()))
        else {
            continue;
        };

        let source_side = match parent.kind {
            NodeKind::Total => Side::Bottom,
            _ => Side::Right,
        };
        let path = router::route(
            source_box,
            source_side,
            target_box,
            Side::Left,
            scale,
            config.corner_radius,
        );
        let routed = RoutedPath {
            node_id: entry.node.id.clone(),
            path,
            highlighted: entry.selected,
        };
        if entry.selected {
            highlighted.push(routed);
        } else {
            regular.push(routed);
        }
    }

    (regular, highlighted)
}
