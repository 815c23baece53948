use crate::ir::BillingGraph;
use crate::selection::Selection;

use super::{Anchor, PlacedNode};

// ── Grid geometry ───────────────────────────────────────────────────
/// Pixel size of one grid unit.
pub const GRID_UNIT: f32 = 40.0;
/// Column of the region nodes, in grid units from the total node.
const REGION_COLUMN: f32 = 3.0;
/// Row of the first region node.
const REGION_BASE_ROW: f32 = 3.0;
/// Vertical spacing between region rows.
const REGION_ROW_SPACING: f32 = 2.5;
/// Column of the workspace nodes.
const WORKSPACE_COLUMN: f32 = 9.5;
/// Row of the first workspace node.
const WORKSPACE_BASE_ROW: f32 = 4.5;
/// Vertical spacing between workspace rows.
const WORKSPACE_ROW_SPACING: f32 = 2.5;

/// Assigns every visible node a deterministic grid anchor: the total node
/// at the origin, regions in one column, and the selected region's
/// workspaces in a second column. Workspaces of unselected regions are
/// filtered out, not repositioned.
pub(super) fn assign_anchors(graph: &BillingGraph, selection: &Selection) -> Vec<PlacedNode> {
    let mut placed = Vec::with_capacity(graph.len());

    placed.push(PlacedNode {
        node: graph.root().clone(),
        anchor: Anchor { x: 0.0, y: 0.0 },
        selected: false,
    });

    for (idx, node) in graph.regions().enumerate() {
        placed.push(PlacedNode {
            node: node.clone(),
            anchor: Anchor {
                x: REGION_COLUMN,
                y: REGION_BASE_ROW + idx as f32 * REGION_ROW_SPACING,
            },
            selected: selection.selected_region() == Some(node.id.as_str()),
        });
    }

    if let Some(region) = selection.selected_region() {
        for (idx, node) in graph.workspaces_of(region).enumerate() {
            placed.push(PlacedNode {
                node: node.clone(),
                anchor: Anchor {
                    x: WORKSPACE_COLUMN,
                    y: WORKSPACE_BASE_ROW + idx as f32 * WORKSPACE_ROW_SPACING,
                },
                selected: selection.selected_workspace() == Some(node.id.as_str()),
            });
        }
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::demo_graph;

    #[test]
    fn total_sits_at_origin() {
        let graph = demo_graph();
        let placed = assign_anchors(&graph, &Selection::default());
        assert_eq!(placed[0].node.id, "total_cost");
        assert_eq!(placed[0].anchor, Anchor { x: 0.0, y: 0.0 });
    }

    #[test]
    fn regions_stack_in_one_column() {
        let graph = demo_graph();
        let placed = assign_anchors(&graph, &Selection::default());
        let regions: Vec<&PlacedNode> = placed
            .iter()
            .filter(|p| p.node.kind == crate::ir::NodeKind::Region)
            .collect();
        assert_eq!(regions.len(), 4);
        for (idx, region) in regions.iter().enumerate() {
            assert_eq!(region.anchor.x, 3.0);
            assert_eq!(region.anchor.y, 3.0 + idx as f32 * 2.5);
        }
    }

    #[test]
    fn workspaces_hidden_without_selection() {
        let graph = demo_graph();
        let placed = assign_anchors(&graph, &Selection::default());
        assert_eq!(placed.len(), 5);
    }

    #[test]
    fn selected_region_reveals_its_workspaces() {
        let graph = demo_graph();
        let mut selection = Selection::default();
        selection.select_region(Some("region_bja"));
        let placed = assign_anchors(&graph, &selection);
        assert_eq!(placed.len(), 9);

        let workspaces: Vec<&PlacedNode> = placed
            .iter()
            .filter(|p| p.node.kind == crate::ir::NodeKind::Workspace)
            .collect();
        assert_eq!(workspaces.len(), 4);
        for (idx, workspace) in workspaces.iter().enumerate() {
            assert_eq!(workspace.anchor.x, 9.5);
            assert_eq!(workspace.anchor.y, 4.5 + idx as f32 * 2.5);
        }
    }

    #[test]
    fn anchors_are_deterministic() {
        let graph = demo_graph();
        let mut selection = Selection::default();
        selection.select_region(Some("region_bja"));
        let first = assign_anchors(&graph, &selection);
        let second = assign_anchors(&graph, &selection);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.node.id, b.node.id);
            assert_eq!(a.anchor, b.anchor);
        }
    }

    #[test]
    fn other_region_selection_hides_beijing_workspaces() {
        let graph = demo_graph();
        let mut selection = Selection::default();
        selection.select_region(Some("region_sgp"));
        let placed = assign_anchors(&graph, &selection);
        // Singapore has no workspaces in the demo set
        assert_eq!(placed.len(), 5);
    }
}
