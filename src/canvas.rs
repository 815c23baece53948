use crate::config::LayoutConfig;
use crate::ir::{BillingGraph, NodeKind};
use crate::layout::{GRID_UNIT, NodeBox, Scene, compute_scene};
use crate::registry::{FixedElement, NodeRegistry};
use crate::selection::{Selection, SelectionOutcome};
use crate::transform::TransformContext;

/// Owns the pieces of the cost-tree visualization: the node set, the box
/// registry, the pan/zoom transform and the selection. The host renders
/// from [`CostCanvas::scene`] and feeds clicks back through
/// [`CostCanvas::click`].
pub struct CostCanvas {
    graph: BillingGraph,
    registry: NodeRegistry,
    transform: TransformContext,
    selection: Selection,
    on_workspace_cleared: Option<Box<dyn Fn()>>,
}

impl CostCanvas {
    pub fn new(graph: BillingGraph) -> Self {
        Self {
            graph,
            registry: NodeRegistry::new(),
            transform: TransformContext::new(),
            selection: Selection::default(),
            on_workspace_cleared: None,
        }
    }

    pub fn graph(&self) -> &BillingGraph {
        &self.graph
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn transform(&self) -> &TransformContext {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut TransformContext {
        &mut self.transform
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Invoked whenever a region transition drops the workspace level, so a
    /// caller that owns workspace selection elsewhere can mirror the clear.
    pub fn on_workspace_cleared(&mut self, callback: impl Fn() + 'static) {
        self.on_workspace_cleared = Some(Box::new(callback));
    }

    /// Wholesale data reload: new node set, selection back to the index
    /// state, stale boxes dropped.
    pub fn replace_nodes(&mut self, graph: BillingGraph) {
        self.graph = graph;
        self.selection = Selection::default();
        self.registry.clear();
    }

    pub fn select_region(&mut self, region: Option<&str>) -> SelectionOutcome {
        if let Some(id) = region {
            match self.graph.node(id) {
                Some(node) if node.kind == NodeKind::Region => {}
                _ => return SelectionOutcome::Rejected,
            }
        }
        self.selection.select_region(region);
        if let Some(callback) = &self.on_workspace_cleared {
            callback();
        }
        SelectionOutcome::Applied
    }

    /// Rejected with no region selected, and rejected when the workspace
    /// does not belong to the selected region.
    pub fn select_workspace(&mut self, workspace: Option<&str>) -> SelectionOutcome {
        if let Some(id) = workspace {
            let Some(region) = self.selection.selected_region() else {
                return SelectionOutcome::Rejected;
            };
            match self.graph.node(id) {
                Some(node)
                    if node.kind == NodeKind::Workspace
                        && node.depends_on.as_deref() == Some(region) => {}
                _ => return SelectionOutcome::Rejected,
            }
        }
        self.selection.select_workspace(workspace)
    }

    /// Externally-driven selection: internal state defers to the supplied
    /// values, keeping the cascade invariant intact.
    pub fn set_selection(&mut self, region: Option<&str>, workspace: Option<&str>) {
        self.select_region(region);
        if workspace.is_some() {
            self.select_workspace(workspace);
        }
    }

    /// Click dispatch per node kind: the total card resets the selection,
    /// region cards select a region, workspace cards a workspace.
    pub fn click(&mut self, id: &str) -> SelectionOutcome {
        match self.graph.node(id).map(|node| node.kind) {
            Some(NodeKind::Total) => self.select_region(None),
            Some(NodeKind::Region) => self.select_region(Some(id)),
            Some(NodeKind::Workspace) => self.select_workspace(Some(id)),
            None => SelectionOutcome::Rejected,
        }
    }

    /// One computation pass over a consistent snapshot of boxes, scale and
    /// selection.
    pub fn scene(&self, config: &LayoutConfig) -> Scene {
        let boxes = self.registry.snapshot();
        compute_scene(
            &self.graph,
            &boxes,
            self.transform.scale(),
            &self.selection,
            config,
        )
    }

    /// Headless stand-in for the host's paint pass: synthesizes a measured
    /// card box for every visible node from the config dimensions. Boxes
    /// are wrapper-relative the way a DOM host measures them: pan already
    /// subtracted, zoom scale still baked in.
    pub fn measure_headless(&self, config: &LayoutConfig) {
        let scene = self.scene(config);
        let scale = self.transform.scale();
        for entry in &scene.nodes {
            let bounds = NodeBox::from_origin_size(
                entry.anchor.x * GRID_UNIT * scale,
                entry.anchor.y * GRID_UNIT * scale,
                config.card_width * scale,
                config.card_height * scale,
            );
            self.registry
                .observer(&entry.node.id)
                .set(Some(FixedElement::new(bounds)));
        }
    }
}
