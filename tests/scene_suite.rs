use std::path::Path;

use costgraph::{
    CostCanvas, LayoutConfig, Selection, SelectionOutcome, Theme, parse_graph, render_svg,
};

fn load_fixture(name: &str) -> CostCanvas {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");
    let input = std::fs::read_to_string(root.join(name)).expect("fixture read failed");
    let graph = parse_graph(&input).expect("fixture parse failed");
    CostCanvas::new(graph)
}

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
    assert!(!svg.contains("NaN"), "{fixture}: NaN in output");
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let fixtures = [
        "basic.json5",
        "workspaces.json5",
        "dangling.json5",
        "unknown_kind.json5",
    ];
    let config = LayoutConfig::default();
    let theme = Theme::light();

    for fixture in fixtures {
        let canvas = load_fixture(fixture);
        canvas.measure_headless(&config);
        let svg = render_svg(&canvas.scene(&config), &theme, &config);
        assert_valid_svg(&svg, fixture);
    }
}

#[test]
fn basic_scenario_routes_two_regular_edges() {
    let canvas = load_fixture("basic.json5");
    let config = LayoutConfig::default();
    canvas.measure_headless(&config);
    let scene = canvas.scene(&config);

    assert_eq!(scene.regular_paths.len(), 2);
    assert_eq!(scene.highlighted_paths.len(), 0);
    // no workspace column without a region selection
    assert_eq!(scene.nodes.len(), 3);
}

#[test]
fn routed_edge_count_matches_visible_non_root_nodes() {
    let mut canvas = load_fixture("workspaces.json5");
    let config = LayoutConfig::default();

    canvas.measure_headless(&config);
    let scene = canvas.scene(&config);
    assert_eq!(
        scene.regular_paths.len() + scene.highlighted_paths.len(),
        scene.nodes.len() - 1
    );

    canvas.select_region(Some("r1"));
    canvas.measure_headless(&config);
    let scene = canvas.scene(&config);
    assert_eq!(scene.nodes.len(), 6);
    assert_eq!(
        scene.regular_paths.len() + scene.highlighted_paths.len(),
        scene.nodes.len() - 1
    );
}

#[test]
fn selecting_region_reveals_and_highlights() {
    let mut canvas = load_fixture("workspaces.json5");
    let config = LayoutConfig::default();
    canvas.select_region(Some("r1"));
    canvas.measure_headless(&config);
    let scene = canvas.scene(&config);

    let visible: Vec<&str> = scene
        .nodes
        .iter()
        .map(|entry| entry.node.id.as_str())
        .collect();
    assert!(visible.contains(&"w1"));
    assert!(visible.contains(&"w2"));
    assert!(!visible.contains(&"w3"));

    assert_eq!(scene.highlighted_paths.len(), 1);
    assert_eq!(scene.highlighted_paths[0].node_id, "r1");
    assert!(
        scene
            .regular_paths
            .iter()
            .any(|path| path.node_id == "r2")
    );
}

#[test]
fn cross_region_workspace_selection_is_rejected() {
    let mut canvas = load_fixture("workspaces.json5");
    canvas.select_region(Some("r1"));
    // w3 belongs to r2
    assert_eq!(
        canvas.select_workspace(Some("w3")),
        SelectionOutcome::Rejected
    );
    assert_eq!(canvas.selection().selected_workspace(), None);
}

#[test]
fn select_region_twice_is_idempotent() {
    let mut canvas = load_fixture("workspaces.json5");
    canvas.select_region(Some("r1"));
    let first = canvas.selection().clone();
    canvas.select_region(Some("r1"));
    assert_eq!(canvas.selection(), &first);
}

#[test]
fn deselecting_region_clears_workspace_too() {
    let mut canvas = load_fixture("workspaces.json5");
    canvas.select_region(Some("r1"));
    canvas.select_workspace(Some("w1"));
    canvas.select_region(None);
    assert_eq!(canvas.selection(), &Selection::Index);
}

#[test]
fn zooming_leaves_routed_paths_unchanged() {
    let config = LayoutConfig::default();

    let mut reference = load_fixture("workspaces.json5");
    reference.select_region(Some("r1"));
    reference.measure_headless(&config);
    let base = reference.scene(&config);

    let mut zoomed = load_fixture("workspaces.json5");
    zoomed.select_region(Some("r1"));
    zoomed.transform_mut().set_scale(1.25);
    zoomed.measure_headless(&config);
    let scaled = zoomed.scene(&config);

    assert_eq!(base.regular_paths.len(), scaled.regular_paths.len());
    for (a, b) in base.regular_paths.iter().zip(&scaled.regular_paths) {
        assert_eq!(a.path, b.path, "path for {} drifted under zoom", a.node_id);
    }
    for (a, b) in base.highlighted_paths.iter().zip(&scaled.highlighted_paths) {
        assert_eq!(a.path, b.path);
    }
}

#[test]
fn dangling_parent_renders_detached_node() {
    let canvas = load_fixture("dangling.json5");
    let config = LayoutConfig::default();
    canvas.measure_headless(&config);
    let scene = canvas.scene(&config);

    assert!(scene.nodes.iter().any(|entry| entry.node.id == "r1"));
    assert!(scene.regular_paths.is_empty());
}

#[test]
fn unknown_kind_is_dropped_at_parse() {
    let canvas = load_fixture("unknown_kind.json5");
    assert_eq!(canvas.graph().len(), 2);
    assert!(canvas.graph().node("x").is_none());
}

#[test]
fn data_reload_resets_selection() {
    let mut canvas = load_fixture("workspaces.json5");
    let config = LayoutConfig::default();
    canvas.select_region(Some("r1"));
    canvas.select_workspace(Some("w1"));
    canvas.measure_headless(&config);

    let replacement = load_fixture("basic.json5");
    canvas.replace_nodes(replacement.graph().clone());
    assert_eq!(canvas.selection(), &Selection::Index);
    let scene = canvas.scene(&config);
    assert!(scene.regular_paths.is_empty());
    assert_eq!(scene.nodes.len(), 3);
}
