use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::layout::Scene;

#[derive(Debug, Serialize)]
pub struct SceneDump {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<NodeDump>,
    pub paths: Vec<PathDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub kind: String,
    pub name: String,
    pub cost: f64,
    pub anchor_x: f32,
    pub anchor_y: f32,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct PathDump {
    pub node_id: String,
    pub path: String,
    pub highlighted: bool,
}

impl SceneDump {
    pub fn from_scene(scene: &Scene) -> Self {
        let nodes = scene
            .nodes
            .iter()
            .map(|entry| NodeDump {
                id: entry.node.id.clone(),
                kind: format!("{:?}", entry.node.kind),
                name: entry.node.name.clone(),
                cost: entry.node.cost,
                anchor_x: entry.anchor.x,
                anchor_y: entry.anchor.y,
                selected: entry.selected,
            })
            .collect();

        let paths = scene
            .regular_paths
            .iter()
            .chain(&scene.highlighted_paths)
            .map(|routed| PathDump {
                node_id: routed.node_id.clone(),
                path: routed.path.clone(),
                highlighted: routed.highlighted,
            })
            .collect();

        SceneDump {
            width: scene.width,
            height: scene.height,
            nodes,
            paths,
        }
    }
}

pub fn write_scene_dump(path: &Path, scene: &Scene) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = SceneDump::from_scene(scene);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CostCanvas;
    use crate::config::LayoutConfig;
    use crate::ir::demo_graph;

    #[test]
    fn dump_keeps_regular_before_highlighted() {
        let mut canvas = CostCanvas::new(demo_graph());
        let config = LayoutConfig::default();
        canvas.select_region(Some("region_bja"));
        canvas.measure_headless(&config);
        let dump = SceneDump::from_scene(&canvas.scene(&config));

        assert_eq!(dump.nodes.len(), 9);
        assert_eq!(dump.paths.len(), 8);
        let first_highlight = dump.paths.iter().position(|p| p.highlighted).unwrap();
        assert!(dump.paths[..first_highlight].iter().all(|p| !p.highlighted));
        assert!(dump.paths[first_highlight..].iter().all(|p| p.highlighted));
    }
}
