use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Total,
    Region,
    Workspace,
}

impl NodeKind {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "total" => Some(Self::Total),
            "region" => Some(Self::Region),
            "workspace" => Some(Self::Workspace),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingNode {
    pub id: String,
    pub name: String,
    pub cost: f64,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(rename = "dependsOn")]
    pub depends_on: Option<String>,
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node list has no total node")]
    MissingRoot,
    #[error("node list has more than one total node ({0}, {1})")]
    DuplicateRoot(String, String),
    #[error("duplicate node id {0}")]
    DuplicateId(String),
}

/// Validated node set. Supplied wholesale by the data layer and immutable
/// for the duration of a render pass; a data reload builds a new graph.
#[derive(Debug, Clone)]
pub struct BillingGraph {
    nodes: Vec<BillingNode>,
    index: HashMap<String, usize>,
    root: usize,
}

impl BillingGraph {
    pub fn from_nodes(nodes: Vec<BillingNode>) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(nodes.len());
        let mut root = None;
        for (idx, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), idx).is_some() {
                return Err(GraphError::DuplicateId(node.id.clone()));
            }
            if node.kind == NodeKind::Total {
                match root {
                    None => root = Some(idx),
                    Some(first) => {
                        return Err(GraphError::DuplicateRoot(
                            nodes[first].id.clone(),
                            node.id.clone(),
                        ));
                    }
                }
            }
        }
        let root = root.ok_or(GraphError::MissingRoot)?;

        for node in &nodes {
            if let Some(parent) = node.depends_on.as_deref() {
                if !index.contains_key(parent) {
                    log::warn!(
                        "node {} depends on unknown node {parent}; its edge will not be drawn",
                        node.id
                    );
                }
            }
        }

        Ok(Self { nodes, index, root })
    }

    pub fn nodes(&self) -> &[BillingNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&BillingNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn root(&self) -> &BillingNode {
        &self.nodes[self.root]
    }

    pub fn regions(&self) -> impl Iterator<Item = &BillingNode> {
        self.nodes
            .iter()
            .filter(|node| node.kind == NodeKind::Region)
    }

    pub fn workspaces_of<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a BillingNode> {
        self.nodes.iter().filter(move |node| {
            node.kind == NodeKind::Workspace && node.depends_on.as_deref() == Some(region)
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

static DEMO_NODES: Lazy<Vec<BillingNode>> = Lazy::new(|| {
    let raw: [(&str, &str, f64, NodeKind, Option<&str>); 9] = [
        ("total_cost", "Total Cost", 450.0, NodeKind::Total, None),
        ("region_bja", "Beijing", 100.0, NodeKind::Region, Some("total_cost")),
        ("region_hzh", "Hangzhou", 100.0, NodeKind::Region, Some("total_cost")),
        ("region_gzg", "Guangzhou", 100.0, NodeKind::Region, Some("total_cost")),
        ("region_sgp", "Singapore", 150.0, NodeKind::Region, Some("total_cost")),
        ("workspace_test_1", "sealos-test-1", 30.0, NodeKind::Workspace, Some("region_bja")),
        ("workspace_test_2", "sealos-test-2", 10.0, NodeKind::Workspace, Some("region_bja")),
        ("workspace_test_3", "sealos-test-3", 45.0, NodeKind::Workspace, Some("region_bja")),
        ("workspace_test_4", "sealos-test-4", 15.0, NodeKind::Workspace, Some("region_bja")),
    ];
    raw.into_iter()
        .map(|(id, name, cost, kind, depends_on)| BillingNode {
            id: id.to_string(),
            name: name.to_string(),
            cost,
            kind,
            depends_on: depends_on.map(str::to_string),
        })
        .collect()
});

pub fn demo_nodes() -> Vec<BillingNode> {
    DEMO_NODES.clone()
}

pub fn demo_graph() -> BillingGraph {
    BillingGraph::from_nodes(demo_nodes()).expect("demo node set is valid")
}
