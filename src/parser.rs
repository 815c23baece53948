use serde::Deserialize;
use thiserror::Error;

use crate::ir::{BillingGraph, BillingNode, GraphError, NodeKind};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid node list: {0}")]
    Syntax(#[from] json5::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

// Raw form keeps `type` as a string so one bad node degrades to a warning
// instead of failing the whole list.
#[derive(Debug, Deserialize)]
struct RawNode {
    id: String,
    name: String,
    cost: f64,
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "dependsOn", default)]
    depends_on: Option<String>,
}

/// Parses a JSON/JSON5 node list, dropping nodes with an unrecognized type.
pub fn parse_nodes(input: &str) -> Result<Vec<BillingNode>, ParseError> {
    let raw: Vec<RawNode> = json5::from_str(input)?;
    let mut nodes = Vec::with_capacity(raw.len());
    for entry in raw {
        let Some(kind) = NodeKind::from_token(&entry.kind) else {
            log::warn!(
                "ignoring node {} with unrecognized type {:?}",
                entry.id,
                entry.kind
            );
            continue;
        };
        nodes.push(BillingNode {
            id: entry.id,
            name: entry.name,
            cost: entry.cost,
            kind,
            depends_on: entry.depends_on,
        });
    }
    Ok(nodes)
}

pub fn parse_graph(input: &str) -> Result<BillingGraph, ParseError> {
    Ok(BillingGraph::from_nodes(parse_nodes(input)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let nodes = parse_nodes(
            r#"[
                {"id":"total","name":"Total","cost":100,"type":"total","dependsOn":null},
                {"id":"r1","name":"Beijing","cost":60,"type":"region","dependsOn":"total"}
            ]"#,
        )
        .unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].kind, NodeKind::Region);
    }

    #[test]
    fn parses_json5_with_comments() {
        let nodes = parse_nodes(
            r#"[
                // the root
                {id: "total", name: "Total", cost: 100, type: "total"},
            ]"#,
        )
        .unwrap();
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].depends_on.is_none());
    }

    #[test]
    fn drops_unrecognized_type() {
        let nodes = parse_nodes(
            r#"[
                {"id":"total","name":"Total","cost":100,"type":"total"},
                {"id":"x","name":"X","cost":5,"type":"cluster","dependsOn":"total"}
            ]"#,
        )
        .unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, "total");
    }

    #[test]
    fn parse_graph_enforces_root() {
        let err = parse_graph(r#"[{"id":"r1","name":"R","cost":1,"type":"region"}]"#).unwrap_err();
        assert!(matches!(err, ParseError::Graph(GraphError::MissingRoot)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_nodes("not a list").is_err());
    }
}
