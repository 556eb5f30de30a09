use crate::category::NodeCategory;
use crate::error::{GraphError, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One scanned source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Repository-relative path, forward-slash normalized. Unique key.
    pub id: String,

    /// File base name, for display only.
    pub label: String,

    /// Architectural role, assigned once at scan time.
    #[serde(rename = "type")]
    pub category: NodeCategory,
}

impl FileNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let id = id.into();
        let category = NodeCategory::classify(&id);
        Self {
            id,
            label: label.into(),
            category,
        }
    }
}

/// A suspected import dependency between two scanned files.
///
/// Edges carry no identifier of their own; they are enumerable only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportEdge {
    pub source: String,
    pub target: String,
}

/// The scanned repository graph. Immutable after construction.
#[derive(Debug)]
pub struct CodebaseGraph {
    /// Directed graph (file -> file it appears to import)
    graph: DiGraph<FileNode, ()>,

    /// Node id -> NodeIndex mapping for fast lookup
    id_index: HashMap<String, NodeIndex>,
}

impl CodebaseGraph {
    /// Build the graph from scanner output.
    ///
    /// Node ids must be unique and every edge endpoint must name a node from
    /// the same scan; violations are programming errors upstream.
    pub fn from_parts(nodes: Vec<FileNode>, edges: Vec<ImportEdge>) -> Result<Self> {
        let mut graph = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut id_index = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let id = node.id.clone();
            let idx = graph.add_node(node);
            if id_index.insert(id.clone(), idx).is_some() {
                return Err(GraphError::DuplicateNode(id));
            }
        }

        for edge in edges {
            let source = *id_index
                .get(&edge.source)
                .ok_or_else(|| GraphError::UnknownEndpoint(edge.source.clone()))?;
            let target = *id_index
                .get(&edge.target)
                .ok_or_else(|| GraphError::UnknownEndpoint(edge.target.clone()))?;
            graph.add_edge(source, target, ());
        }

        Ok(Self { graph, id_index })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All nodes, in insertion (scan) order.
    pub fn nodes(&self) -> Vec<FileNode> {
        self.graph.node_weights().cloned().collect()
    }

    /// All edges, materialized back to endpoint ids.
    pub fn edges(&self) -> Vec<ImportEdge> {
        self.graph
            .edge_references()
            .map(|e| ImportEdge {
                source: self.graph[e.source()].id.clone(),
                target: self.graph[e.target()].id.clone(),
            })
            .collect()
    }

    /// Ids of nodes the given filename refers to: a case-insensitive
    /// substring match against the node id or its label.
    pub fn matching_ids(&self, filename: &str) -> Vec<String> {
        let needle = filename.to_lowercase();
        self.graph
            .node_weights()
            .filter(|node| {
                node.id.to_lowercase().contains(&needle)
                    || node.label.to_lowercase().contains(&needle)
            })
            .map(|node| node.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(id: &str) -> FileNode {
        let label = id.rsplit('/').next().unwrap().to_string();
        FileNode::new(id, label)
    }

    fn edge(source: &str, target: &str) -> ImportEdge {
        ImportEdge {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn builds_from_scan_parts() {
        let graph = CodebaseGraph::from_parts(
            vec![node("src/AuthService.py"), node("src/Utils.py")],
            vec![edge("src/AuthService.py", "src/Utils.py")],
        )
        .unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains("src/Utils.py"));
        assert!(!graph.contains("src/Missing.py"));
        assert_eq!(
            graph.edges(),
            vec![edge("src/AuthService.py", "src/Utils.py")]
        );
    }

    #[test]
    fn rejects_duplicate_node_id() {
        let err = CodebaseGraph::from_parts(vec![node("a.py"), node("a.py")], vec![]).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateNode(id) if id == "a.py"));
    }

    #[test]
    fn rejects_unknown_edge_endpoint() {
        let err = CodebaseGraph::from_parts(vec![node("a.py")], vec![edge("a.py", "b.py")])
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownEndpoint(id) if id == "b.py"));
    }

    #[test]
    fn allows_self_loop() {
        // the heuristic linker can emit these; they must not be fatal
        let graph =
            CodebaseGraph::from_parts(vec![node("a.py")], vec![edge("a.py", "a.py")]).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn matches_filenames_case_insensitively() {
        let graph = CodebaseGraph::from_parts(
            vec![node("src/AuthService.py"), node("src/Utils.py")],
            vec![],
        )
        .unwrap();

        assert_eq!(graph.matching_ids("authservice"), vec!["src/AuthService.py"]);
        // matches against the id, not just the label
        assert_eq!(
            graph.matching_ids("src/"),
            vec!["src/AuthService.py", "src/Utils.py"]
        );
        assert!(graph.matching_ids("NoSuchFile").is_empty());
    }

    #[test]
    fn node_serializes_with_type_field() {
        let json = serde_json::to_value(node("src/AuthService.py")).unwrap();
        assert_eq!(json["id"], "src/AuthService.py");
        assert_eq!(json["label"], "AuthService.py");
        assert_eq!(json["type"], "service");
    }
}
