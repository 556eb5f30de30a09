use crate::error::{GraphError, Result};
use crate::types::{CodebaseGraph, FileNode, ImportEdge};
use log::warn;
use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Immutable point-in-time copy of the full graph state, suitable for
/// sending to a new viewer without racing a concurrent highlight change.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSnapshot {
    pub nodes: Vec<FileNode>,
    pub edges: Vec<ImportEdge>,
    pub highlighted: Vec<String>,
}

#[derive(Default)]
struct StoreState {
    graph: Option<CodebaseGraph>,
    highlighted: HashSet<String>,
}

/// Authoritative holder of the scanned graph and the live highlight
/// selection.
///
/// Nodes and edges are loaded once at startup and read-only thereafter; the
/// selection is replaced wholesale by the controller and read by the viewer
/// gateway, from different tasks. Lock scopes never cross an await point.
#[derive(Default)]
pub struct GraphStore {
    state: RwLock<StoreState>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(|poisoned| {
            warn!("graph state lock poisoned");
            poisoned.into_inner()
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(|poisoned| {
            warn!("graph state lock poisoned");
            poisoned.into_inner()
        })
    }

    /// One-time load of the scanned graph.
    ///
    /// A second call is a programming-contract violation and fails with
    /// [`GraphError::AlreadyInitialized`]; callers should propagate it
    /// rather than recover.
    pub fn initialize(&self, nodes: Vec<FileNode>, edges: Vec<ImportEdge>) -> Result<()> {
        let graph = CodebaseGraph::from_parts(nodes, edges)?;
        let mut state = self.write_state();
        if state.graph.is_some() {
            return Err(GraphError::AlreadyInitialized);
        }
        log::info!(
            "Graph store initialized: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        state.graph = Some(graph);
        Ok(())
    }

    /// Atomically replace the highlight selection.
    ///
    /// Ids that do not name a scanned node are silently dropped. Returns the
    /// size of the resulting selection.
    pub fn replace_highlight(&self, ids: impl IntoIterator<Item = String>) -> usize {
        let mut state = self.write_state();
        let selection: HashSet<String> = match &state.graph {
            Some(graph) => ids.into_iter().filter(|id| graph.contains(id)).collect(),
            None => HashSet::new(),
        };
        let count = selection.len();
        state.highlighted = selection;
        count
    }

    /// Resolve requested filenames to node ids: every node whose id or label
    /// contains a requested name (case-insensitive), across all names,
    /// de-duplicated in discovery order.
    pub fn resolve_matches(&self, filenames: &[String]) -> Vec<String> {
        let state = self.read_state();
        let Some(graph) = &state.graph else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut matched = Vec::new();
        for name in filenames {
            for id in graph.matching_ids(name) {
                if seen.insert(id.clone()) {
                    matched.push(id);
                }
            }
        }
        matched
    }

    /// Immutable copy of (nodes, edges, highlight selection).
    ///
    /// The selection is sorted so consecutive snapshots of identical state
    /// compare equal.
    pub fn snapshot(&self) -> GraphSnapshot {
        let state = self.read_state();
        let (nodes, edges) = match &state.graph {
            Some(graph) => (graph.nodes(), graph.edges()),
            None => (Vec::new(), Vec::new()),
        };
        let mut highlighted: Vec<String> = state.highlighted.iter().cloned().collect();
        highlighted.sort();
        GraphSnapshot {
            nodes,
            edges,
            highlighted,
        }
    }
}
