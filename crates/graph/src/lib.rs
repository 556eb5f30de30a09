//! # Repograph Graph
//!
//! In-memory model of a repository's file structure and import relationships,
//! plus the live highlight selection shared between the controller and the
//! viewer gateway.
//!
//! ## Architecture
//!
//! ```text
//! FileNode[] + ImportEdge[]          (produced once, by the scanner)
//!     │
//!     ├──> CodebaseGraph (petgraph)
//!     │      ├─ Nodes: source files (id, label, category)
//!     │      └─ Edges: suspected import dependencies
//!     │
//!     └──> GraphStore
//!            ├─ initialize: one-time load of the scanned graph
//!            ├─ replace_highlight: full replace of the active selection
//!            └─ snapshot: immutable copy for new viewers
//! ```
//!
//! The store is a single owned instance injected into both the controller
//! and the gateway at startup; it holds no connection state.

mod category;
mod error;
mod store;
mod types;

pub use category::NodeCategory;
pub use error::{GraphError, Result};
pub use store::{GraphSnapshot, GraphStore};
pub use types::{CodebaseGraph, FileNode, ImportEdge};
