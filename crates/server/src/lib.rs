//! # Repograph Server
//!
//! Glue between the three boundaries of the live graph service:
//!
//! - [`tools`] — the MCP controller interface (one tool:
//!   `highlight_architecture`), driven sequentially over stdio.
//! - [`feed`] — the broadcast channel handing highlight changes from the
//!   command context to the connection context.
//! - [`gateway`] — the axum WebSocket endpoint hosting viewer connections.
//!
//! The command context and the connection context never share a call stack:
//! a highlight command replaces the selection in the [`repograph_graph::GraphStore`],
//! publishes the new selection to the feed, and returns; delivery to viewers
//! happens on the gateway's own tasks, fire-and-forget.

pub mod feed;
pub mod gateway;
pub mod tools;
