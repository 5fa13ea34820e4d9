//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when the wiring is structurally invalid.
//! An unroutable graph is a configuration bug: compilation must fail loudly
//! at construction time, never degrade at invoke time.

use thiserror::Error;

/// Error when compiling a state graph.
///
/// Validation ensures every id in edges (except START/END) exists in the node
/// map, the entry is unique, every router label resolves to a registered
/// node, each node has exactly one way out, and no cycle is reachable.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// A node id in an edge or conditional-edge map was not registered via
    /// `add_node` (and is not START/END).
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No edge has from_id == START, or more than one such edge.
    #[error("graph must have exactly one edge from START")]
    MissingEntry,

    /// A router label has no entry in the conditional edge map (includes the
    /// default label).
    #[error("router on node '{node}' can produce label '{label}' but no edge maps it")]
    UnroutedLabel { node: String, label: String },

    /// A node has more than one static outgoing edge, or both a static edge
    /// and conditional edges.
    #[error("node '{0}' has conflicting outgoing edges")]
    ConflictingEdges(String),

    /// A node has no outgoing edge at all; wire it to END explicitly.
    #[error("node '{0}' has no outgoing edge (add an edge to END)")]
    NoOutgoingEdge(String),

    /// The wiring contains a cycle reachable from the entry.
    #[error("cycle detected through node '{0}'")]
    CycleDetected(String),
}
