//! State graph: nodes + static and conditional edges, compile and invoke.
//!
//! Add nodes with `add_node`, wire static edges with `add_edge(from, to)`
//! using `START` and `END` for graph entry/exit, attach a router with
//! `add_conditional_edges`, then `compile` or `compile_with_checkpointer` to
//! get a `CompiledStateGraph`.

mod compile_error;
mod compiled;
mod node;
mod passthrough;
mod router;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use node::Node;
pub use passthrough::Passthrough;
pub use router::Router;
pub use state_graph::{StateGraph, END, START};
