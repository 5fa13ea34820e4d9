//! State graph builder: nodes + explicit edges (from → to) + conditional edges.
//!
//! Add nodes with `add_node`, wire the chain with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit, attach routers with
//! `add_conditional_edges(from, router, [(label, to)...])`, then `compile` or
//! `compile_with_checkpointer` to get a `CompiledStateGraph`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::{CompiledStateGraph, ConditionalEdges};
use crate::graph::node::Node;
use crate::graph::router::Router;
use crate::memory::Checkpointer;
use crate::state::GraphState;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// State graph builder: nodes plus static and conditional edges.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge` /
/// `add_conditional_edges`, then `compile()` to obtain an executable graph.
/// Validation happens eagerly at compile: an unroutable graph is a
/// configuration bug and must never reach `invoke`.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>` and `Arc<dyn Router<S>>`;
/// produces `CompiledStateGraph<S>`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Static edges (from_id, to_id).
    edges: Vec<(String, String)>,
    /// Conditional edges keyed by source node id.
    conditional: HashMap<String, ConditionalEdges<S>>,
}

impl<S> Default for StateGraph<S>
where
    S: GraphState,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: GraphState,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            conditional: HashMap::new(),
        }
    }

    /// Adds a node; id must be unique. Replaces if same id.
    ///
    /// Returns `&mut Self` for method chaining. The node is stored as
    /// `Arc<dyn Node<S>>`; use `add_edge` or `add_conditional_edges` to wire it.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds a static edge from `from_id` to `to_id`.
    ///
    /// Use `START` for graph entry and `END` for graph exit. Both ids (except
    /// START/END) must be registered via `add_node` before `compile()`.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Attaches a router to `from_id`: after that node runs, the router picks
    /// a label and execution continues at the mapped node id.
    ///
    /// The map must cover every label the router can produce (including the
    /// default); `compile()` rejects any gap with `UnroutedLabel`.
    pub fn add_conditional_edges<I, L, T>(
        &mut self,
        from_id: impl Into<String>,
        router: Arc<dyn Router<S>>,
        targets: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        let targets = targets
            .into_iter()
            .map(|(label, to)| (label.into(), to.into()))
            .collect();
        self.conditional
            .insert(from_id.into(), ConditionalEdges { router, targets });
        self
    }

    /// Builds the executable graph without persistence.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(None)
    }

    /// Builds the executable graph with a checkpointer: when `invoke` is
    /// called with a `config.thread_id`, the final state is saved after the run.
    pub fn compile_with_checkpointer(
        self,
        checkpointer: Arc<dyn Checkpointer<S>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(Some(checkpointer))
    }

    fn compile_internal(
        self,
        checkpointer: Option<Arc<dyn Checkpointer<S>>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }
        for (from, cond) in &self.conditional {
            if !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            for to in cond.targets.values() {
                if to != END && !self.nodes.contains_key(to) {
                    return Err(CompilationError::NodeNotFound(to.clone()));
                }
            }
        }

        let start_edges: Vec<_> = self
            .edges
            .iter()
            .filter(|(f, _)| f == START)
            .map(|(_, t)| t.clone())
            .collect();
        if start_edges.len() != 1 {
            return Err(CompilationError::MissingEntry);
        }
        let entry = start_edges.into_iter().next().unwrap();
        if entry == END {
            return Err(CompilationError::MissingEntry);
        }

        // Every label a router can produce, plus its default, must be mapped.
        for (from, cond) in &self.conditional {
            let mut required: Vec<String> = cond.router.labels();
            let default = cond.router.default_label();
            if !required.contains(&default) {
                required.push(default);
            }
            for label in required {
                if !cond.targets.contains_key(&label) {
                    return Err(CompilationError::UnroutedLabel {
                        node: from.clone(),
                        label,
                    });
                }
            }
        }

        // One way out per node: a single static edge xor conditional edges.
        let mut next: HashMap<String, String> = HashMap::new();
        for (from, to) in &self.edges {
            if from == START {
                continue;
            }
            if next.insert(from.clone(), to.clone()).is_some() {
                return Err(CompilationError::ConflictingEdges(from.clone()));
            }
        }
        for from in self.conditional.keys() {
            if next.contains_key(from) {
                return Err(CompilationError::ConflictingEdges(from.clone()));
            }
        }
        for id in self.nodes.keys() {
            if !next.contains_key(id) && !self.conditional.contains_key(id) {
                return Err(CompilationError::NoOutgoingEdge(id.clone()));
            }
        }

        self.check_acyclic(&entry, &next)?;

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            entry,
            next,
            conditional: self.conditional,
            checkpointer,
        })
    }

    /// Depth-first walk over all successors reachable from the entry; a back
    /// edge means the wiring loops and can never reach a terminal state.
    fn check_acyclic(
        &self,
        entry: &str,
        next: &HashMap<String, String>,
    ) -> Result<(), CompilationError> {
        let successors = |id: &str| -> Vec<String> {
            let mut out = Vec::new();
            if let Some(to) = next.get(id) {
                if to != END {
                    out.push(to.clone());
                }
            }
            if let Some(cond) = self.conditional.get(id) {
                for to in cond.targets.values() {
                    if to != END {
                        out.push(to.clone());
                    }
                }
            }
            out
        };

        let mut visiting: HashSet<String> = HashSet::new();
        let mut done: HashSet<String> = HashSet::new();
        // (node, child index) stack for an iterative DFS.
        let mut stack: Vec<(String, Vec<String>, usize)> = Vec::new();
        let entry_succ = successors(entry);
        visiting.insert(entry.to_string());
        stack.push((entry.to_string(), entry_succ, 0));

        while let Some((id, succ, idx)) = stack.pop() {
            if idx < succ.len() {
                let child = succ[idx].clone();
                stack.push((id, succ, idx + 1));
                if visiting.contains(&child) {
                    return Err(CompilationError::CycleDetected(child));
                }
                if !done.contains(&child) {
                    let child_succ = successors(&child);
                    visiting.insert(child.clone());
                    stack.push((child, child_succ, 0));
                }
            } else {
                visiting.remove(&id);
                done.insert(id);
            }
        }
        Ok(())
    }
}
