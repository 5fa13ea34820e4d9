//! Integration tests for StateGraph: compile validation and routed invoke.
//!
//! Tests are split into modules under `state_graph/`:
//! - `common`: shared types (test nodes and routers)
//! - `compile_fail`: compile error cases
//! - `invoke`: routed execution and append-only behavior

#[path = "state_graph/common.rs"]
mod common;

#[path = "state_graph/compile_fail.rs"]
mod compile_fail;

#[path = "state_graph/invoke.rs"]
mod invoke;
