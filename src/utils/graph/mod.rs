//! Generic graph infrastructure for control flow analysis.
//!
//! - [`NodeId`] - Strongly-typed arena index of a node
//! - [`GraphBase`], [`Successors`], [`Predecessors`], [`Ranked`] - Traits that traversal
//!   algorithms are written against
//! - [`algorithms`] - Plain and rank-guarded breadth-first traversals
//!
//! The graph itself, [`ControlFlowGraph`](crate::analysis::ControlFlowGraph), lives in the
//! analysis layer and implements every trait here.

pub mod algorithms;
mod node;
mod traits;

pub use node::NodeId;
pub use traits::{GraphBase, Predecessors, Ranked, Successors};
