//! Trait definitions for graph abstractions.
//!
//! Traversals are written against these traits rather than against
//! [`ControlFlowGraph`](crate::analysis::ControlFlowGraph) directly, so they can be tested on
//! small hand-built graphs.
//!
//! - [`GraphBase`] - Node count and node iteration
//! - [`Successors`] - Outgoing edges, in insertion order
//! - [`Predecessors`] - Incoming edges
//! - [`Ranked`] - Caller-assigned topological depth of each node

use crate::utils::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph, reachable or not.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in ascending index order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of `node`.
    ///
    /// Successors are yielded in the order their edges were added. The order is significant
    /// for every breadth-first analysis built on top of this trait. An identifier that is not
    /// part of the graph has no successors.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessors of `node`, one entry per incoming edge.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs whose nodes carry a rank.
///
/// The rank is a topological depth hint assigned by whoever builds the graph: the entry has
/// rank 0 and a forward edge leads to a strictly higher rank. An edge to a node of equal or
/// lower rank is treated as a back edge by [`ranked_bfs`](super::algorithms::ranked_bfs).
///
/// # Examples
///
/// ```rust
/// use domssa::{analysis::ControlFlowGraph, utils::graph::Ranked};
///
/// let mut graph = ControlFlowGraph::new();
/// let entry = graph.create_node(0);
/// let body = graph.create_node(1);
///
/// assert_eq!(graph.node_rank(entry), 0);
/// assert_eq!(graph.node_rank(body), 1);
/// ```
pub trait Ranked: GraphBase {
    /// Returns the rank of `node`.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn node_rank(&self, node: NodeId) -> u32;
}
