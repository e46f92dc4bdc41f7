//! Dominator engine.
//!
//! Dominance is computed in three passes over the nodes reachable from an entry node, each
//! storing its results on the nodes of the [`ControlFlowGraph`]:
//!
//! 1. [`set_last_brh_dom`] - Nearest enclosing branch point of every node
//! 2. [`set_all_imd_dom`] - Immediate dominators, searched below the last branch dominator
//! 3. [`get_all_dom_frontiers`] - Dominance frontiers from the stored immediate dominators
//!
//! [`compute_dominance`] runs all three in order. The per-node queries [`get_imd_dom`] and
//! [`get_node_dom_frontiers`] compute a single result without storing it.
//!
//! # Scope
//!
//! Immediate dominators are exact for reducible graphs built from structured branching. A
//! node with several predecessors below its last branch dominator is assigned that last
//! branch dominator, which may not be the closest dominator on irreducible graphs.

mod branch;
mod frontier;
mod immediate;

pub use branch::set_last_brh_dom;
pub use frontier::{get_all_dom_frontiers, get_node_dom_frontiers};
pub use immediate::{get_imd_dom, set_all_imd_dom};

use crate::{analysis::cfg::ControlFlowGraph, utils::graph::NodeId, Result};

/// Runs the three dominance passes from `root` and returns the union of all frontiers.
///
/// # Errors
///
/// Returns [`Error::NullNode`](crate::Error::NullNode) if `root` is not part of the graph.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::{compute_dominance, ControlFlowGraph};
///
/// // a -> {b, c} -> d
/// let mut graph = ControlFlowGraph::new();
/// let a = graph.create_node(0);
/// let b = graph.create_node(1);
/// let c = graph.create_node(1);
/// let d = graph.create_node(2);
/// for (parent, child) in [(a, b), (a, c), (b, d), (c, d)] {
///     graph.add_child(parent, child)?;
/// }
///
/// let union = compute_dominance(&mut graph, a)?;
///
/// assert_eq!(union, vec![d]);
/// assert_eq!(graph.immediate_dominator(d), Some(a));
/// assert_eq!(graph.dominance_frontier(c), &[d]);
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn compute_dominance(graph: &mut ControlFlowGraph, root: NodeId) -> Result<Vec<NodeId>> {
    graph.require(root, "compute_dominance")?;
    set_last_brh_dom(graph, root)?;
    set_all_imd_dom(graph, root)?;
    get_all_dom_frontiers(graph, root)
}
