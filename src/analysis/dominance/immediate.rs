//! Immediate dominators bounded by the last branch dominator.
//!
//! The predecessors of a node are searched only among the nodes reachable from its last
//! branch dominator. A single predecessor in that scope is the immediate dominator. Several
//! distinct predecessors mean the node is a merge point, and its last branch dominator is
//! reported instead.
//!
//! This is not the Lengauer-Tarjan algorithm. It is exact for reducible graphs built from
//! structured branching; on irreducible graphs the result may be a dominator that is not the
//! closest one.

use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::{
    analysis::cfg::ControlFlowGraph,
    utils::graph::{NodeId, Predecessors},
    Result,
};

/// Computes the immediate dominator of `node` without storing it.
///
/// Reads the last branch dominators written by
/// [`set_last_brh_dom`](super::set_last_brh_dom). Returns `None` for a rank 0 node and for a
/// node without a last branch dominator. Self loops do not count as predecessors, and repeated
/// edges from the same predecessor count once.
///
/// # Errors
///
/// Returns [`Error::NullNode`](crate::Error::NullNode) if `node` is not part of the graph.
pub fn get_imd_dom(graph: &ControlFlowGraph, node: NodeId) -> Result<Option<NodeId>> {
    let entry = graph.require(node, "get_imd_dom")?;
    if entry.rank() == 0 {
        return Ok(None);
    }
    let Some(scope_root) = entry.last_branch_dominator() else {
        return Ok(None);
    };

    let scope: HashSet<NodeId> = graph.assemble_list(scope_root)?.into_iter().collect();

    let mut found = None;
    for candidate in graph.predecessors(node) {
        if candidate == node || !scope.contains(&candidate) || found == Some(candidate) {
            continue;
        }
        if found.is_some() {
            trace!("{node} merges several paths, falling back to {scope_root}");
            return Ok(Some(scope_root));
        }
        found = Some(candidate);
    }

    if found.is_none() {
        warn!("{node} has no predecessor reachable from {scope_root}");
        return Ok(Some(scope_root));
    }
    Ok(found)
}

/// Computes and stores the immediate dominator of every node reachable from `root`.
///
/// Each result is recomputed from the current last branch dominators, so running the pass
/// twice yields the same result.
///
/// # Errors
///
/// Returns [`Error::NullNode`](crate::Error::NullNode) if `root` is not part of the graph.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::{set_all_imd_dom, set_last_brh_dom, ControlFlowGraph};
///
/// // a -> b -> {c, d}
/// let mut graph = ControlFlowGraph::new();
/// let a = graph.create_node(0);
/// let b = graph.create_node(1);
/// let c = graph.create_node(2);
/// let d = graph.create_node(2);
/// for (parent, child) in [(a, b), (b, c), (b, d)] {
///     graph.add_child(parent, child)?;
/// }
///
/// set_last_brh_dom(&mut graph, a)?;
/// set_all_imd_dom(&mut graph, a)?;
///
/// assert_eq!(graph.immediate_dominator(a), None);
/// assert_eq!(graph.immediate_dominator(b), Some(a));
/// assert_eq!(graph.immediate_dominator(d), Some(b));
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn set_all_imd_dom(graph: &mut ControlFlowGraph, root: NodeId) -> Result<()> {
    graph.require(root, "set_all_imd_dom")?;
    let order = graph.assemble_list(root)?;

    let mut results = Vec::with_capacity(order.len());
    for &node in &order {
        results.push((node, get_imd_dom(graph, node)?));
    }

    for (node, dominator) in results {
        trace!("immediate dominator of {node}: {dominator:?}");
        graph
            .require_mut(node, "set_all_imd_dom")?
            .immediate_dominator = dominator;
    }

    debug!(
        "immediate dominators set for {} nodes from {root}",
        order.len()
    );
    Ok(())
}
