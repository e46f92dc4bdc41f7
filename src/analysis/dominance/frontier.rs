//! Dominance frontiers.
//!
//! The frontier of `node` is the set of nodes that `node` does not strictly dominate but that
//! have a predecessor it does dominate. It is found with a worklist walk from `node`: a child
//! whose immediate dominator chain, followed up to the rank of `node`, lands on `node` is
//! dominated and expanded further; any other child is a frontier member and is not expanded.

use std::collections::HashSet;

use log::{debug, trace};

use crate::{
    analysis::cfg::ControlFlowGraph,
    utils::{graph::NodeId, Sequence},
    Result,
};

/// Follows the stored immediate dominator chain of `child` until its rank is at most `rank`.
///
/// Returns `None` if the chain ends before that.
fn scoped_dominator(graph: &ControlFlowGraph, child: NodeId, rank: u32) -> Option<NodeId> {
    let mut dominator = graph.immediate_dominator(child)?;
    for _ in 0..graph.node_count() {
        if graph.rank(dominator)? <= rank {
            return Some(dominator);
        }
        dominator = graph.immediate_dominator(dominator)?;
    }
    Some(dominator)
}

/// Computes the dominance frontier of `node` without storing it.
///
/// Reads the immediate dominators stored by [`set_all_imd_dom`](super::set_all_imd_dom).
/// Members appear in discovery order, without duplicates.
///
/// # Errors
///
/// Returns [`Error::NullNode`](crate::Error::NullNode) if `node` is not part of the graph.
pub fn get_node_dom_frontiers(graph: &ControlFlowGraph, node: NodeId) -> Result<Vec<NodeId>> {
    let rank = graph.require(node, "get_node_dom_frontiers")?.rank();

    let mut frontier = Vec::new();
    let mut queued = HashSet::from([node]);
    let mut worklist = Sequence::new();
    worklist.push_back(node);

    while let Ok(current) = worklist.pop_front() {
        for &child in graph.children(current) {
            if scoped_dominator(graph, child, rank) == Some(node) {
                if queued.insert(child) {
                    worklist.push_back(child);
                }
            } else if !frontier.contains(&child) {
                trace!("{child} is in the frontier of {node}");
                frontier.push(child);
            }
        }
    }

    Ok(frontier)
}

/// Computes and stores the dominance frontier of every node reachable from `root`.
///
/// Back edges are followed when collecting the nodes, so a loop body reached only over its
/// latch still gets its frontier. Returns the union of all frontiers in discovery order,
/// without duplicates.
///
/// # Errors
///
/// Returns [`Error::NullNode`](crate::Error::NullNode) if `root` is not part of the graph.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::{
///     get_all_dom_frontiers, set_all_imd_dom, set_last_brh_dom, ControlFlowGraph,
/// };
///
/// // a -> {b, c} -> d -> a
/// let mut graph = ControlFlowGraph::new();
/// let a = graph.create_node(0);
/// let b = graph.create_node(1);
/// let c = graph.create_node(1);
/// let d = graph.create_node(2);
/// for (parent, child) in [(a, b), (a, c), (b, d), (c, d), (d, a)] {
///     graph.add_child(parent, child)?;
/// }
///
/// set_last_brh_dom(&mut graph, a)?;
/// set_all_imd_dom(&mut graph, a)?;
/// let union = get_all_dom_frontiers(&mut graph, a)?;
///
/// assert_eq!(union, vec![a, d]);
/// assert_eq!(graph.dominance_frontier(a), &[a]);
/// assert_eq!(graph.dominance_frontier(b), &[d]);
/// assert_eq!(graph.dominance_frontier(d), &[a]);
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn get_all_dom_frontiers(graph: &mut ControlFlowGraph, root: NodeId) -> Result<Vec<NodeId>> {
    graph.require(root, "get_all_dom_frontiers")?;
    let nodes = graph.reachable(root)?;

    let mut union = Vec::new();
    for &node in &nodes {
        let frontier = get_node_dom_frontiers(graph, node)?;
        for &member in &frontier {
            if !union.contains(&member) {
                union.push(member);
            }
        }
        graph
            .require_mut(node, "get_all_dom_frontiers")?
            .dominance_frontier = frontier;
    }

    debug!(
        "dominance frontiers of {} nodes from {root}: {} distinct members",
        nodes.len(),
        union.len()
    );
    Ok(union)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::dominance::{set_all_imd_dom, set_last_brh_dom},
        test::{build_graph, diamond_with_back_edge, nested_branches},
        Error,
    };

    fn prepared(mut graph: ControlFlowGraph, root: NodeId) -> ControlFlowGraph {
        set_last_brh_dom(&mut graph, root).unwrap();
        set_all_imd_dom(&mut graph, root).unwrap();
        graph
    }

    #[test]
    fn test_diamond_with_back_edge() {
        let (graph, [a, b, c, d]) = diamond_with_back_edge();
        let graph = prepared(graph, a);

        assert_eq!(get_node_dom_frontiers(&graph, a).unwrap(), vec![a]);
        assert_eq!(get_node_dom_frontiers(&graph, b).unwrap(), vec![d]);
        assert_eq!(get_node_dom_frontiers(&graph, c).unwrap(), vec![d]);
        assert_eq!(get_node_dom_frontiers(&graph, d).unwrap(), vec![a]);
    }

    #[test]
    fn test_nested_branches() {
        let (graph, [a, b, c, d, e, f]) = nested_branches();
        let mut graph = prepared(graph, a);

        let union = get_all_dom_frontiers(&mut graph, a).unwrap();

        assert!(graph.dominance_frontier(a).is_empty());
        assert_eq!(graph.dominance_frontier(b), &[f]);
        assert_eq!(graph.dominance_frontier(c), &[e]);
        assert_eq!(graph.dominance_frontier(d), &[e]);
        assert_eq!(graph.dominance_frontier(e), &[f]);
        assert!(graph.dominance_frontier(f).is_empty());
        assert_eq!(union, vec![f, e]);
    }

    #[test]
    fn test_if_then_else_join() {
        // a -> {b, c}; b -> e; c -> e; e -> f
        let (graph, n) = build_graph(
            &[0, 1, 1, 2, 3],
            &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)],
        );
        let mut graph = prepared(graph, n[0]);
        get_all_dom_frontiers(&mut graph, n[0]).unwrap();

        assert_eq!(graph.dominance_frontier(n[1]), &[n[3]]);
        assert_eq!(graph.dominance_frontier(n[2]), &[n[3]]);
        assert!(graph.dominance_frontier(n[3]).is_empty());
        assert!(graph.dominance_frontier(n[4]).is_empty());
        assert!(graph.dominance_frontier(n[0]).is_empty());
    }

    #[test]
    fn test_self_loop_is_own_frontier() {
        // a -> b, b -> b, b -> c
        let (graph, n) = build_graph(&[0, 1, 2], &[(0, 1), (1, 1), (1, 2)]);
        let graph = prepared(graph, n[0]);

        assert_eq!(get_node_dom_frontiers(&graph, n[1]).unwrap(), vec![n[1]]);
        assert!(get_node_dom_frontiers(&graph, n[2]).unwrap().is_empty());
    }

    #[test]
    fn test_without_dominators_every_child_escapes() {
        let (graph, [a, b, c, _]) = diamond_with_back_edge();
        assert_eq!(get_node_dom_frontiers(&graph, a).unwrap(), vec![b, c]);
    }

    #[test]
    fn test_all_frontiers_recompute() {
        let (graph, [a, b, _, d]) = diamond_with_back_edge();
        let mut graph = prepared(graph, a);

        let first = get_all_dom_frontiers(&mut graph, a).unwrap();
        let second = get_all_dom_frontiers(&mut graph, a).unwrap();
        assert_eq!(first, second);
        assert_eq!(graph.dominance_frontier(b), &[d]);
    }

    #[test]
    fn test_unknown_nodes() {
        let (mut graph, _) = diamond_with_back_edge();
        let ghost = NodeId::new(11);
        assert_eq!(
            get_node_dom_frontiers(&graph, ghost),
            Err(Error::NullNode("get_node_dom_frontiers"))
        );
        assert_eq!(
            get_all_dom_frontiers(&mut graph, ghost),
            Err(Error::NullNode("get_all_dom_frontiers"))
        );
    }
}
