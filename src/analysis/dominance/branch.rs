//! Last branch dominators.
//!
//! The last branch dominator of a node is its nearest enclosing branch point: the closest
//! node above it that has more than one child, or the entry. It bounds the search space of
//! [`get_imd_dom`](super::get_imd_dom).
//!
//! The pass visits nodes in [`assemble_list`](ControlFlowGraph::assemble_list) order. For a
//! node `n` and each child `c`:
//!
//! - the first time `c` is reached it takes `n` if `n` branches or is the entry, otherwise it
//!   inherits the last branch dominator of `n`
//! - when `c` is reached again, both candidate chains are walked upward until they meet, and
//!   the meeting point becomes the last branch dominator of `c`
//!
//! Edges that lead back to the entry are ignored, so the entry never has a last branch
//! dominator.

use log::{debug, trace};

use crate::{analysis::cfg::ControlFlowGraph, utils::graph::NodeId, Result};

/// Computes the last branch dominator of every node reachable from `root`.
///
/// Previous results on the affected nodes are cleared first, so running the pass twice
/// yields the same result.
///
/// # Errors
///
/// Returns [`Error::NullNode`](crate::Error::NullNode) if `root` is not part of the graph.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::{set_last_brh_dom, ControlFlowGraph};
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
///
/// assert_eq!(graph.last_branch_dominator(a), None);
/// assert_eq!(graph.last_branch_dominator(b), Some(a));
/// assert_eq!(graph.last_branch_dominator(c), Some(a));
/// assert_eq!(graph.last_branch_dominator(d), Some(a));
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn set_last_brh_dom(graph: &mut ControlFlowGraph, root: NodeId) -> Result<()> {
    graph.require(root, "set_last_brh_dom")?;
    let order = graph.assemble_list(root)?;

    for &node in &order {
        let children = graph.children(node).to_vec();
        for id in std::iter::once(node).chain(children) {
            if let Some(entry) = graph.node_mut(id) {
                entry.last_branch_dominator = None;
            }
        }
    }

    for &node in &order {
        let inherited = graph.last_branch_dominator(node);
        let branches = node == root || graph.children(node).len() > 1;
        let children = graph.children(node).to_vec();

        for child in children {
            if child == root {
                continue;
            }

            let resolved = match graph.last_branch_dominator(child) {
                None if branches => node,
                None => inherited.unwrap_or(root),
                Some(existing) => {
                    find_same_node(graph, root, inherited.unwrap_or(root), existing)
                }
            };

            trace!("last branch dominator of {child} via {node}: {resolved}");
            let child_node = graph.require_mut(child, "set_last_brh_dom")?;
            child_node.last_branch_dominator = Some(resolved);
        }
    }

    debug!(
        "last branch dominators set for {} nodes from {root}",
        order.len()
    );
    Ok(())
}

/// Walks two last branch dominator chains upward until they meet.
///
/// The candidate with the higher rank steps first, the first candidate on equal ranks. The
/// entry never steps, and a chain that runs out resolves to the entry.
fn find_same_node(graph: &ControlFlowGraph, root: NodeId, first: NodeId, second: NodeId) -> NodeId {
    let step = |id: NodeId| graph.last_branch_dominator(id).unwrap_or(root);

    let (mut a, mut b) = (first, second);
    // every step moves one chain strictly closer to the entry
    for _ in 0..=2 * graph.node_count() {
        if a == b {
            return a;
        }

        if a == root {
            b = step(b);
        } else if b == root {
            a = step(a);
        } else if graph.rank(a) >= graph.rank(b) {
            a = step(a);
        } else {
            b = step(b);
        }
    }

    root
}
