//! Breadth-first graph traversals.
//!
//! - [`bfs`] - Plain breadth-first search, every reachable node once
//! - [`ranked_bfs`] - Breadth-first search that refuses to follow edges into a node whose
//!   rank is not strictly greater than the rank of the node it was reached from
//!
//! Both return lazy iterators. A start node that is not part of the graph yields nothing.

use std::collections::VecDeque;

use crate::utils::graph::{NodeId, Ranked, Successors};

/// Breadth-first search iterator over graph nodes.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        let mut visited = vec![false; node_count];
        let mut queue = VecDeque::new();

        if start.index() < node_count {
            visited[start.index()] = true;
            queue.push_back(start);
        }

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if let Some(seen) = self.visited.get_mut(succ.index()) {
                if !*seen {
                    *seen = true;
                    self.queue.push_back(succ);
                }
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first search iterator starting from `start`.
///
/// Each reachable node is yielded exactly once, in order of increasing edge distance, with
/// siblings in edge insertion order. Back edges are followed but never revisit a node.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust
/// use domssa::{analysis::ControlFlowGraph, utils::graph::{algorithms::bfs, NodeId}};
///
/// // entry -> body -> entry (loop)
/// let mut graph = ControlFlowGraph::new();
/// let entry = graph.create_node(0);
/// let body = graph.create_node(1);
/// graph.add_child(entry, body)?;
/// graph.add_child(body, entry)?;
///
/// let order: Vec<NodeId> = bfs(&graph, entry).collect();
/// assert_eq!(order, vec![entry, body]);
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Rank-guarded breadth-first search iterator.
pub struct RankedBfsIterator<'g, G: Successors + Ranked> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    queued: Vec<bool>,
}

impl<'g, G: Successors + Ranked> RankedBfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        let mut queued = vec![false; node_count];
        let mut queue = VecDeque::new();

        if start.index() < node_count {
            queued[start.index()] = true;
            queue.push_back(start);
        }

        RankedBfsIterator {
            graph,
            queue,
            queued,
        }
    }
}

impl<G: Successors + Ranked> Iterator for RankedBfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        let rank = self.graph.node_rank(node);

        for succ in self.graph.successors(node) {
            let Some(queued) = self.queued.get_mut(succ.index()) else {
                continue;
            };
            // A child reached over a back edge stays unmarked so a forward edge can still
            // enqueue it later.
            if !*queued && self.graph.node_rank(succ) > rank {
                *queued = true;
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns a rank-guarded breadth-first search iterator starting from `start`.
///
/// A successor is enqueued only if it has not been enqueued before and its rank is strictly
/// greater than the rank of the node being expanded. Edges into equal or lower ranks are back
/// edges and are not followed. This is the traversal order every whole-graph dominance pass
/// is built on.
///
/// # Examples
///
/// ```rust
/// use domssa::{analysis::ControlFlowGraph, utils::graph::{algorithms::ranked_bfs, NodeId}};
///
/// // a -> b -> c, with c -> b treated as a back edge
/// let mut graph = ControlFlowGraph::new();
/// let a = graph.create_node(0);
/// let b = graph.create_node(1);
/// let c = graph.create_node(2);
/// graph.add_child(a, b)?;
/// graph.add_child(b, c)?;
/// graph.add_child(c, b)?;
///
/// let order: Vec<NodeId> = ranked_bfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c]);
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn ranked_bfs<G: Successors + Ranked>(graph: &G, start: NodeId) -> RankedBfsIterator<'_, G> {
    RankedBfsIterator::new(graph, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::graph::GraphBase;

    struct TestGraph {
        ranks: Vec<u32>,
        children: Vec<Vec<usize>>,
    }

    impl TestGraph {
        fn new(ranks: &[u32], edges: &[(usize, usize)]) -> Self {
            let mut children = vec![Vec::new(); ranks.len()];
            for &(src, dst) in edges {
                children[src].push(dst);
            }
            TestGraph {
                ranks: ranks.to_vec(),
                children,
            }
        }
    }

    impl GraphBase for TestGraph {
        fn node_count(&self) -> usize {
            self.ranks.len()
        }

        fn node_ids(&self) -> impl Iterator<Item = NodeId> {
            (0..self.ranks.len()).map(NodeId::new)
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.children
                .get(node.index())
                .into_iter()
                .flatten()
                .map(|&idx| NodeId::new(idx))
        }
    }

    impl Ranked for TestGraph {
        fn node_rank(&self, node: NodeId) -> u32 {
            self.ranks[node.index()]
        }
    }

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().map(|&idx| NodeId::new(idx)).collect()
    }

    #[test]
    fn test_bfs_diamond() {
        let graph = TestGraph::new(&[0, 1, 1, 2], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let order: Vec<NodeId> = bfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_bfs_follows_back_edges_once() {
        // 0 -> 1 -> 2 -> 0, plus 2 -> 3 where 3 has a lower rank than 2
        let graph = TestGraph::new(&[0, 1, 2, 1], &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let order: Vec<NodeId> = bfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_bfs_invalid_start() {
        let graph = TestGraph::new(&[0], &[]);
        assert_eq!(bfs(&graph, NodeId::new(5)).count(), 0);
    }

    #[test]
    fn test_ranked_bfs_skips_back_edges() {
        let graph = TestGraph::new(&[0, 1, 2, 1], &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let order: Vec<NodeId> = ranked_bfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_ranked_bfs_visits_merge_once() {
        let graph = TestGraph::new(&[0, 1, 1, 2], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let order: Vec<NodeId> = ranked_bfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_ranked_bfs_back_edge_then_forward_edge() {
        // 3 is first seen from 2 over a rank-lowering edge, then reached properly from 1
        let graph = TestGraph::new(&[0, 1, 4, 2], &[(0, 2), (0, 1), (2, 3), (1, 3)]);
        let order: Vec<NodeId> = ranked_bfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 2, 1, 3]));
    }

    #[test]
    fn test_ranked_bfs_invalid_start() {
        let graph = TestGraph::new(&[0, 1], &[(0, 1)]);
        assert_eq!(ranked_bfs(&graph, NodeId::new(9)).count(), 0);
    }
}
