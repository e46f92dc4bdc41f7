//! Control flow graph node.

use crate::{analysis::ssa::Block, utils::graph::NodeId};

/// A vertex of a [`ControlFlowGraph`](super::ControlFlowGraph).
///
/// A node owns its statement block and refers to every other node by [`NodeId`]. Structural
/// fields are written by [`ControlFlowGraph::add_child`](super::ControlFlowGraph::add_child);
/// the dominance fields are written by the passes in
/// [`analysis::dominance`](crate::analysis::dominance).
#[derive(Debug, Clone, Default)]
pub struct CfgNode {
    pub(crate) rank: u32,
    pub(crate) block: Block,
    pub(crate) parents: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) last_branch_dominator: Option<NodeId>,
    pub(crate) immediate_dominator: Option<NodeId>,
    pub(crate) dominance_frontier: Vec<NodeId>,
}

impl CfgNode {
    /// Creates an empty node at `rank`.
    #[must_use]
    pub fn new(rank: u32) -> Self {
        CfgNode {
            rank,
            ..CfgNode::default()
        }
    }

    /// Topological depth hint. The entry has rank 0.
    #[must_use]
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// The statements of this node in program order.
    #[must_use]
    pub fn block(&self) -> &Block {
        &self.block
    }

    /// Mutable access to the statements of this node.
    pub fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    /// Every node that lists this node as a child, one entry per edge.
    #[must_use]
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    /// The most recently wired parent.
    ///
    /// Only a traversal hint. Dominance never depends on which parent was wired last.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Number of incoming edges.
    #[must_use]
    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    /// Successors in the order they were added.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Nearest enclosing branch point, `None` for the entry or before analysis.
    #[must_use]
    pub fn last_branch_dominator(&self) -> Option<NodeId> {
        self.last_branch_dominator
    }

    /// Immediate dominator, `None` for the entry or before analysis.
    #[must_use]
    pub fn immediate_dominator(&self) -> Option<NodeId> {
        self.immediate_dominator
    }

    /// Cached dominance frontier, without duplicates.
    #[must_use]
    pub fn dominance_frontier(&self) -> &[NodeId] {
        &self.dominance_frontier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = CfgNode::new(3);
        assert_eq!(node.rank(), 3);
        assert!(node.block().is_empty());
        assert!(node.children().is_empty());
        assert!(node.parents().is_empty());
        assert_eq!(node.parent(), None);
        assert_eq!(node.parent_count(), 0);
        assert_eq!(node.last_branch_dominator(), None);
        assert_eq!(node.immediate_dominator(), None);
        assert!(node.dominance_frontier().is_empty());
    }
}
