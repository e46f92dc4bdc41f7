//! Node identifier for arena-backed graphs.
//!
//! Every node of a [`ControlFlowGraph`](crate::analysis::ControlFlowGraph) lives in one
//! vector and is referred to by its position. Child lists, parent lists, dominator fields,
//! frontier entries and branch targets all store a [`NodeId`] instead of a reference, so node
//! identity is index equality and stays stable while the arena grows.

use std::fmt;

/// A strongly-typed index of a node inside a graph arena.
///
/// Identifiers are handed out sequentially from 0 by
/// [`ControlFlowGraph::create_node`](crate::analysis::ControlFlowGraph::create_node). An
/// identifier built by hand that is not backed by a node is reported as
/// [`Error::NullNode`](crate::Error::NullNode) by every graph operation that receives it.
///
/// # Examples
///
/// ```rust
/// use domssa::{analysis::ControlFlowGraph, utils::graph::NodeId};
///
/// let mut graph = ControlFlowGraph::new();
/// let entry = graph.create_node(0);
/// let next = graph.create_node(1);
///
/// assert_eq!(entry, NodeId::new(0));
/// assert_ne!(entry, next);
/// assert_eq!(next.to_string(), "n1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw arena index.
    ///
    /// Mostly useful in tests and for naming branch targets before the target node exists.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
