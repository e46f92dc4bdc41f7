use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every fallible operation validates its own arguments before touching any state, so an
/// `Err` always means "nothing was modified". The variants split into two groups:
///
/// ## Argument Errors
/// - [`Error::NullContainer`] - A sequence that should be mutated is absent
/// - [`Error::NullList`] - A required list argument (statement block, version table) is absent
/// - [`Error::NullElement`] - An item to insert into a sequence is absent
/// - [`Error::EmptyContainer`] - Removal was requested from an empty sequence
/// - [`Error::NullNode`] - A node id does not name a node of the graph
/// - [`Error::NullSubscript`] - A required variable argument is absent
///
/// ## Analysis Errors
/// - [`Error::GraphError`] - The analysed graph violates an invariant checked by the pipeline
///
/// These are programmer errors rather than expected runtime states. A node that legitimately
/// has no modified variables yields an empty `Ok` result, never an error.
///
/// # Examples
///
/// ```rust
/// use domssa::{analysis::ControlFlowGraph, utils::graph::NodeId, Error};
///
/// let mut graph = ControlFlowGraph::new();
/// let entry = graph.create_node(0);
///
/// match graph.add_child(entry, NodeId::new(7)) {
///     Err(Error::NullNode(operation)) => assert_eq!(operation, "add_child"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The sequence to operate on is absent.
    #[error("Sequence cannot be absent")]
    NullContainer,

    /// A required list argument is absent.
    ///
    /// The associated value names the operation that rejected the input.
    #[error("Input list to {0} is absent")]
    NullList(&'static str),

    /// The element to insert is absent.
    #[error("Element cannot be absent")]
    NullElement,

    /// Removal was requested from a sequence with no elements.
    #[error("Nothing to remove, the sequence is empty")]
    EmptyContainer,

    /// A node argument does not refer to a node of the graph.
    ///
    /// The associated value names the operation that rejected the input.
    #[error("Input node to {0} is absent")]
    NullNode(&'static str),

    /// A required variable argument is absent.
    ///
    /// The associated value names the operation that rejected the input.
    #[error("Input subscript to {0} is absent")]
    NullSubscript(&'static str),

    /// The graph does not satisfy an invariant required by the analysis.
    #[error("{0}")]
    GraphError(String),
}
