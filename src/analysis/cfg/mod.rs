//! Control Flow Graph (CFG) construction.
//!
//! # Key Components
//!
//! - [`ControlFlowGraph`] - Arena owning every node, addressed by
//!   [`NodeId`](crate::utils::graph::NodeId)
//! - [`CfgNode`] - Rank, statement block, structural edges and dominance results
//!
//! # Edges
//!
//! Edges are stored twice: as an ordered child list on the source and as a predecessor list
//! on the target. The child order decides the order of every breadth-first pass. A node also
//! remembers its most recently wired parent, which is a traversal hint only.
//!
//! # Ranks
//!
//! Every node carries a caller-assigned rank. The entry has rank 0 and forward edges lead to
//! strictly higher ranks, so an edge into an equal or lower rank is a back edge.
//!
//! # Examples
//!
//! ```rust
//! use domssa::analysis::ControlFlowGraph;
//!
//! let mut graph = ControlFlowGraph::new();
//! let header = graph.create_node(0);
//! let body = graph.create_node(1);
//! graph.add_child(header, body)?;
//! graph.add_child(body, header)?;
//!
//! // The back edge is not followed
//! assert_eq!(graph.assemble_list(header)?, vec![header, body]);
//! assert_eq!(graph.assemble_list(body)?, vec![body]);
//! # Ok::<(), domssa::Error>(())
//! ```

mod graph;
mod node;

pub use graph::ControlFlowGraph;
pub use node::CfgNode;
