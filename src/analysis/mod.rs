//! Control flow analysis and SSA renaming.
//!
//! This module holds everything that operates on a [`ControlFlowGraph`]. It builds upon the
//! generic graph infrastructure in [`crate::utils::graph`].
//!
//! # Architecture
//!
//! - [`cfg`] - The node arena: ranks, edges, blocks and per-node analysis results
//! - [`dominance`] - Last branch dominators, immediate dominators and dominance frontiers
//! - [`ssa`] - Three-address statements, block-local renaming and version tables
//! - [`pipeline`] - [`Analyzer`], which runs all of the above over a whole graph
//!
//! The most used items of every sub-module are re-exported here.
//!
//! # Usage
//!
//! ```rust
//! use domssa::analysis::{
//!     arrange_ssa, compute_dominance, ControlFlowGraph, Operator, Statement, Variable,
//! };
//!
//! let mut graph = ControlFlowGraph::new();
//! let entry = graph.create_node(0);
//! let body = graph.create_node(1);
//! graph.add_child(entry, body)?;
//!
//! let x = Variable::new('x', 0);
//! graph.push_statement(body, Statement::binary(x, Operator::Addition, x, x))?;
//!
//! compute_dominance(&mut graph, entry)?;
//! arrange_ssa(&mut graph, body)?;
//!
//! assert_eq!(graph.immediate_dominator(body), Some(entry));
//! let renamed = graph.block(body).and_then(|block| block.front()).unwrap();
//! assert_eq!(renamed.to_string(), "x1 = x0 + x0");
//! # Ok::<(), domssa::Error>(())
//! ```

pub mod cfg;
pub mod dominance;
pub mod pipeline;
pub mod ssa;

pub use cfg::{CfgNode, ControlFlowGraph};
pub use dominance::{
    compute_dominance, get_all_dom_frontiers, get_imd_dom, get_node_dom_frontiers,
    set_all_imd_dom, set_last_brh_dom,
};
pub use pipeline::{AnalysisConfig, AnalysisReport, Analyzer, NodeSummary};
pub use ssa::{
    arrange_ssa, arrange_ssa_from, get_largest_index, get_latest_list, get_live_list,
    get_modified_list, get_subs_list, update_list, Block, Name, Operand, Operator, Statement,
    Variable, VersionTable,
};
