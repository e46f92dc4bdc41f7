// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # domssa
//!
//! The middle-end analysis core of a small compiler. `domssa` builds a control flow graph of
//! basic blocks, computes last branch dominators, immediate dominators and dominance
//! frontiers for every reachable node, and rewrites the straight-line code inside each block
//! into Static Single Assignment form by attaching version subscripts to every variable.
//!
//! ## Features
//!
//! - **Arena-backed graph** - Nodes are addressed by stable [`utils::graph::NodeId`] indices,
//!   so multiple parents and back edges need no shared ownership
//! - **Branch-dominator propagation** - A two-pass dominator engine bounded by the nearest
//!   enclosing branch point of each node
//! - **Dominance frontiers** - Per node and for the whole reachable graph
//! - **Block-local SSA renaming** - Versioning of definitions and uses, plus live-in,
//!   modified and running version tables for stitching blocks together
//!
//! ## Quick Start
//!
//! ```rust
//! use domssa::prelude::*;
//!
//! // A -> {B, C} -> D
//! let mut graph = ControlFlowGraph::new();
//! let a = graph.create_node(0);
//! let b = graph.create_node(1);
//! let c = graph.create_node(1);
//! let d = graph.create_node(2);
//! graph.add_child(a, b)?;
//! graph.add_child(a, c)?;
//! graph.add_child(b, d)?;
//! graph.add_child(c, d)?;
//!
//! graph.push_statement(d, Statement::binary(
//!     Variable::new('x', 0),
//!     Operator::Addition,
//!     Variable::new('y', 0),
//!     Variable::new('z', 0),
//! ))?;
//!
//! let report = Analyzer::new(AnalysisConfig::default()).run(&mut graph, a)?;
//!
//! assert_eq!(graph.immediate_dominator(d), Some(a));
//! assert_eq!(graph.dominance_frontier(b), &[d]);
//! assert_eq!(report.order, vec![a, b, c, d]);
//! # Ok::<(), domssa::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`utils`] - Generic plumbing: the [`utils::Sequence`] container, node identifiers, graph
//!   traits, traversals and DOT escaping
//! - [`analysis`] - The control flow graph, the dominator engine, the SSA renamer and the
//!   [`analysis::Analyzer`] driver that runs them in order
//! - [`Error`] and [`Result`] - Argument and invariant errors reported by every fallible call
//!
//! ## Limitations
//!
//! Immediate dominators are derived from the last branch dominator rather than by the
//! Lengauer-Tarjan algorithm. When a node has more than one predecessor inside the scope of
//! its last branch dominator, that last branch dominator is reported as its immediate
//! dominator. Results are exact for reducible graphs built from structured branching and
//! should not be relied on for irreducible graphs.

pub(crate) mod error;

/// Shared graph builders used by the unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use domssa::prelude::*;
///
/// let mut graph = ControlFlowGraph::new();
/// let entry = graph.create_node(0);
/// let report = Analyzer::default().run(&mut graph, entry)?;
/// assert_eq!(report.order, vec![entry]);
/// # Ok::<(), domssa::Error>(())
/// ```
pub mod prelude;

/// Control flow graph construction, dominance and SSA analysis.
///
/// # Key Types
///
/// - [`analysis::ControlFlowGraph`] - Arena of [`analysis::CfgNode`] values wired by child edges
/// - [`analysis::Statement`] - A three-address statement with versioned variables
/// - [`analysis::Analyzer`] - Runs dominance, frontier and renaming passes over a graph
///
/// # Main Functions
///
/// - [`analysis::compute_dominance`] - Last branch dominators, immediate dominators, frontiers
/// - [`analysis::arrange_ssa`] - Renames one block into SSA form
/// - [`analysis::update_list`] - Folds a block's definitions into a running version table
pub mod analysis;

/// Generic containers and graph utilities used by the analyses.
pub mod utils;

/// `domssa` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use domssa::{analysis::ControlFlowGraph, utils::graph::NodeId, Result};
///
/// fn entry_rank(graph: &ControlFlowGraph, entry: NodeId) -> Result<u32> {
///     graph
///         .rank(entry)
///         .ok_or(domssa::Error::NullNode("entry_rank"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `domssa` Error type
///
/// The error type for all operations in this crate. Each variant names the kind of invalid
/// argument or violated invariant, and where useful the operation that rejected it.
///
/// # Examples
///
/// ```rust
/// use domssa::{utils::Sequence, Error};
///
/// let mut empty: Sequence<u32> = Sequence::new();
/// match empty.pop_front() {
///     Err(Error::EmptyContainer) => println!("nothing to remove"),
///     Err(e) => println!("Error: {}", e),
///     Ok(value) => println!("removed {value}"),
/// }
/// ```
pub use error::Error;
