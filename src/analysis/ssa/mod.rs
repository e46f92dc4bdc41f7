//! Static Single Assignment (SSA) renaming of basic blocks.
//!
//! Every definition of a variable receives a fresh version subscript and every use refers to
//! the version of the definition that reaches it. Renaming is local to one block. A
//! [`VersionTable`] carries the last version of each name from block to block in traversal
//! order, which is the raw material for phi placement at dominance frontiers.
//!
//! # Statement Model
//!
//! - [`Name`] / [`Variable`] - A symbol and a versioned reference to it
//! - [`Operator`] / [`Operand`] / [`Statement`] - Three-address statements
//! - [`Block`] - The statements of one node in program order
//!
//! # Renaming
//!
//! - [`arrange_ssa`] - Rewrites one block in place
//! - [`arrange_ssa_from`] - Same, continuing from the versions of a [`VersionTable`]
//! - [`get_subs_list`] - Flat list of every variable slot of a block
//! - [`get_largest_index`] - Highest version of a name in such a list
//!
//! # Version Tables
//!
//! - [`get_modified_list`] - Names a block defines, at their final version
//! - [`get_live_list`] - Names a block reads before defining them
//! - [`get_latest_list`] - Version table after a block, as a new table
//! - [`update_list`] - Version table after a block, updated in place
//!
//! # Examples
//!
//! ```rust
//! use domssa::analysis::{
//!     arrange_ssa, get_latest_list, ControlFlowGraph, Operator, Statement, Variable,
//! };
//!
//! let v = |name| Variable::new(name, 0);
//! let mut graph = ControlFlowGraph::new();
//! let node = graph.create_node(0);
//! graph.push_statement(node, Statement::assign(v('x'), 3))?;
//! graph.push_statement(node, Statement::binary(v('x'), Operator::Addition, v('y'), v('x')))?;
//! graph.push_statement(node, Statement::binary(v('x'), Operator::Multiplication, v('x'), v('z')))?;
//!
//! arrange_ssa(&mut graph, node)?;
//! let latest = get_latest_list(&graph, node, None)?;
//!
//! assert_eq!(latest.len(), 1);
//! assert_eq!(latest.version_of('x'), Some(2));
//! # Ok::<(), domssa::Error>(())
//! ```

mod lists;
mod renamer;
mod statement;
mod variable;

pub use lists::{get_latest_list, get_live_list, get_modified_list, update_list, VersionTable};
pub use renamer::{arrange_ssa, arrange_ssa_from, get_largest_index, get_subs_list};
pub use statement::{Block, Operand, Operator, Statement};
pub use variable::{Name, Variable};
