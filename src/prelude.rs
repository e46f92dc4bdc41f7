//! # domssa Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the domssa library. Import this module to get quick access to everything needed to
//! build a graph, analyse it and read the results back.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all domssa operations
pub use crate::Error;

/// The result type used throughout domssa
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Whole-graph analysis driver and its configuration
pub use crate::analysis::{AnalysisConfig, AnalysisReport, Analyzer, NodeSummary};

// ================================================================================================
// Control Flow Graph
// ================================================================================================

/// The node arena and its nodes
pub use crate::analysis::{CfgNode, ControlFlowGraph};

/// Stable node identifier
pub use crate::utils::graph::NodeId;

/// Graph traits implemented by the control flow graph
pub use crate::utils::graph::{GraphBase, Predecessors, Ranked, Successors};

// ================================================================================================
// Dominance
// ================================================================================================

/// Dominator engine passes
pub use crate::analysis::{
    compute_dominance, get_all_dom_frontiers, get_imd_dom, get_node_dom_frontiers,
    set_all_imd_dom, set_last_brh_dom,
};

// ================================================================================================
// SSA
// ================================================================================================

/// Statement model
pub use crate::analysis::{Block, Name, Operand, Operator, Statement, Variable};

/// Renaming and version tables
pub use crate::analysis::{
    arrange_ssa, arrange_ssa_from, get_largest_index, get_latest_list, get_live_list,
    get_modified_list, get_subs_list, update_list, VersionTable,
};

// ================================================================================================
// Utilities
// ================================================================================================

/// Double-ended container with checked operations
pub use crate::utils::Sequence;
