//! Whole-graph analysis driver.
//!
//! [`Analyzer::run`] performs the complete middle-end sequence on a graph the caller has
//! built: dominators and frontiers for everything reachable from the entry, then, node by node
//! in [`assemble_list`](ControlFlowGraph::assemble_list) order, a live-in snapshot, SSA
//! renaming, and a merge of the node's definitions into a running version table.
//!
//! Renaming continues from the versions seen in earlier nodes, so every definition along the
//! traversal gets a fresh version and a use reads the latest version defined before it.
//! Names a node reads without defining them are remembered at version 0, so a later
//! definition never reuses that version. Placing phi functions at merge points is left to
//! the caller.
//!
//! Which steps run is controlled by [`AnalysisConfig`].

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    analysis::{
        cfg::ControlFlowGraph,
        dominance::{get_all_dom_frontiers, set_all_imd_dom, set_last_brh_dom},
        ssa::{arrange_ssa_from, get_live_list, get_modified_list, update_list, Name, VersionTable},
    },
    utils::graph::NodeId,
    Error::GraphError,
    Result,
};

/// Configuration for the [`Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Compute and store dominance frontiers (default: true).
    pub compute_frontiers: bool,

    /// Rename every analysed block into SSA form, continuing versions from earlier blocks
    /// (default: true).
    pub rename_blocks: bool,

    /// Check the analysis invariants after the run and fail if one is violated (default:
    /// false). Besides the dominators, result versions must increase per name along the
    /// whole traversal.
    pub verify: bool,

    /// Refuse graphs with more reachable nodes than this (default: unlimited).
    pub max_nodes: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            compute_frontiers: true,
            rename_blocks: true,
            verify: false,
            max_nodes: None,
        }
    }
}

impl AnalysisConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dominators only: no frontiers, blocks left untouched.
    #[must_use]
    pub fn dominance_only() -> Self {
        Self {
            compute_frontiers: false,
            rename_blocks: false,
            ..Self::default()
        }
    }

    /// Default configuration with invariant verification enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            verify: true,
            ..Self::default()
        }
    }

    /// Enables or disables frontier computation.
    #[must_use]
    pub fn with_frontiers(mut self, enabled: bool) -> Self {
        self.compute_frontiers = enabled;
        self
    }

    /// Enables or disables block renaming.
    #[must_use]
    pub fn with_renaming(mut self, enabled: bool) -> Self {
        self.rename_blocks = enabled;
        self
    }

    /// Enables or disables invariant verification.
    #[must_use]
    pub fn with_verify(mut self, enabled: bool) -> Self {
        self.verify = enabled;
        self
    }

    /// Sets the maximum number of reachable nodes.
    #[must_use]
    pub fn with_max_nodes(mut self, limit: usize) -> Self {
        self.max_nodes = Some(limit);
        self
    }
}

/// What one node contributed during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    /// The node.
    pub node: NodeId,
    /// Variables the block reads before defining them, at version 0.
    pub live_in: VersionTable,
    /// Variables the block defines, at their final version.
    pub modified: VersionTable,
    /// The running version table after this node.
    pub versions_out: VersionTable,
}

/// Result of [`Analyzer::run`].
///
/// Per-node dominance results stay on the graph; the report holds what is not stored there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Analysed nodes in rank-guarded breadth-first order.
    pub order: Vec<NodeId>,
    /// Union of all dominance frontiers, empty if frontiers were not computed.
    pub frontiers: Vec<NodeId>,
    /// One summary per analysed node, in `order`.
    pub summaries: Vec<NodeSummary>,
    /// The version table after the last node.
    pub versions: VersionTable,
}

impl AnalysisReport {
    /// Returns the summary of `node`, if it was analysed.
    #[must_use]
    pub fn summary(&self, node: NodeId) -> Option<&NodeSummary> {
        self.summaries.iter().find(|summary| summary.node == node)
    }
}

/// Runs dominance and SSA analysis over a control flow graph.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::{AnalysisConfig, Analyzer, ControlFlowGraph, Statement, Variable};
///
/// let mut graph = ControlFlowGraph::new();
/// let entry = graph.create_node(0);
/// let exit = graph.create_node(1);
/// graph.add_child(entry, exit)?;
/// graph.push_statement(entry, Statement::assign(Variable::new('x', 0), 1))?;
/// graph.push_statement(exit, Statement::assign(Variable::new('x', 0), 2))?;
///
/// let analyzer = Analyzer::new(AnalysisConfig::strict());
/// let report = analyzer.run(&mut graph, entry)?;
///
/// assert_eq!(report.order, vec![entry, exit]);
/// let renamed = graph.block(exit).and_then(|block| block.front()).unwrap();
/// assert_eq!(renamed.to_string(), "x1 = 2");
/// assert_eq!(report.versions.version_of('x'), Some(1));
/// # Ok::<(), domssa::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Creates an analyzer with `config`.
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Analyzer { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyses every node reachable from `root`.
    ///
    /// # Errors
    ///
    /// - [`Error::NullNode`](crate::Error::NullNode) if `root` is not part of the graph
    /// - [`Error::GraphError`](crate::Error::GraphError) if the graph exceeds
    ///   [`AnalysisConfig::max_nodes`] (checked before anything is modified) or, with
    ///   [`AnalysisConfig::verify`], if the results violate an invariant
    pub fn run(&self, graph: &mut ControlFlowGraph, root: NodeId) -> Result<AnalysisReport> {
        graph.require(root, "run")?;
        let order = graph.assemble_list(root)?;

        if let Some(limit) = self.config.max_nodes {
            if order.len() > limit {
                return Err(GraphError(format!(
                    "{} nodes reachable from {root}, limit is {limit}",
                    order.len()
                )));
            }
        }
        debug!("analysing {} nodes from {root}", order.len());

        set_last_brh_dom(graph, root)?;
        set_all_imd_dom(graph, root)?;
        let frontiers = if self.config.compute_frontiers {
            get_all_dom_frontiers(graph, root)?
        } else {
            Vec::new()
        };

        let mut versions = VersionTable::new();
        // versions plus names read before any definition, at 0
        let mut seen = VersionTable::new();
        let mut summaries = Vec::with_capacity(order.len());
        for &node in &order {
            let live_in = get_live_list(graph, node)?;
            if self.config.rename_blocks {
                arrange_ssa_from(graph, node, &seen)?;
            }
            let modified = get_modified_list(graph, node)?;
            update_list(graph, node, Some(&mut versions))?;

            update_list(graph, node, Some(&mut seen))?;
            for used in &live_in {
                if seen.version_of(used.name).is_none() {
                    seen.push_back(*used);
                }
            }

            trace!(
                "{node}: {} live-in, {} modified",
                live_in.len(),
                modified.len()
            );
            summaries.push(NodeSummary {
                node,
                live_in,
                modified,
                versions_out: versions.clone(),
            });
        }

        if self.config.verify {
            self.verify(graph, root, &order)?;
        }

        Ok(AnalysisReport {
            order,
            frontiers,
            summaries,
            versions,
        })
    }

    fn verify(&self, graph: &ControlFlowGraph, root: NodeId, order: &[NodeId]) -> Result<()> {
        if let Some(lbd) = graph.last_branch_dominator(root) {
            return Err(GraphError(format!(
                "entry {root} has last branch dominator {lbd}"
            )));
        }

        for &node in order.iter().filter(|&&node| node != root) {
            if graph.last_branch_dominator(node).is_none() {
                return Err(GraphError(format!("{node} has no last branch dominator")));
            }
            if graph.immediate_dominator(node).is_none() {
                return Err(GraphError(format!("{node} has no immediate dominator")));
            }
        }

        // definitions must take strictly increasing versions along the traversal
        let mut last: HashMap<Name, u32> = HashMap::new();
        for &node in order {
            let Some(block) = graph.block(node) else {
                continue;
            };
            for result in block.iter().filter_map(|statement| statement.defines()) {
                if let Some(&previous) = last.get(&result.name) {
                    if result.version <= previous {
                        return Err(GraphError(format!(
                            "{node} defines {result} after version {previous}"
                        )));
                    }
                }
                last.insert(result.name, result.version);
            }
        }

        debug!("verified {} nodes", order.len());
        Ok(())
    }
}
