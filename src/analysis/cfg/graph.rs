//! Control Flow Graph implementation.
//!
//! This module provides the [`ControlFlowGraph`] arena. Nodes are created with a rank, wired
//! with [`ControlFlowGraph::add_child`] and filled with statements. The dominance and SSA
//! passes then read and write the nodes in place, addressed by [`NodeId`].

use std::fmt::Write;

use crate::{
    analysis::{cfg::CfgNode, ssa::Block, ssa::Statement},
    utils::{
        escape_dot,
        graph::{algorithms, GraphBase, NodeId, Predecessors, Ranked, Successors},
    },
    Error, Result,
};

/// Arena of control flow graph nodes.
///
/// The graph is a general directed graph: a node may have several parents and back edges are
/// allowed. Identity is the [`NodeId`] index, so a node reached over two different paths is
/// always the same record.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::ControlFlowGraph;
///
/// // a -> {b, c} -> d -> a
/// let mut graph = ControlFlowGraph::new();
/// let a = graph.create_node(0);
/// let b = graph.create_node(1);
/// let c = graph.create_node(1);
/// let d = graph.create_node(2);
/// graph.add_child(a, b)?;
/// graph.add_child(a, c)?;
/// graph.add_child(b, d)?;
/// graph.add_child(c, d)?;
/// graph.add_child(d, a)?;
///
/// assert_eq!(graph.assemble_list(a)?, vec![a, b, c, d]);
/// assert_eq!(graph.parents(d), &[b, c]);
/// # Ok::<(), domssa::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ControlFlowGraph {
    nodes: Vec<CfgNode>,
}

impl ControlFlowGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        ControlFlowGraph { nodes: Vec::new() }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ControlFlowGraph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds an empty node at `rank` and returns its identifier.
    ///
    /// The node starts with an empty block, no parents, no children and no dominance data.
    pub fn create_node(&mut self, rank: u32) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(CfgNode::new(rank));
        id
    }

    /// Appends `child` to the child list of `parent`.
    ///
    /// Child order is significant: it drives the order of every breadth-first pass. The child
    /// records `parent` in its predecessor list and as its most recent parent. Wiring the same
    /// pair twice creates two edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullNode`] if either identifier is not part of the graph. Nothing is
    /// modified in that case.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.require(parent, "add_child")?;
        let child_node = self.require_mut(child, "add_child")?;
        child_node.parents.push(parent);
        child_node.parent = Some(parent);

        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    /// Returns every node reachable from `root` in rank-guarded breadth-first order.
    ///
    /// A child is only followed if its rank is strictly greater than the rank of the node it
    /// is reached from, so back edges are not followed. Each node appears at most once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullNode`] if `root` is not part of the graph.
    pub fn assemble_list(&self, root: NodeId) -> Result<Vec<NodeId>> {
        self.require(root, "assemble_list")?;
        Ok(algorithms::ranked_bfs(self, root).collect())
    }

    /// Returns every node reachable from `root`, following back edges too.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullNode`] if `root` is not part of the graph.
    pub fn reachable(&self, root: NodeId) -> Result<Vec<NodeId>> {
        self.require(root, "reachable")?;
        Ok(algorithms::bfs(self, root).collect())
    }

    /// Returns `true` if `id` names a node of this graph.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Returns the node `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&CfgNode> {
        self.nodes.get(id.index())
    }

    /// Returns the node `id` mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut CfgNode> {
        self.nodes.get_mut(id.index())
    }

    /// Returns the statement block of `id`.
    #[must_use]
    pub fn block(&self, id: NodeId) -> Option<&Block> {
        self.node(id).map(CfgNode::block)
    }

    /// Returns the statement block of `id` mutably.
    pub fn block_mut(&mut self, id: NodeId) -> Option<&mut Block> {
        self.node_mut(id).map(CfgNode::block_mut)
    }

    /// Appends a statement to the block of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullNode`] if `node` is not part of the graph.
    pub fn push_statement(&mut self, node: NodeId, statement: Statement) -> Result<()> {
        self.require_mut(node, "push_statement")?
            .block
            .push_back(statement);
        Ok(())
    }

    /// Returns the rank of `id`.
    #[must_use]
    pub fn rank(&self, id: NodeId) -> Option<u32> {
        self.node(id).map(CfgNode::rank)
    }

    /// Returns the children of `id`, empty for an unknown identifier.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], CfgNode::children)
    }

    /// Returns the parents of `id`, empty for an unknown identifier.
    #[must_use]
    pub fn parents(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], CfgNode::parents)
    }

    /// Returns the last branch dominator of `id`.
    #[must_use]
    pub fn last_branch_dominator(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(CfgNode::last_branch_dominator)
    }

    /// Returns the immediate dominator of `id`.
    #[must_use]
    pub fn immediate_dominator(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(CfgNode::immediate_dominator)
    }

    /// Returns the cached dominance frontier of `id`, empty for an unknown identifier.
    #[must_use]
    pub fn dominance_frontier(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], CfgNode::dominance_frontier)
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns every node identifier in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    pub(crate) fn require(&self, id: NodeId, operation: &'static str) -> Result<&CfgNode> {
        self.nodes.get(id.index()).ok_or(Error::NullNode(operation))
    }

    pub(crate) fn require_mut(
        &mut self,
        id: NodeId,
        operation: &'static str,
    ) -> Result<&mut CfgNode> {
        self.nodes
            .get_mut(id.index())
            .ok_or(Error::NullNode(operation))
    }

    /// Generates a DOT representation of the graph for Graphviz.
    ///
    /// Every node shows its rank, its last branch dominator and its statements. Child edges
    /// are solid; an edge taken by a conditional branch is labelled `taken`. Immediate
    /// dominator links are drawn as dashed gray edges from a node to its dominator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domssa::analysis::{compute_dominance, ControlFlowGraph};
    ///
    /// let mut graph = ControlFlowGraph::new();
    /// let entry = graph.create_node(0);
    /// let exit = graph.create_node(1);
    /// graph.add_child(entry, exit)?;
    /// compute_dominance(&mut graph, entry)?;
    ///
    /// let dot = graph.to_dot(Some("demo"));
    /// assert!(dot.starts_with("digraph CFG {"));
    /// assert!(dot.contains("n0 -> n1;"));
    /// assert!(dot.contains("n1 -> n0 [style=dashed"));
    /// # Ok::<(), domssa::Error>(())
    /// ```
    #[must_use]
    pub fn to_dot(&self, title: Option<&str>) -> String {
        let mut dot = String::new();

        dot.push_str("digraph CFG {\n");
        if let Some(name) = title {
            let _ = writeln!(dot, "    label=\"CFG: {}\";", escape_dot(name));
        }
        dot.push_str("    labelloc=t;\n");
        dot.push_str("    node [shape=box, fontname=\"Courier\", fontsize=10];\n");
        dot.push_str("    edge [fontname=\"Courier\", fontsize=9];\n\n");

        for (id, node) in self.node_ids().zip(&self.nodes) {
            let mut label = format!("{id} (rank {})", node.rank);
            if let Some(lbd) = node.last_branch_dominator {
                let _ = write!(label, " lbd {lbd}");
            }
            label.push_str("\\l");

            for statement in &node.block {
                label.push_str(&escape_dot(&statement.to_string()));
                label.push_str("\\l");
            }

            let style = if node.rank == 0 && node.parents.is_empty() {
                ", style=filled, fillcolor=lightgreen"
            } else if node.children.is_empty() {
                ", style=filled, fillcolor=lightcoral"
            } else {
                ""
            };

            let _ = writeln!(dot, "    {id} [label=\"{label}\"{style}];");
        }

        dot.push('\n');

        for (id, node) in self.node_ids().zip(&self.nodes) {
            let taken = node.block.back().and_then(Statement::branch_target);
            for &child in &node.children {
                if taken == Some(child) {
                    let _ = writeln!(dot, "    {id} -> {child} [label=\"taken\", color=green];");
                } else {
                    let _ = writeln!(dot, "    {id} -> {child};");
                }
            }
        }

        for (id, node) in self.node_ids().zip(&self.nodes) {
            if let Some(idom) = node.immediate_dominator {
                let _ = writeln!(
                    dot,
                    "    {id} -> {idom} [style=dashed, color=gray, constraint=false];"
                );
            }
        }

        dot.push_str("}\n");
        dot
    }
}

impl GraphBase for ControlFlowGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl Successors for ControlFlowGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.children(node).iter().copied()
    }
}

impl Predecessors for ControlFlowGraph {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.parents(node).iter().copied()
    }
}

impl Ranked for ControlFlowGraph {
    fn node_rank(&self, node: NodeId) -> u32 {
        self.nodes[node.index()].rank
    }
}
