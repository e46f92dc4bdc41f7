//! Per-block variable lists and the running version table.
//!
//! These queries connect the blocks renamed by [`arrange_ssa`](super::arrange_ssa):
//!
//! - [`get_live_list`] - Names read before any local definition (the block's live-in set)
//! - [`get_modified_list`] - Names defined by the block, at their final version
//! - [`get_latest_list`] / [`update_list`] - Fold a block's definitions into a
//!   [`VersionTable`] carried from block to block in traversal order
//!
//! All lists keep one entry per name, in the order the name was first encountered.

use std::collections::HashSet;

use crate::{
    analysis::{
        cfg::ControlFlowGraph,
        ssa::{Block, Name, Variable},
    },
    utils::{graph::NodeId, Sequence},
    Error, Result,
};

/// The most recent version of each variable visible at a program point, one entry per name.
pub type VersionTable = Sequence<Variable>;

impl Sequence<Variable> {
    /// Returns the version recorded for `name`, if any.
    #[must_use]
    pub fn version_of(&self, name: impl Into<Name>) -> Option<u32> {
        let name = name.into();
        self.iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.version)
    }

    /// Records `variable`, replacing the entry of the same name in place or appending it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domssa::analysis::{Variable, VersionTable};
    ///
    /// let mut table = VersionTable::new();
    /// table.record(Variable::new('w', 0));
    /// table.record(Variable::new('x', 0));
    /// table.record(Variable::new('w', 3));
    ///
    /// let entries: Vec<String> = table.iter().map(|v| v.to_string()).collect();
    /// assert_eq!(entries, vec!["w3", "x0"]);
    /// assert_eq!(table.version_of('w'), Some(3));
    /// ```
    pub fn record(&mut self, variable: Variable) {
        match self.iter_mut().find(|entry| entry.same_name(&variable)) {
            Some(entry) => entry.version = variable.version,
            None => self.push_back(variable),
        }
    }
}

/// Definitions of `block`, one per name in first-definition order, at the highest version.
fn modified_versions(block: &Block) -> VersionTable {
    let mut modified = VersionTable::new();
    for result in block.iter().filter_map(|statement| statement.defines()) {
        match modified.iter_mut().find(|entry| entry.same_name(result)) {
            Some(entry) => entry.version = entry.version.max(result.version),
            None => modified.push_back(*result),
        }
    }
    modified
}

/// Returns the variables defined in the block of `node`, each at its final version.
///
/// Entries appear in first-definition order. A block without definitions yields an empty
/// table, which is not an error.
///
/// # Errors
///
/// Returns [`Error::NullNode`] if `node` is not part of the graph.
pub fn get_modified_list(graph: &ControlFlowGraph, node: NodeId) -> Result<VersionTable> {
    let cfg_node = graph.require(node, "get_modified_list")?;
    Ok(modified_versions(cfg_node.block()))
}

/// Returns the variables the block of `node` reads before defining them.
///
/// Entries appear in first-use order, each at version 0, since their value has to come from
/// outside the block. Works on renamed and unrenamed blocks alike.
///
/// # Errors
///
/// Returns [`Error::NullNode`] if `node` is not part of the graph.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::{get_live_list, ControlFlowGraph, Operator, Statement, Variable};
///
/// let v = |name| Variable::new(name, 0);
/// let mut graph = ControlFlowGraph::new();
/// let node = graph.create_node(0);
/// graph.push_statement(node, Statement::binary(v('x'), Operator::Addition, v('y'), v('z')))?;
/// graph.push_statement(node, Statement::binary(v('w'), Operator::Addition, v('x'), v('q')))?;
///
/// let live: Vec<String> = get_live_list(&graph, node)?.iter().map(|v| v.to_string()).collect();
/// assert_eq!(live, vec!["y0", "z0", "q0"]);
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn get_live_list(graph: &ControlFlowGraph, node: NodeId) -> Result<VersionTable> {
    let cfg_node = graph.require(node, "get_live_list")?;

    let mut defined: HashSet<Name> = HashSet::new();
    let mut live = VersionTable::new();
    for statement in cfg_node.block() {
        for used in statement.uses() {
            if !defined.contains(&used.name) && live.version_of(used.name).is_none() {
                live.push_back(used.with_version(0));
            }
        }
        if let Some(result) = statement.defines() {
            defined.insert(result.name);
        }
    }
    Ok(live)
}

/// Returns the version table after the block of `node`.
///
/// Without `prev` this is the block's modified list. With `prev` it is a copy of `prev` in
/// which every name the block defines carries the block's final version, and names new to the
/// table are appended. `prev` itself is not modified; see [`update_list`] for the in-place
/// form.
///
/// # Errors
///
/// Returns [`Error::NullNode`] if `node` is not part of the graph.
pub fn get_latest_list(
    graph: &ControlFlowGraph,
    node: NodeId,
    prev: Option<&VersionTable>,
) -> Result<VersionTable> {
    let cfg_node = graph.require(node, "get_latest_list")?;
    let modified = modified_versions(cfg_node.block());

    let Some(prev) = prev else {
        return Ok(modified);
    };

    let mut merged = prev.clone();
    for variable in modified {
        merged.record(variable);
    }
    Ok(merged)
}

/// Folds the definitions of the block of `node` into `prev` in place.
///
/// Entries of names the block redefines are updated where they stand, names new to the table
/// are appended in first-definition order.
///
/// # Errors
///
/// - [`Error::NullNode`] if `node` is not part of the graph
/// - [`Error::NullList`] if `prev` is `None`
///
/// The node is checked first. Nothing is modified on error.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::{update_list, ControlFlowGraph, Operator, Statement, Variable, VersionTable};
///
/// let mut graph = ControlFlowGraph::new();
/// let node = graph.create_node(0);
/// graph.push_statement(node, Statement::binary(
///     Variable::new('x', 1),
///     Operator::Addition,
///     Variable::new('y', 0),
///     Variable::new('x', 0),
/// ))?;
///
/// let mut table: VersionTable = vec![Variable::new('w', 0), Variable::new('x', 0)].into();
/// update_list(&graph, node, Some(&mut table))?;
/// assert_eq!(table.version_of('x'), Some(1));
/// assert_eq!(table.len(), 2);
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn update_list(
    graph: &ControlFlowGraph,
    node: NodeId,
    prev: Option<&mut VersionTable>,
) -> Result<()> {
    let cfg_node = graph.require(node, "update_list")?;
    let prev = prev.ok_or(Error::NullList("update_list"))?;

    for variable in modified_versions(cfg_node.block()) {
        prev.record(variable);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::ssa::{arrange_ssa, Statement},
        test::{add, mul, single_block, var},
    };

    fn names(table: &VersionTable) -> Vec<String> {
        table.iter().map(ToString::to_string).collect()
    }

    /// x = y + x; y = z + x; y = z + y; x = x + y, renamed
    fn redefining_block() -> (ControlFlowGraph, NodeId) {
        let (mut graph, node) = single_block(vec![
            add('x', 'y', 'x'),
            add('y', 'z', 'x'),
            add('y', 'z', 'y'),
            add('x', 'x', 'y'),
        ]);
        arrange_ssa(&mut graph, node).unwrap();
        (graph, node)
    }

    #[test]
    fn test_version_table_helpers() {
        let mut table = VersionTable::new();
        assert_eq!(table.version_of('a'), None);

        table.record(var('a', 0));
        table.record(var('b', 2));
        table.record(var('a', 5));

        assert_eq!(names(&table), vec!["a5", "b2"]);
        assert_eq!(table.version_of('b'), Some(2));
    }

    #[test]
    fn test_modified_list_final_versions() {
        let (graph, node) = redefining_block();
        let modified = get_modified_list(&graph, node).unwrap();
        assert_eq!(names(&modified), vec!["x2", "y2"]);
    }

    #[test]
    fn test_modified_list_empty_block() {
        let (graph, node) = single_block(Vec::new());
        assert!(get_modified_list(&graph, node).unwrap().is_empty());
    }

    #[test]
    fn test_modified_list_ignores_branches() {
        let (mut graph, node) = single_block(vec![
            Statement::assign(var('c', 0), 1),
            Statement::branch(var('c', 0), NodeId::new(0)),
        ]);
        arrange_ssa(&mut graph, node).unwrap();
        assert_eq!(names(&get_modified_list(&graph, node).unwrap()), vec!["c0"]);
    }

    #[test]
    fn test_live_list_used_before_defined() {
        let (graph, node) = single_block(vec![
            add('x', 'y', 'x'),
            add('y', 'z', 'x'),
            mul('w', 'y', 'q'),
        ]);

        let live = get_live_list(&graph, node).unwrap();
        assert_eq!(names(&live), vec!["y0", "x0", "z0", "q0"]);
    }

    #[test]
    fn test_live_list_after_renaming_reports_version_zero() {
        let (graph, node) = redefining_block();
        let live = get_live_list(&graph, node).unwrap();
        assert_eq!(names(&live), vec!["y0", "x0", "z0"]);
    }

    #[test]
    fn test_latest_list_single_node() {
        let (mut graph, node) = single_block(vec![
            Statement::assign(var('x', 0), 3),
            add('x', 'y', 'x'),
            mul('x', 'x', 'z'),
        ]);
        arrange_ssa(&mut graph, node).unwrap();

        let latest = get_latest_list(&graph, node, None).unwrap();
        assert_eq!(names(&latest), vec!["x2"]);
    }

    #[test]
    fn test_latest_list_merges_copy() {
        let (graph, node) = redefining_block();
        let prev: VersionTable = vec![var('w', 0), var('z', 0), var('x', 0)].into();

        let latest = get_latest_list(&graph, node, Some(&prev)).unwrap();
        assert_eq!(names(&latest), vec!["w0", "z0", "x2", "y2"]);
        assert_eq!(names(&prev), vec!["w0", "z0", "x0"]);
    }

    #[test]
    fn test_update_list_in_place() {
        let (graph, node) = redefining_block();
        let mut prev: VersionTable = vec![var('w', 0), var('z', 0), var('x', 0)].into();

        update_list(&graph, node, Some(&mut prev)).unwrap();
        assert_eq!(names(&prev), vec!["w0", "z0", "x2", "y2"]);
    }

    #[test]
    fn test_update_list_empty_table() {
        let (mut graph, node) = single_block(vec![add('x', 'y', 'x')]);
        arrange_ssa(&mut graph, node).unwrap();

        let mut prev = VersionTable::new();
        update_list(&graph, node, Some(&mut prev)).unwrap();
        assert_eq!(names(&prev), vec!["x1"]);
    }

    #[test]
    fn test_list_argument_errors() {
        let (graph, _) = single_block(vec![add('x', 'y', 'z')]);
        let ghost = NodeId::new(9);
        let mut prev: VersionTable = vec![var('x', 0)].into();

        assert_eq!(
            get_modified_list(&graph, ghost),
            Err(Error::NullNode("get_modified_list"))
        );
        assert_eq!(
            get_live_list(&graph, ghost),
            Err(Error::NullNode("get_live_list"))
        );
        assert_eq!(
            get_latest_list(&graph, ghost, Some(&prev)),
            Err(Error::NullNode("get_latest_list"))
        );
        assert_eq!(
            update_list(&graph, ghost, Some(&mut prev)),
            Err(Error::NullNode("update_list"))
        );
        // node is checked before the list
        assert_eq!(
            update_list(&graph, ghost, None),
            Err(Error::NullNode("update_list"))
        );
        assert_eq!(
            update_list(&graph, NodeId::new(0), None),
            Err(Error::NullList("update_list"))
        );
        assert_eq!(names(&prev), vec!["x0"]);
    }
}
