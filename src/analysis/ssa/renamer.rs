//! Block-local SSA renaming.
//!
//! [`arrange_ssa`] walks one block in program order with a map from name to current version.
//! Every use is rewritten to the current version of its name, with names not seen yet in the
//! pass reading as version 0. Every definition then receives the next version: one past the
//! current version if the name has been seen, version 0 otherwise.
//!
//! ```text
//! x = y + z        x0 = y0 + z0
//! x = x + a   =>   x1 = x0 + a0
//! z = z + x        z1 = z0 + x1
//! z = z + x        z2 = z1 + x1
//! ```
//!
//! The pass only reads names and recomputes every version, so running it again over an
//! already renamed block leaves the block unchanged.

use std::collections::HashMap;

use log::trace;

use crate::{
    analysis::{
        cfg::ControlFlowGraph,
        ssa::{Block, Name, Variable, VersionTable},
    },
    utils::graph::NodeId,
    Error, Result,
};

/// Renames the block of `node` into SSA form in place.
///
/// Uses are rewritten before the statement's own result is versioned, so `x = x + x` becomes
/// `x1 = x0 + x0`. The condition of a conditional branch reads the version current just
/// before the branch. Constants and branch targets are left untouched.
///
/// # Errors
///
/// Returns [`Error::NullNode`] if `node` is not part of the graph.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::{arrange_ssa, ControlFlowGraph, Operator, Statement, Variable};
///
/// let x = Variable::new('x', 0);
/// let mut graph = ControlFlowGraph::new();
/// let node = graph.create_node(0);
/// graph.push_statement(node, Statement::assign(x, 3))?;
/// graph.push_statement(node, Statement::binary(x, Operator::Addition, Variable::new('y', 0), x))?;
///
/// arrange_ssa(&mut graph, node)?;
///
/// let renamed: Vec<String> = graph.block(node).unwrap().iter().map(|s| s.to_string()).collect();
/// assert_eq!(renamed, vec!["x0 = 3", "x1 = y0 + x0"]);
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn arrange_ssa(graph: &mut ControlFlowGraph, node: NodeId) -> Result<()> {
    let block = graph
        .block_mut(node)
        .ok_or(Error::NullNode("arrange_ssa"))?;
    rename_block(node, block, HashMap::new());
    Ok(())
}

/// Renames the block of `node` into SSA form, continuing from the versions in `incoming`.
///
/// Names recorded in `incoming` start at their recorded version instead of 0: a use reads that
/// version and the first definition in the block takes the next one. Names missing from
/// `incoming` behave as in [`arrange_ssa`]. Threading the table of the previous block through
/// this call keeps versions unique across the blocks of a traversal.
///
/// # Errors
///
/// Returns [`Error::NullNode`] if `node` is not part of the graph.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::{arrange_ssa_from, ControlFlowGraph, Statement, Variable, VersionTable};
///
/// let mut graph = ControlFlowGraph::new();
/// let node = graph.create_node(1);
/// graph.push_statement(node, Statement::assign(Variable::new('x', 0), 7))?;
///
/// let incoming: VersionTable = vec![Variable::new('x', 1)].into();
/// arrange_ssa_from(&mut graph, node, &incoming)?;
///
/// let renamed = graph.block(node).and_then(|block| block.front()).unwrap();
/// assert_eq!(renamed.to_string(), "x2 = 7");
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn arrange_ssa_from(
    graph: &mut ControlFlowGraph,
    node: NodeId,
    incoming: &VersionTable,
) -> Result<()> {
    let block = graph
        .block_mut(node)
        .ok_or(Error::NullNode("arrange_ssa_from"))?;
    let current = incoming
        .iter()
        .map(|entry| (entry.name, entry.version))
        .collect();
    rename_block(node, block, current);
    Ok(())
}

fn rename_block(node: NodeId, block: &mut Block, mut current: HashMap<Name, u32>) {
    for statement in block.iter_mut() {
        for used in statement.uses_mut() {
            used.version = *current.entry(used.name).or_insert(0);
        }

        if statement.operator.has_result() {
            if let Some(result) = statement.result.as_mut() {
                let version = current.get(&result.name).map_or(0, |seen| seen + 1);
                current.insert(result.name, version);
                result.version = version;
            }
        }

        trace!("{node}: {statement}");
    }
}

/// Lists every variable slot of `block` in statement order.
///
/// Within a statement the order is first operand, second operand, result. Only slots holding
/// variables are listed; constants of an assignment and branch targets are skipped. The
/// entries are copies, so the list can be searched while the block is renamed.
///
/// # Errors
///
/// Returns [`Error::NullList`] if `block` is `None`.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::{get_subs_list, Block, Operator, Statement, Variable};
///
/// let mut block = Block::new();
/// block.push_back(Statement::binary(
///     Variable::new('x', 1),
///     Operator::Addition,
///     Variable::new('y', 0),
///     Variable::new('z', 0),
/// ));
///
/// let slots = get_subs_list(Some(&block))?;
/// assert_eq!(slots, vec![Variable::new('y', 0), Variable::new('z', 0), Variable::new('x', 1)]);
/// # Ok::<(), domssa::Error>(())
/// ```
pub fn get_subs_list(block: Option<&Block>) -> Result<Vec<Variable>> {
    let block = block.ok_or(Error::NullList("get_subs_list"))?;

    let mut slots = Vec::with_capacity(block.len() * 3);
    for statement in block {
        slots.extend(statement.uses().copied());
        if let Some(result) = statement.defines() {
            slots.push(*result);
        }
    }
    Ok(slots)
}

/// Returns the entry of `list` with the name of `target` and the highest version.
///
/// Only the name of `target` is used. On equal versions the earliest entry wins. Returns
/// `Ok(None)` if the name never occurs.
///
/// # Errors
///
/// - [`Error::NullList`] if `list` is `None`
/// - [`Error::NullSubscript`] if `target` is `None`
pub fn get_largest_index(
    list: Option<&[Variable]>,
    target: Option<&Variable>,
) -> Result<Option<Variable>> {
    let list = list.ok_or(Error::NullList("get_largest_index"))?;
    let target = target.ok_or(Error::NullSubscript("get_largest_index"))?;

    let mut largest: Option<Variable> = None;
    for candidate in list.iter().filter(|var| var.same_name(target)) {
        match largest {
            Some(best) if best.version >= candidate.version => {}
            _ => largest = Some(*candidate),
        }
    }
    Ok(largest)
}
