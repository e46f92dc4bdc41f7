use crate::{
    analysis::{ControlFlowGraph, Operator, Statement, Variable},
    utils::graph::NodeId,
};

pub fn ids(raw: &[usize]) -> Vec<NodeId> {
    raw.iter().map(|&idx| NodeId::new(idx)).collect()
}

/// Builds a graph from node ranks and `(parent, child)` index pairs, wired in order.
pub fn build_graph(ranks: &[u32], edges: &[(usize, usize)]) -> (ControlFlowGraph, Vec<NodeId>) {
    let mut graph = ControlFlowGraph::with_capacity(ranks.len());
    let nodes: Vec<NodeId> = ranks.iter().map(|&rank| graph.create_node(rank)).collect();
    for &(parent, child) in edges {
        graph.add_child(nodes[parent], nodes[child]).unwrap();
    }
    (graph, nodes)
}

/// a -> {b, c} -> d -> a
pub fn diamond_with_back_edge() -> (ControlFlowGraph, [NodeId; 4]) {
    let (graph, nodes) = build_graph(&[0, 1, 1, 2], &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 0)]);
    (graph, [nodes[0], nodes[1], nodes[2], nodes[3]])
}

/// a -> {b, f}, b -> {c, d}, c -> e, d -> e, e -> f
///
/// Ranks: a0 b1 c2 d2 e3 f1, so `a -> f` is seen before f's deeper parent.
pub fn nested_branches() -> (ControlFlowGraph, [NodeId; 6]) {
    let (graph, nodes) = build_graph(
        &[0, 1, 2, 2, 3, 1],
        &[(0, 1), (0, 5), (1, 2), (1, 3), (2, 4), (3, 4), (4, 5)],
    );
    (
        graph,
        [nodes[0], nodes[1], nodes[2], nodes[3], nodes[4], nodes[5]],
    )
}

pub fn var(name: char, version: u32) -> Variable {
    Variable::new(name, version)
}

pub fn add(result: char, a: char, b: char) -> Statement {
    Statement::binary(var(result, 0), Operator::Addition, var(a, 0), var(b, 0))
}

pub fn mul(result: char, a: char, b: char) -> Statement {
    Statement::binary(var(result, 0), Operator::Multiplication, var(a, 0), var(b, 0))
}

/// A single-node graph holding `statements`.
pub fn single_block(statements: Vec<Statement>) -> (ControlFlowGraph, NodeId) {
    let mut graph = ControlFlowGraph::new();
    let node = graph.create_node(0);
    for statement in statements {
        graph.push_statement(node, statement).unwrap();
    }
    (graph, node)
}
