//! Dominator engine integration tests.
//!
//! These tests drive the three dominance passes through the public API on small graphs
//! with loops, nested branches and merge points, and check every stored result.

use domssa::{prelude::*, Result};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a graph from node ranks and `(parent, child)` index pairs.
fn graph_from(ranks: &[u32], edges: &[(usize, usize)]) -> Result<(ControlFlowGraph, Vec<NodeId>)> {
    let mut graph = ControlFlowGraph::with_capacity(ranks.len());
    let nodes: Vec<NodeId> = ranks.iter().map(|&rank| graph.create_node(rank)).collect();
    for &(parent, child) in edges {
        graph.add_child(nodes[parent], nodes[child])?;
    }
    Ok((graph, nodes))
}

/// entry -> header -> {body, exit}, body -> header
fn counting_loop() -> Result<(ControlFlowGraph, Vec<NodeId>)> {
    graph_from(&[0, 1, 2, 2], &[(0, 1), (1, 2), (1, 3), (2, 1)])
}

#[test]
fn test_loop_header_dominates_body_and_exit() -> Result<()> {
    init_logging();
    let (mut graph, n) = counting_loop()?;

    let union = compute_dominance(&mut graph, n[0])?;

    assert_eq!(graph.last_branch_dominator(n[0]), None);
    assert_eq!(graph.last_branch_dominator(n[1]), Some(n[0]));
    assert_eq!(graph.last_branch_dominator(n[2]), Some(n[1]));
    assert_eq!(graph.last_branch_dominator(n[3]), Some(n[1]));

    assert_eq!(graph.immediate_dominator(n[0]), None);
    assert_eq!(graph.immediate_dominator(n[1]), Some(n[0]));
    assert_eq!(graph.immediate_dominator(n[2]), Some(n[1]));
    assert_eq!(graph.immediate_dominator(n[3]), Some(n[1]));

    // the header merges the entry and the latch, so it is in its own frontier
    assert!(graph.dominance_frontier(n[0]).is_empty());
    assert_eq!(graph.dominance_frontier(n[1]), &[n[1]]);
    assert_eq!(graph.dominance_frontier(n[2]), &[n[1]]);
    assert!(graph.dominance_frontier(n[3]).is_empty());
    assert_eq!(union, vec![n[1]]);

    Ok(())
}

#[test]
fn test_single_node_queries_match_stored_results() -> Result<()> {
    init_logging();
    // a -> {b, f}; b -> {c, d}; c -> e; d -> e; e -> f
    let (mut graph, n) = graph_from(
        &[0, 1, 2, 2, 3, 1],
        &[(0, 1), (0, 5), (1, 2), (1, 3), (2, 4), (3, 4), (4, 5)],
    )?;

    set_last_brh_dom(&mut graph, n[0])?;
    for &node in &n {
        assert_eq!(graph.immediate_dominator(node), None);
    }

    let expected: Vec<Option<NodeId>> = n
        .iter()
        .map(|&node| get_imd_dom(&graph, node))
        .collect::<Result<_>>()?;
    set_all_imd_dom(&mut graph, n[0])?;
    for (&node, dominator) in n.iter().zip(&expected) {
        assert_eq!(graph.immediate_dominator(node), *dominator);
    }

    let union = get_all_dom_frontiers(&mut graph, n[0])?;
    for &node in &n {
        assert_eq!(
            get_node_dom_frontiers(&graph, node)?,
            graph.dominance_frontier(node)
        );
    }
    assert_eq!(union, vec![n[5], n[4]]);

    Ok(())
}

#[test]
fn test_unreachable_nodes_are_left_alone() -> Result<()> {
    // a -> b; c -> b, c is never reached from a
    let (mut graph, n) = graph_from(&[0, 1, 1], &[(0, 1), (2, 1)])?;

    compute_dominance(&mut graph, n[0])?;

    assert_eq!(graph.immediate_dominator(n[1]), Some(n[0]));
    assert_eq!(graph.last_branch_dominator(n[2]), None);
    assert_eq!(graph.immediate_dominator(n[2]), None);
    assert!(graph.dominance_frontier(n[2]).is_empty());

    Ok(())
}

#[test]
fn test_recomputing_after_adding_an_edge() -> Result<()> {
    // a -> b -> c, then a -> c turns c into a merge point
    let (mut graph, n) = graph_from(&[0, 1, 2], &[(0, 1), (1, 2)])?;
    compute_dominance(&mut graph, n[0])?;
    assert_eq!(graph.immediate_dominator(n[2]), Some(n[1]));
    assert!(graph.dominance_frontier(n[1]).is_empty());

    graph.add_child(n[0], n[2])?;
    compute_dominance(&mut graph, n[0])?;
    assert_eq!(graph.immediate_dominator(n[2]), Some(n[0]));
    assert_eq!(graph.dominance_frontier(n[1]), &[n[2]]);

    Ok(())
}

#[test]
fn test_invalid_nodes_are_rejected() -> Result<()> {
    let (mut graph, n) = counting_loop()?;
    let ghost = NodeId::new(n.len());

    assert_eq!(
        graph.add_child(n[0], ghost),
        Err(Error::NullNode("add_child"))
    );
    assert_eq!(graph.children(n[0]), &[n[1]]);
    assert!(matches!(
        compute_dominance(&mut graph, ghost),
        Err(Error::NullNode(_))
    ));
    assert!(matches!(get_imd_dom(&graph, ghost), Err(Error::NullNode(_))));

    Ok(())
}

#[test]
fn test_dot_output_shows_dominators() -> Result<()> {
    let (mut graph, n) = counting_loop()?;
    compute_dominance(&mut graph, n[0])?;

    let dot = graph.to_dot(Some("loop"));
    assert!(dot.contains("label=\"CFG: loop\";"));
    assert!(dot.contains("n2 (rank 2) lbd n1"));
    assert!(dot.contains("n2 -> n1;"));
    assert!(dot.contains("n2 -> n1 [style=dashed, color=gray, constraint=false];"));

    Ok(())
}
