//! Stable Kahn's Topological Sort
//!
//! O(V + E) complexity, detects cycles. Ties are broken by node order, with
//! nodes released by the most recent emission taking precedence, so the same
//! registration sequence always yields the same order.

use crate::domain::entities::DependencyGraph;
use std::collections::VecDeque;

/// Perform a stable Kahn's topological sort on the graph.
///
/// Returns every node index in emission order. If a cycle blocks traversal,
/// returns the nodes that could not be emitted, in node order.
pub fn kahns_topological_sort(graph: &DependencyGraph) -> Result<Vec<usize>, Vec<usize>> {
    // 1. Copy in-degree (we'll modify it)
    let mut in_degree = graph.in_degree.clone();

    // 2. Initialize roots with zero in-degree nodes, in node order
    let mut roots: VecDeque<usize> = graph.get_zero_degree_nodes().into();

    let mut emitted = vec![false; graph.node_count()];
    let mut order = Vec::with_capacity(graph.node_count());

    // 3. Always take the front root; freshly released nodes jump the queue
    while let Some(root) = roots.pop_front() {
        order.push(root);
        emitted[root] = true;

        for &child in &graph.adjacency[root] {
            in_degree[child] -= 1;
            if in_degree[child] == 0 {
                roots.push_front(child);
            }
        }
    }

    // 4. Cycle detection: anything not emitted is blocked
    if order.len() < graph.node_count() {
        let residual = (0..graph.node_count())
            .filter(|&node| !emitted[node])
            .collect();
        return Err(residual);
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ENTRY_OFFSET, FIRST_INDEX, LAST_INDEX};

    const A: usize = ENTRY_OFFSET;
    const B: usize = ENTRY_OFFSET + 1;
    const C: usize = ENTRY_OFFSET + 2;

    fn anchored(entries: usize) -> DependencyGraph {
        let mut graph = DependencyGraph::with_entries(entries);
        graph.add_edge(FIRST_INDEX, LAST_INDEX);
        graph
    }

    /// Test: FIRST, then C -> B -> A before LAST
    #[test]
    fn test_kahns_simple_chain() {
        let mut graph = anchored(3);
        graph.add_edge(C, LAST_INDEX);
        graph.add_edge(C, B);
        graph.add_edge(B, LAST_INDEX);
        graph.add_edge(B, A);
        graph.add_edge(A, LAST_INDEX);

        let order = kahns_topological_sort(&graph).unwrap();

        assert_eq!(order, vec![FIRST_INDEX, C, B, A, LAST_INDEX]);
    }

    /// Test: independent entries keep node order
    #[test]
    fn test_kahns_unconstrained_keeps_node_order() {
        let mut graph = anchored(3);
        graph.add_edge(A, LAST_INDEX);
        graph.add_edge(B, LAST_INDEX);
        graph.add_edge(C, LAST_INDEX);

        let order = kahns_topological_sort(&graph).unwrap();

        assert_eq!(order, vec![FIRST_INDEX, A, B, C, LAST_INDEX]);
    }

    /// Test: a released node is processed before older roots
    ///
    /// B waits on A; once A is emitted, B runs ahead of the still-queued C.
    #[test]
    fn test_kahns_released_node_jumps_queue() {
        let mut graph = anchored(3);
        graph.add_edge(A, B);

        let order = kahns_topological_sort(&graph).unwrap();

        assert_eq!(order, vec![FIRST_INDEX, LAST_INDEX, A, B, C]);
    }

    /// Test: A -> B -> C -> A (cycle)
    #[test]
    fn test_cycle_detected() {
        let mut graph = anchored(3);
        graph.add_edge(A, B);
        graph.add_edge(B, C);
        graph.add_edge(C, A); // Cycle!
        graph.add_edge(C, LAST_INDEX);

        let residual = kahns_topological_sort(&graph).unwrap_err();

        // LAST is blocked behind the cycle as well
        assert_eq!(residual, vec![LAST_INDEX, A, B, C]);
    }

    /// Test: duplicate arcs are counted and released together
    #[test]
    fn test_duplicate_edges() {
        let mut graph = anchored(2);
        graph.add_edge(A, B);
        graph.add_edge(A, B);

        let order = kahns_topological_sort(&graph).unwrap();

        assert_eq!(order, vec![FIRST_INDEX, LAST_INDEX, A, B]);
    }

    /// Test: only the anchors
    #[test]
    fn test_empty_graph() {
        let graph = anchored(0);
        let order = kahns_topological_sort(&graph).unwrap();

        assert_eq!(order, vec![FIRST_INDEX, LAST_INDEX]);
    }

    /// Test: Deterministic output
    #[test]
    fn test_deterministic_output() {
        let mut graph = anchored(3);
        graph.add_edge(B, A);
        graph.add_edge(C, LAST_INDEX);

        let order1 = kahns_topological_sort(&graph).unwrap();
        let order2 = kahns_topological_sort(&graph).unwrap();

        assert_eq!(order1, order2);
    }
}
