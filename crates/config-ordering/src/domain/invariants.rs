//! Domain invariants for configuration ordering
//!
//! Checked with `debug_assert!` after every successful sort.

use super::entities::DependencyGraph;

/// INVARIANT-1: Topological Order
/// For every arc A -> B, A is emitted before B.
pub fn invariant_topological_order(order: &[usize], graph: &DependencyGraph) -> bool {
    let Some(position) = positions(order, graph.node_count()) else {
        return false;
    };

    graph.edges.iter().all(|&(from, to)| {
        matches!((position[from], position[to]), (Some(a), Some(b)) if a < b)
    })
}

/// INVARIANT-2: No Cycles
/// The graph must be a DAG.
pub fn invariant_no_cycles(graph: &DependencyGraph) -> bool {
    // 0 = unvisited, 1 = on the DFS stack, 2 = fully explored
    let mut state = vec![0u8; graph.node_count()];

    for start in 0..graph.node_count() {
        if state[start] != 0 {
            continue;
        }
        // Iterative DFS: (node, next successor index)
        let mut stack = vec![(start, 0usize)];
        state[start] = 1;
        while let Some((node, next)) = stack.last_mut() {
            let node = *node;
            let Some(&successor) = graph.adjacency[node].get(*next) else {
                state[node] = 2;
                stack.pop();
                continue;
            };
            *next += 1;
            match state[successor] {
                0 => {
                    state[successor] = 1;
                    stack.push((successor, 0));
                }
                1 => return false, // Back edge found - cycle!
                _ => {}
            }
        }
    }

    true
}

/// INVARIANT-3: Completeness
/// Every node is emitted exactly once.
pub fn invariant_completeness(order: &[usize], graph: &DependencyGraph) -> bool {
    order.len() == graph.node_count() && positions(order, graph.node_count()).is_some()
}

/// Position of each node in `order`, or `None` if a node repeats or is out
/// of range.
fn positions(order: &[usize], node_count: usize) -> Option<Vec<Option<usize>>> {
    let mut position = vec![None; node_count];
    for (i, &node) in order.iter().enumerate() {
        let slot = position.get_mut(node)?;
        if slot.is_some() {
            return None;
        }
        *slot = Some(i);
    }
    Some(position)
}
