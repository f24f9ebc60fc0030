//! Dependency Graph Builder
//!
//! Turns registered entries into an index-based [`DependencyGraph`] and
//! rejects declared constraints that point at nothing.

use crate::domain::entities::{DependencyGraph, Entry, ENTRY_OFFSET, FIRST_INDEX, LAST_INDEX};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{Direction, Node};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Resolves nodes to graph indices for one set of entries.
struct NodeIndex<'a, N> {
    by_name: HashMap<&'a N, usize>,
}

impl<'a, N: Eq + Hash> NodeIndex<'a, N> {
    fn new<V>(entries: &'a [Entry<N, V>]) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (&entry.name, ENTRY_OFFSET + i))
            .collect();
        Self { by_name }
    }

    /// Graph index of `node`, or `None` if it names an unregistered entry.
    fn resolve(&self, node: &Node<N>) -> Option<usize> {
        match node {
            Node::First => Some(FIRST_INDEX),
            Node::Last => Some(LAST_INDEX),
            Node::Entry(name) => self.by_name.get(name).copied(),
        }
    }
}

/// Build the ordering graph for `entries`.
///
/// Arcs are added in this order:
/// 1. FIRST -> LAST
/// 2. For each entry in registration order, `target -> entry` per `after`
///    target, then `entry -> target` per `before` target
///
/// Arcs with an unknown end are dropped. Every entry that declared a side,
/// even with an empty list, must keep at least one arc on that side, otherwise the build fails
/// with [`OrderingError::UnsatisfiedDependency`] (`before` is checked first).
pub fn build_dependency_graph<N, V>(
    entries: &[Entry<N, V>],
) -> Result<DependencyGraph, OrderingError<N>>
where
    N: Eq + Hash + Clone + fmt::Debug,
{
    let index = NodeIndex::new(entries);
    let mut graph = DependencyGraph::with_entries(entries.len());
    let node_count = graph.node_count();

    // has_before[i]: node i is the source of some arc
    // has_after[i]: node i is the target of some arc
    let mut has_before = vec![false; node_count];
    let mut has_after = vec![false; node_count];

    let mut add_arc = |graph: &mut DependencyGraph, from: usize, to: usize| {
        graph.add_edge(from, to);
        has_before[from] = true;
        has_after[to] = true;
    };

    add_arc(&mut graph, FIRST_INDEX, LAST_INDEX);

    for (i, entry) in entries.iter().enumerate() {
        let node = ENTRY_OFFSET + i;
        for target in entry.placement.after_targets() {
            if let Some(from) = index.resolve(target) {
                add_arc(&mut graph, from, node);
            }
        }
        for target in entry.placement.before_targets() {
            if let Some(to) = index.resolve(target) {
                add_arc(&mut graph, node, to);
            }
        }
    }

    let unsatisfied = |direction: Direction, satisfied: &[bool]| -> Vec<N> {
        entries
            .iter()
            .enumerate()
            .filter(|(i, entry)| {
                let declared = match direction {
                    Direction::Before => entry.placement.before.is_some(),
                    Direction::After => entry.placement.after.is_some(),
                };
                declared && !satisfied[ENTRY_OFFSET + i]
            })
            .map(|(_, entry)| entry.name.clone())
            .collect()
    };

    for (direction, satisfied) in [
        (Direction::Before, &has_before),
        (Direction::After, &has_after),
    ] {
        let missing = unsatisfied(direction, satisfied.as_slice());
        if !missing.is_empty() {
            return Err(OrderingError::UnsatisfiedDependency {
                direction,
                entries: missing,
            });
        }
    }

    Ok(graph)
}
