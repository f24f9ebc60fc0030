//! Dependency Orderer
//!
//! Holds named entries with relative ordering constraints and produces a
//! stable total order on demand.

use crate::algorithms::{build_dependency_graph, kahns_topological_sort};
use crate::config::OrdererConfig;
use crate::domain::entities::{
    DependencyGraph, Entry, Placement, ENTRY_OFFSET, FIRST_INDEX, LAST_INDEX,
};
use crate::domain::errors::{CycleReport, OrderingError};
use crate::domain::invariants::{
    invariant_completeness, invariant_no_cycles, invariant_topological_order,
};
use crate::domain::value_objects::Node;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, warn};

/// Topological sorter over named entries.
///
/// Sorting pipeline:
/// 1. Build the graph (anchors, then entries in registration order)
/// 2. Reject constraints whose targets are all missing
/// 3. Execute stable Kahn's algorithm
/// 4. Return `(name, value)` pairs without the anchors
///
/// Ties are broken by registration order, so unconstrained entries come out
/// in the order they were added.
#[derive(Clone, Debug)]
pub struct DependencyOrderer<N, V> {
    config: OrdererConfig<N>,
    entries: Vec<Entry<N, V>>,
}

impl<N, V> DependencyOrderer<N, V>
where
    N: Eq + Hash + Clone + fmt::Debug,
{
    /// Create a new orderer with default config
    pub fn new() -> Self {
        Self::with_config(OrdererConfig::default())
    }

    /// Create a new orderer with custom config
    pub fn with_config(config: OrdererConfig<N>) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn config(&self) -> &OrdererConfig<N> {
        &self.config
    }

    /// Register `name` with the default placement.
    ///
    /// See [`add_with`](Self::add_with).
    pub fn add(&mut self, name: N, value: V) -> Option<V> {
        self.add_with(name, value, Placement::new())
    }

    /// Register or replace `name`.
    ///
    /// Replacing drops the old entry and all of its constraints before the
    /// new one is inserted at the end of registration order. Returns the
    /// replaced value, if any.
    pub fn add_with(&mut self, name: N, value: V, placement: Placement<N>) -> Option<V> {
        let previous = self
            .position(&name)
            .map(|index| self.entries.remove(index).value);

        let placement = if placement.is_unconstrained() {
            self.config.default_placement()
        } else {
            placement
        };

        debug!(
            name = ?name,
            after = placement.after_targets().len(),
            before = placement.before_targets().len(),
            replaced = previous.is_some(),
            "Registered ordering entry"
        );

        self.entries.push(Entry::new(name, value, placement));
        previous
    }

    /// Remove `name` and every constraint it declared.
    pub fn remove(&mut self, name: &N) -> Result<V, OrderingError<N>> {
        let Some(index) = self.position(name) else {
            return Err(OrderingError::UnknownEntry(name.clone()));
        };

        debug!(name = ?name, "Removed ordering entry");
        Ok(self.entries.remove(index).value)
    }

    /// Payloads in registration order (not sorted order).
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &N> {
        self.entries.iter().map(|entry| &entry.name)
    }

    pub fn get(&self, name: &N) -> Option<&V> {
        self.entry(name).map(|entry| &entry.value)
    }

    /// The resolved placement of `name`, defaults already applied.
    pub fn placement(&self, name: &N) -> Option<&Placement<N>> {
        self.entry(name).map(|entry| &entry.placement)
    }

    pub fn contains(&self, name: &N) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in dependency-respecting order.
    ///
    /// Fails without a partial result if a constraint targets only missing
    /// names or if entries form a cycle.
    pub fn sorted(&self) -> Result<Vec<(&N, &V)>, OrderingError<N>> {
        let graph = build_dependency_graph(&self.entries).inspect_err(|err| {
            warn!(error = %err, "Ordering rejected");
        })?;

        let order = kahns_topological_sort(&graph).map_err(|residual| {
            let err = OrderingError::CyclicDependency(self.cycle_report(&graph, &residual));
            warn!(error = %err, "Ordering rejected");
            err
        })?;

        debug_assert!(invariant_no_cycles(&graph));
        debug_assert!(invariant_completeness(&order, &graph));
        debug_assert!(invariant_topological_order(&order, &graph));

        let sorted: Vec<_> = order
            .into_iter()
            .filter_map(|node| node.checked_sub(ENTRY_OFFSET))
            .map(|index| {
                let entry = &self.entries[index];
                (&entry.name, &entry.value)
            })
            .collect();

        debug!(
            entries = sorted.len(),
            arcs = graph.edges.len(),
            "Ordering complete"
        );

        Ok(sorted)
    }

    fn cycle_report(&self, graph: &DependencyGraph, residual: &[usize]) -> CycleReport<N> {
        let cycles = residual
            .iter()
            .map(|&node| {
                let successors = graph.adjacency[node]
                    .iter()
                    .map(|&successor| self.node(successor))
                    .collect();
                (self.node(node), successors)
            })
            .collect();
        CycleReport { cycles }
    }

    fn node(&self, index: usize) -> Node<N> {
        match index {
            FIRST_INDEX => Node::First,
            LAST_INDEX => Node::Last,
            _ => Node::Entry(self.entries[index - ENTRY_OFFSET].name.clone()),
        }
    }

    fn position(&self, name: &N) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.name == name)
    }

    fn entry(&self, name: &N) -> Option<&Entry<N, V>> {
        self.entries.iter().find(|entry| &entry.name == name)
    }
}

impl<N, V> Default for DependencyOrderer<N, V>
where
    N: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
