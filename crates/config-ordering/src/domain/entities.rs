//! Core entities for configuration ordering

use super::value_objects::Node;
use serde::{Deserialize, Serialize};

/// Declared ordering constraints for one entry.
///
/// `None` means the side was not declared at all. When neither side is
/// declared the orderer applies its default placement instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement<N> {
    /// Nodes this entry must follow
    pub after: Option<Vec<Node<N>>>,
    /// Nodes this entry must precede
    pub before: Option<Vec<Node<N>>>,
}

impl<N> Placement<N> {
    pub fn new() -> Self {
        Self {
            after: None,
            before: None,
        }
    }

    pub fn after(mut self, target: impl Into<Node<N>>) -> Self {
        self.after.get_or_insert_with(Vec::new).push(target.into());
        self
    }

    pub fn after_all<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node<N>>,
    {
        self.after
            .get_or_insert_with(Vec::new)
            .extend(targets.into_iter().map(Into::into));
        self
    }

    pub fn before(mut self, target: impl Into<Node<N>>) -> Self {
        self.before.get_or_insert_with(Vec::new).push(target.into());
        self
    }

    pub fn before_all<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node<N>>,
    {
        self.before
            .get_or_insert_with(Vec::new)
            .extend(targets.into_iter().map(Into::into));
        self
    }

    /// True if neither side was declared.
    pub fn is_unconstrained(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }

    /// Targets of the `after` side, empty if undeclared.
    pub fn after_targets(&self) -> &[Node<N>] {
        self.after.as_deref().unwrap_or(&[])
    }

    /// Targets of the `before` side, empty if undeclared.
    pub fn before_targets(&self) -> &[Node<N>] {
        self.before.as_deref().unwrap_or(&[])
    }
}

impl<N> Default for Placement<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A registered entry: name, payload and its resolved placement.
#[derive(Clone, Debug)]
pub struct Entry<N, V> {
    pub name: N,
    pub value: V,
    pub placement: Placement<N>,
}

impl<N, V> Entry<N, V> {
    pub fn new(name: N, value: V, placement: Placement<N>) -> Self {
        Self {
            name,
            value,
            placement,
        }
    }
}

/// Index of the `First` anchor in a [`DependencyGraph`].
pub const FIRST_INDEX: usize = 0;
/// Index of the `Last` anchor in a [`DependencyGraph`].
pub const LAST_INDEX: usize = 1;
/// Entries are numbered after the two anchors, in registration order.
pub const ENTRY_OFFSET: usize = 2;

/// Index-based ordering graph built fresh for every sort.
///
/// Node `i` keeps its successors in `adjacency[i]` in arc order, with
/// repeats when the same arc was declared twice.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// All arcs in declaration order: from -> to
    pub edges: Vec<(usize, usize)>,
    /// Adjacency list: from -> [to, to, ...]
    pub adjacency: Vec<Vec<usize>>,
    /// In-degree count for each node
    pub in_degree: Vec<usize>,
}

impl DependencyGraph {
    /// Graph with the two anchors and `entry_count` entry nodes, no arcs.
    pub fn with_entries(entry_count: usize) -> Self {
        let node_count = ENTRY_OFFSET + entry_count;
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count],
            in_degree: vec![0; node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.in_degree.len()
    }

    /// Add an arc. Both ends must be valid node indices.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.adjacency[from].push(to);
        self.in_degree[to] += 1;
        self.edges.push((from, to));
    }

    /// Check if an edge exists from -> to
    #[cfg(test)]
    pub(crate) fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .map(|successors| successors.contains(&to))
            .unwrap_or(false)
    }

    /// Nodes with no incoming arcs, in node order.
    pub fn get_zero_degree_nodes(&self) -> Vec<usize> {
        self.in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(node, _)| node)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_builder_collects_targets() {
        let placement: Placement<&str> = Placement::new()
            .after("a")
            .after_all(["b", "c"])
            .before(Node::Last);

        assert_eq!(
            placement.after_targets(),
            &[Node::Entry("a"), Node::Entry("b"), Node::Entry("c")]
        );
        assert_eq!(placement.before_targets(), &[Node::Last]);
        assert!(!placement.is_unconstrained());
    }

    #[test]
    fn test_empty_declaration_is_not_unconstrained() {
        let placement: Placement<&str> = Placement::new().after_all(Vec::<&str>::new());
        assert!(!placement.is_unconstrained());
        assert!(placement.after_targets().is_empty());
        assert!(Placement::<&str>::default().is_unconstrained());
    }

    #[test]
    fn test_graph_tracks_in_degree_and_repeats() {
        let mut graph = DependencyGraph::with_entries(2);
        graph.add_edge(FIRST_INDEX, LAST_INDEX);
        graph.add_edge(ENTRY_OFFSET, LAST_INDEX);
        graph.add_edge(ENTRY_OFFSET, LAST_INDEX);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.in_degree[LAST_INDEX], 3);
        assert!(graph.has_edge(ENTRY_OFFSET, LAST_INDEX));
        assert!(!graph.has_edge(LAST_INDEX, ENTRY_OFFSET));
        assert_eq!(
            graph.get_zero_degree_nodes(),
            vec![FIRST_INDEX, ENTRY_OFFSET, ENTRY_OFFSET + 1]
        );
    }
}
