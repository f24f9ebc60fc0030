//! Error types for configuration ordering

use super::value_objects::{Direction, Node};
use std::fmt;
use thiserror::Error;

/// All errors that can occur while ordering entries
#[derive(Debug, Error)]
pub enum OrderingError<N: fmt::Debug> {
    /// A declared constraint names nothing that is present at sort time
    #[error("Unsatisfied {direction} dependencies: {}", join_names(.entries))]
    UnsatisfiedDependency { direction: Direction, entries: Vec<N> },

    /// Entries remain that can never be emitted
    #[error("{0}")]
    CyclicDependency(CycleReport<N>),

    /// `remove` called for a name that is not registered
    #[error("Unknown entry: {0:?}")]
    UnknownEntry(N),
}

impl<N: fmt::Debug> OrderingError<N> {
    pub fn is_cycle(&self) -> bool {
        matches!(self, OrderingError::CyclicDependency(_))
    }
}

fn join_names<N: fmt::Debug>(names: &[N]) -> String {
    names
        .iter()
        .map(|name| format!("{name:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The residual subgraph left when a cycle blocks traversal.
///
/// Each unresolved node is listed once, in node order, with every successor
/// it still has an arc to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleReport<N> {
    pub cycles: Vec<(Node<N>, Vec<Node<N>>)>,
}

impl<N> CycleReport<N> {
    /// Unresolved nodes in report order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N>> {
        self.cycles.iter().map(|(node, _)| node)
    }

    /// Successors still blocked behind `node`, if it is part of the residue.
    pub fn successors(&self, node: &Node<N>) -> Option<&[Node<N>]>
    where
        N: PartialEq,
    {
        self.cycles
            .iter()
            .find(|(candidate, _)| candidate == node)
            .map(|(_, successors)| successors.as_slice())
    }
}

impl<N: fmt::Debug> fmt::Display for CycleReport<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Implicit ordering cycle: ")?;
        for (i, (node, successors)) in self.cycles.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            let successors = successors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "{node} sorts before [{successors}]")?;
        }
        Ok(())
    }
}
