//! Value objects for configuration ordering
//!
//! Nodes are what ordering constraints point at: one of the two fixed
//! anchors or the name of a registered entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in the ordering graph.
///
/// `First` and `Last` are always present and bound the whole order. Nothing
/// should be declared after `Last` or before `First`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node<N> {
    /// Anchor that precedes every entry
    First,
    /// Anchor that follows every entry placed before it
    Last,
    /// A registered (or referenced) entry name
    Entry(N),
}

impl<N> Node<N> {
    pub fn is_anchor(&self) -> bool {
        matches!(self, Node::First | Node::Last)
    }

    /// The entry name, or `None` for an anchor.
    pub fn name(&self) -> Option<&N> {
        match self {
            Node::Entry(name) => Some(name),
            Node::First | Node::Last => None,
        }
    }
}

impl<N> From<N> for Node<N> {
    fn from(name: N) -> Self {
        Node::Entry(name)
    }
}

impl<N: fmt::Debug> fmt::Display for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::First => f.write_str("FIRST"),
            Node::Last => f.write_str("LAST"),
            Node::Entry(name) => write!(f, "{name:?}"),
        }
    }
}

/// Which side of an entry a constraint sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The entry must precede its targets
    Before,
    /// The entry must follow its targets
    After,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Before => f.write_str("before"),
            Direction::After => f.write_str("after"),
        }
    }
}
