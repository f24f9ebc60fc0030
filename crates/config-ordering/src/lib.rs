//! # Configuration Ordering Subsystem
//!
//! Deterministic topological ordering of named configuration entries that
//! declare "before X" / "after Y" constraints, and identity-keyed tracking of
//! recently touched live objects.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (Placement, Entry, DependencyGraph), nodes and errors
//! - **Algorithms**: Stable Kahn's sort, dependency graph building
//! - **Application**: `DependencyOrderer`, the public sorter
//! - **Tracking**: `WeakOrderedSet`, non-owning most-recently-used tracking
//!
//! ## Example
//!
//! ```
//! use config_ordering::{DependencyOrderer, Placement};
//!
//! let mut orderer = DependencyOrderer::new();
//! orderer.add("c", 3);
//! orderer.add_with("b", 2, Placement::new().after("c"));
//! orderer.add_with("a", 1, Placement::new().after("b"));
//!
//! let sorted = orderer.sorted().unwrap();
//! assert_eq!(sorted, vec![(&"c", &3), (&"b", &2), (&"a", &1)]);
//! ```

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod tracking;

pub use application::DependencyOrderer;
pub use config::OrdererConfig;
pub use domain::entities::{Entry, Placement};
pub use domain::errors::{CycleReport, OrderingError};
pub use domain::value_objects::{Direction, Node};
pub use tracking::{Identity, WeakOrderedSet};
