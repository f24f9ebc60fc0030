//! Identity-keyed tracking of live shared objects
//!
//! Contains:
//! - Allocation identity tokens
//! - The weak ordered set

pub mod identity;
pub mod weak_ordered_set;

pub use identity::Identity;
pub use weak_ordered_set::WeakOrderedSet;
