//! Weak Ordered Set
//!
//! Tracks shared objects without extending their lifetime, most recently
//! added last.

use super::identity::Identity;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

use tracing::trace;

/// An ordered set of non-owning references, deduplicated by identity.
///
/// Adding an item that is already tracked moves it to the end. Once the last
/// strong owner of an item drops it, the item is no longer counted, contained
/// or yielded, and its bookkeeping is compacted on the next mutation (or an
/// explicit [`prune`](Self::prune)).
pub struct WeakOrderedSet<T: ?Sized> {
    items: HashMap<Identity, Weak<T>>,
    order: Vec<Identity>,
}

impl<T: ?Sized> WeakOrderedSet<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Track `item` as the most recently added entry.
    pub fn add(&mut self, item: &Arc<T>) {
        self.prune();

        let id = Identity::of(item);
        if self.items.contains_key(&id) {
            self.order.retain(|tracked| *tracked != id);
            self.order.push(id);
            return;
        }

        self.items.insert(id, Arc::downgrade(item));
        self.order.push(id);
    }

    /// Stop tracking `item`. Returns false if it was not tracked.
    pub fn remove(&mut self, item: &Arc<T>) -> bool {
        self.prune();

        let id = Identity::of(item);
        if self.items.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|tracked| *tracked != id);
        true
    }

    /// Forget every entry. Tracked objects are not affected.
    pub fn empty(&mut self) {
        self.items.clear();
        self.order.clear();
    }

    /// Drop bookkeeping for objects that are gone, returning how many.
    pub fn prune(&mut self) -> usize {
        let before = self.order.len();
        let items = &mut self.items;
        self.order.retain(|id| {
            let alive = items.get(id).is_some_and(|weak| weak.strong_count() > 0);
            if !alive {
                items.remove(id);
            }
            alive
        });

        let pruned = before - self.order.len();
        if pruned > 0 {
            trace!(pruned, remaining = self.order.len(), "Compacted dead entries");
        }
        pruned
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.live().count()
    }

    pub fn is_empty(&self) -> bool {
        self.live().next().is_none()
    }

    /// True if `item` is tracked and still alive.
    pub fn contains(&self, item: &Arc<T>) -> bool {
        self.items
            .get(&Identity::of(item))
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Live entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Arc<T>> + '_ {
        self.live()
    }

    /// The most recently added live entry.
    pub fn last(&self) -> Option<Arc<T>> {
        self.order
            .iter()
            .rev()
            .find_map(|id| self.items.get(id).and_then(Weak::upgrade))
    }

    fn live(&self) -> impl Iterator<Item = Arc<T>> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id).and_then(Weak::upgrade))
    }
}

impl<T: ?Sized> Default for WeakOrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for WeakOrderedSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakOrderedSet")
            .field("live", &self.len())
            .field("tracked", &self.order.len())
            .finish()
    }
}
