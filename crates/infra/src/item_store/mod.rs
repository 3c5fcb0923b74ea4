//! Item collection storage.

pub mod in_memory;

pub use in_memory::InMemoryItemStore;

use std::sync::Arc;

use shoplist_core::{Item, ItemResult};

/// Ordered item collection with first-match-by-name lookups.
///
/// Implementations must run each operation's scan and mutation as one
/// uninterrupted step: two writers never interleave.
pub trait ItemStore: Send + Sync {
    /// All items, in insertion order.
    fn list(&self) -> Vec<Item>;

    /// Append an item. Never rejects; returns the stored item.
    fn create(&self, item: Item) -> Item;

    /// First item whose name equals `name`.
    fn get(&self, name: &str) -> ItemResult<Item>;

    /// Shallow-merge `patch` over the first item named `name`, in place.
    /// Returns the merged item.
    fn patch(&self, name: &str, patch: Item) -> ItemResult<Item>;

    /// Remove the first item named `name`, keeping the order of the rest.
    /// Returns the removed item.
    fn delete(&self, name: &str) -> ItemResult<Item>;

    /// Drop every item (test/dev reset; not exposed over HTTP).
    fn clear(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn list(&self) -> Vec<Item> {
        (**self).list()
    }

    fn create(&self, item: Item) -> Item {
        (**self).create(item)
    }

    fn get(&self, name: &str) -> ItemResult<Item> {
        (**self).get(name)
    }

    fn patch(&self, name: &str, patch: Item) -> ItemResult<Item> {
        (**self).patch(name, patch)
    }

    fn delete(&self, name: &str) -> ItemResult<Item> {
        (**self).delete(name)
    }

    fn clear(&self) {
        (**self).clear()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
