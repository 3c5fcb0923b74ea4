use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shoplist_core::{Item, ItemError, ItemResult};

use super::ItemStore;

/// In-memory item collection guarded by a single-writer lock.
///
/// Reads share the lock; every mutation holds the write lock for its whole
/// scan + update.
#[derive(Debug)]
pub struct InMemoryItemStore {
    inner: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Seed a store with existing items, in order.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            inner: RwLock::new(items.into_iter().collect()),
        }
    }

    // The vector holds plain data and every mutation is a single Vec call,
    // so a poisoned lock still guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Item>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Item>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

fn position(items: &[Item], name: &str) -> Option<usize> {
    items.iter().position(|item| item.has_name(name))
}

impl ItemStore for InMemoryItemStore {
    fn list(&self) -> Vec<Item> {
        self.read().clone()
    }

    fn create(&self, item: Item) -> Item {
        let mut items = self.write();
        items.push(item.clone());
        tracing::debug!(name = item.name(), index = items.len() - 1, "item added");
        item
    }

    fn get(&self, name: &str) -> ItemResult<Item> {
        let items = self.read();
        position(&items, name)
            .map(|idx| items[idx].clone())
            .ok_or(ItemError::NotFound)
    }

    fn patch(&self, name: &str, patch: Item) -> ItemResult<Item> {
        let mut items = self.write();
        let idx = position(&items, name).ok_or(ItemError::NotFound)?;

        let slot = &mut items[idx];
        slot.merge(patch);
        tracing::debug!(name, index = idx, new_name = slot.name(), "item updated");
        Ok(slot.clone())
    }

    fn delete(&self, name: &str) -> ItemResult<Item> {
        let mut items = self.write();
        let idx = position(&items, name).ok_or(ItemError::NotFound)?;

        let removed = items.remove(idx);
        tracing::debug!(name, index = idx, "item deleted");
        Ok(removed)
    }

    fn clear(&self) {
        self.write().clear();
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
