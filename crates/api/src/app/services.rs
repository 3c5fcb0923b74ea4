use std::sync::Arc;

use shoplist_infra::{InMemoryItemStore, ItemStore};

/// Store handle shared by every request handler.
pub type SharedItemStore = Arc<dyn ItemStore>;

/// Fresh, empty in-memory collection.
pub fn in_memory_store() -> SharedItemStore {
    Arc::new(InMemoryItemStore::new())
}
