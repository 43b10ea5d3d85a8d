use super::KeyValueStore;
use crate::error::{Result, TodozError};
use std::collections::HashMap;

/// In-memory store for testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    writes: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(TodozError::Store("Simulated write error".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Item, ItemId};

    pub const KEY: &str = "todos";

    pub struct StoreFixture {
        pub store: InMemoryStore,
        items: Vec<Item>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                items: Vec::new(),
            }
        }

        /// Adds an item with id `id`; the list is written on [`StoreFixture::build`].
        pub fn with_item(mut self, id: i64, text: &str) -> Self {
            self.items.push(Item::new(ItemId(id), text.to_string()));
            self
        }

        pub fn with_completed_item(mut self, id: i64, text: &str) -> Self {
            let mut item = Item::new(ItemId(id), text.to_string());
            item.completed = true;
            self.items.push(item);
            self
        }

        pub fn with_raw(mut self, raw: &str) -> Self {
            self.store.set(KEY, raw).unwrap();
            self
        }

        pub fn build(mut self) -> InMemoryStore {
            if !self.items.is_empty() {
                let json = serde_json::to_string(&self.items).unwrap();
                self.store.set(KEY, &json).unwrap();
            }
            self.store.writes = 0;
            self.store
        }
    }
}
