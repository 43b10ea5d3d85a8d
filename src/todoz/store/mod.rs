//! # Storage Layer
//!
//! todoz persists the whole list as one JSON document under a single key. The
//! [`KeyValueStore`] trait is that get/set pair and nothing more: the controller
//! reads the key once at startup and overwrites it after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage. Each key is a file `<key>.json`
//!   inside the store directory, written atomically (temp file + rename).
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Scope Pattern
//!
//! The CLI picks the store directory by [`Scope`]:
//! - `Scope::Project`: Local `.todoz/` directory in the current directory
//! - `Scope::Global`: User-wide storage (`~/.local/share/todoz/` or `$TODOZ_HOME`)
//!
//! ## Storage Layout
//!
//! ```text
//! .todoz/
//! ├── todos.json          # The list (JSON array of items)
//! └── config.json         # Configuration
//! ```
//!
//! Writes are full overwrites; the last write wins.

use crate::error::Result;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Project,
    Global,
}

/// A single-slot-per-key string store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
