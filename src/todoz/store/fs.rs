use super::KeyValueStore;
use crate::error::{Result, TodozError};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodozError::Io)?;
        }
        Ok(())
    }
}

/// Keys become file names, so only `[A-Za-z0-9_-]` is accepted.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(TodozError::Store(format!("Invalid storage key: {:?}", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(TodozError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(TodozError::Io)?;
        fs::rename(&tmp_file, &path).map_err(TodozError::Io)?;

        debug!(path = %path.display(), bytes = value.len(), "wrote store key");
        Ok(())
    }
}
