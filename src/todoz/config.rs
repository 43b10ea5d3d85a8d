use crate::error::{Result, TodozError};
use crate::store::fs::validate_key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_KEY: &str = "todos";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 20;

/// Configuration for todoz, stored in .todoz/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Key the list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Terminal width used when laying out rows
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            line_width: default_line_width(),
        }
    }
}

/// Keys accepted by `todoz config`.
pub const CONFIG_KEYS: &[&str] = &["storage-key", "line-width"];

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodozError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodozError::Serialization)?;
        let tmp_file = config_dir.join(format!(".config-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(TodozError::Io)?;
        fs::rename(&tmp_file, &config_path).map_err(TodozError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "line-width" => Ok(self.line_width.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(TodozError::Api("storage-key cannot be empty".into()));
                }
                validate_key(value)?;
                self.storage_key = value.to_string();
            }
            "line-width" => {
                let width: usize = value.trim().parse().map_err(|_| {
                    TodozError::Api(format!("line-width must be a number, got {:?}", value))
                })?;
                self.line_width = width.max(MIN_LINE_WIDTH);
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> TodozError {
    TodozError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
