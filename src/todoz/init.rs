use crate::config::TodozConfig;
use crate::controller::ListController;
use crate::error::{Result, TodozError};
use crate::store::fs::FileStore;
use crate::store::Scope;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const PROJECT_DIR_NAME: &str = ".todoz";

pub struct TodozContext {
    pub controller: ListController<FileStore>,
    pub settings: Settings,
}

/// Where the data lives and how it is configured, without touching the list.
pub struct Settings {
    pub config: TodozConfig,
    pub data_dir: PathBuf,
}

/// Directory holding the list and config for `scope`.
///
/// `global_override` replaces the platform data dir for `Scope::Global`.
pub fn data_dir(cwd: &Path, scope: Scope, global_override: Option<PathBuf>) -> Result<PathBuf> {
    match scope {
        Scope::Project => Ok(cwd.join(PROJECT_DIR_NAME)),
        Scope::Global => match global_override {
            Some(dir) => Ok(dir),
            None => ProjectDirs::from("com", "todoz", "todoz")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    TodozError::Store("Could not determine the global data directory".into())
                }),
        },
    }
}

/// Resolves the data dir and reads its config. An unreadable config falls
/// back to defaults.
pub fn load_settings(
    cwd: &Path,
    use_global: bool,
    global_override: Option<PathBuf>,
) -> Result<Settings> {
    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };
    let data_dir = data_dir(cwd, scope, global_override)?;

    let config = TodozConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(dir = %data_dir.display(), error = %e, "unreadable config, using defaults");
        TodozConfig::default()
    });
    debug!(?scope, dir = %data_dir.display(), key = %config.storage_key, "settings loaded");

    Ok(Settings { config, data_dir })
}

pub fn initialize(
    cwd: &Path,
    use_global: bool,
    global_override: Option<PathBuf>,
) -> Result<TodozContext> {
    let settings = load_settings(cwd, use_global, global_override)?;
    let store = FileStore::new(settings.data_dir.clone());
    let controller = ListController::load(store, settings.config.storage_key.clone())?;

    Ok(TodozContext {
        controller,
        settings,
    })
}
