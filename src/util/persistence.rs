use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use directories::ProjectDirs;
use dioxus_logger::tracing;
use serde_json::Error as SerdeError;

use crate::domain::app_state::PersistedState;

const APP_QUALIFIER: &str = "ge";
const APP_ORG: &str = "CarTransporter";
const APP_NAME: &str = "CarTransporter";

/// Storage for user preferences. The UI receives one through context and
/// never touches the filesystem directly.
pub trait PreferenceStore {
    fn load(&self) -> Option<PersistedState>;
    fn save(&self, state: &PersistedState) -> Result<(), PersistSaveError>;
}

/// `preferences.json` under the platform config directory.
#[derive(Clone, Debug, Default)]
pub struct JsonFileStore {
    path: Option<PathBuf>,
}

impl JsonFileStore {
    pub fn new() -> Self {
        let path = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| dirs.config_dir().join("preferences.json"));
        Self { path }
    }

    #[cfg(test)]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.path.is_some()
    }
}

/// The on-disk store when a config directory exists, otherwise an in-memory one.
pub fn default_store() -> Rc<dyn PreferenceStore> {
    let store = JsonFileStore::new();
    if store.is_available() {
        Rc::new(store)
    } else {
        tracing::warn!("No config directory available; preferences last for this session only");
        Rc::new(MemoryStore::default())
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Option<PersistedState> {
        let path = self.path.as_ref()?;
        let data = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&data) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!("Ignoring unreadable preferences at {}: {err}", path.display());
                None
            }
        }
    }

    fn save(&self, state: &PersistedState) -> Result<(), PersistSaveError> {
        let path = self
            .path
            .as_ref()
            .ok_or(PersistSaveError::StorageUnavailable)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Keeps preferences for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Option<PersistedState>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<PersistedState> {
        self.state.borrow().clone()
    }

    fn save(&self, state: &PersistedState) -> Result<(), PersistSaveError> {
        *self.state.borrow_mut() = Some(state.clone());
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
