//! JSON-file settings store.

use navitoir_shared::{NavitoirError, PersistedSettings, SettingsStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_not_dir(&self) -> Result<(), NavitoirError> {
        if self.path.is_dir() {
            return Err(NavitoirError::Store(format!(
                "{} is a directory, expected a settings file",
                self.path.display()
            )));
        }
        Ok(())
    }

    /// Delete the settings file. Returns false if there was nothing to delete.
    pub fn clear(&self) -> Result<bool, NavitoirError> {
        self.ensure_not_dir()?;
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        info!("Removed {}", self.path.display());
        Ok(true)
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedSettings>, NavitoirError> {
        self.ensure_not_dir()?;
        if !self.path.exists() {
            debug!("No settings at {}", self.path.display());
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&contents)?;
        Ok(Some(settings))
    }

    fn save(&mut self, settings: &PersistedSettings) -> Result<(), NavitoirError> {
        self.ensure_not_dir()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, contents)?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
