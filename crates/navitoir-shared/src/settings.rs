//! Persisted accessibility/theme snapshot and the store seam.

use crate::error::NavitoirError;
use crate::feature::FeatureKey;
use crate::state::{ControlState, Theme};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What survives a restart. Panels are transient and never saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    #[serde(default)]
    pub accessibility: BTreeMap<FeatureKey, u8>,
    #[serde(default)]
    pub theme: Theme,
    pub updated_at: DateTime<Utc>,
}

impl PersistedSettings {
    pub fn from_state(state: &ControlState) -> Self {
        Self {
            accessibility: state.accessibility.clone(),
            theme: state.theme,
            updated_at: Utc::now(),
        }
    }
}

/// Host-provided persistence. `load` returns `None` when nothing was saved yet.
pub trait SettingsStore {
    fn load(&self) -> Result<Option<PersistedSettings>, NavitoirError>;
    fn save(&mut self, settings: &PersistedSettings) -> Result<(), NavitoirError>;
}

/// In-memory store for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    saved: Option<PersistedSettings>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedSettings>, NavitoirError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, settings: &PersistedSettings) -> Result<(), NavitoirError> {
        self.saved = Some(settings.clone());
        self.saves += 1;
        Ok(())
    }
}
