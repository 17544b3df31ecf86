//! Navitoir host configuration.
//!
//! Config file: ~/.config/navitoir/config.toml, or a path given with --config.
//! Every key is optional; a missing default file means defaults.

use anyhow::{Context, Result};
use navitoir_shared::{EffectTiming, Locale, TriggerRegistry, APP_DIR, CONFIG_FILE, SETTINGS_FILE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding `locale`
pub const LOCALE_ENV: &str = "NAVITOIR_LOCALE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavitoirConfig {
    /// Response language
    #[serde(default)]
    pub locale: Locale,

    /// Delays between deferred steps
    #[serde(default)]
    pub timing: EffectTiming,

    /// Extra trigger table layered on top of the built-in one
    #[serde(default)]
    pub triggers_path: Option<PathBuf>,

    /// Override for the persisted settings file
    #[serde(default)]
    pub settings_path: Option<PathBuf>,

    /// Section id -> page anchor
    #[serde(default)]
    pub sections: BTreeMap<String, String>,

    /// Resource id -> URL
    #[serde(default)]
    pub resources: BTreeMap<String, String>,
}

impl NavitoirConfig {
    /// ~/.config/navitoir/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from an explicit path (must exist) or the default location
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: NavitoirConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply NAVITOIR_LOCALE if set
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_locale_override(std::env::var(LOCALE_ENV).ok().as_deref())
    }

    pub fn apply_locale_override(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.locale = raw
                .parse()
                .with_context(|| format!("Invalid {} value", LOCALE_ENV))?;
        }
        Ok(())
    }

    /// Settings file: configured path, else ~/.local/share/navitoir/settings.json
    pub fn settings_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.settings_path {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir().context("Cannot determine data directory")?;
        Ok(data_dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Built-in trigger table plus the optional override table
    pub fn registry(&self) -> Result<TriggerRegistry> {
        let mut registry =
            TriggerRegistry::builtin().context("Built-in trigger table is invalid")?;
        if let Some(path) = &self.triggers_path {
            let extra = TriggerRegistry::from_path(path)
                .with_context(|| format!("Failed to load trigger table {}", path.display()))?;
            info!("Layered {} trigger(s) from {}", extra.len(), path.display());
            registry.extend(extra);
        }
        Ok(registry)
    }
}
