//! Shared control state and the deltas the executor reports.
//!
//! `ControlState` outlives every utterance. Only the executor writes it;
//! everyone else reads a snapshot.

use crate::feature::FeatureKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn other(&self) -> Theme {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Overlay panels the UI can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Accessibility,
    Navitoir,
    KnowledgeAssistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PanelsOpen {
    pub accessibility: bool,
    pub navitoir: bool,
    pub knowledge_assistant: bool,
}

impl PanelsOpen {
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Accessibility => self.accessibility,
            Panel::Navitoir => self.navitoir,
            Panel::KnowledgeAssistant => self.knowledge_assistant,
        }
    }

    pub fn set(&mut self, panel: Panel, open: bool) {
        match panel {
            Panel::Accessibility => self.accessibility = open,
            Panel::Navitoir => self.navitoir = open,
            Panel::KnowledgeAssistant => self.knowledge_assistant = open,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub accessibility: BTreeMap<FeatureKey, u8>,
    pub theme: Theme,
    pub panels: PanelsOpen,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            accessibility: FeatureKey::ALL.iter().map(|k| (*k, 0)).collect(),
            theme: Theme::default(),
            panels: PanelsOpen::default(),
        }
    }
}

impl ControlState {
    /// Current level of a feature (missing keys read as off)
    pub fn level(&self, key: FeatureKey) -> u8 {
        self.accessibility.get(&key).copied().unwrap_or(0)
    }

    pub fn all_off(&self) -> bool {
        self.accessibility.values().all(|v| *v == 0)
    }
}

/// What a single directive changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StateDelta {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub accessibility: BTreeMap<FeatureKey, u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panels: Option<PanelsOpen>,
}

impl StateDelta {
    pub fn is_empty(&self) -> bool {
        self.accessibility.is_empty() && self.theme.is_none() && self.panels.is_none()
    }

    /// Accessibility or theme changed; the host must persist
    pub fn needs_persist(&self) -> bool {
        !self.accessibility.is_empty() || self.theme.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_every_feature_off() {
        let state = ControlState::default();
        assert_eq!(state.accessibility.len(), FeatureKey::ALL.len());
        assert!(state.all_off());
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.panels.navitoir);
    }

    #[test]
    fn test_missing_key_reads_off() {
        let mut state = ControlState::default();
        state.accessibility.clear();
        assert_eq!(state.level(FeatureKey::Contrast), 0);
    }

    #[test]
    fn test_panels_set() {
        let mut panels = PanelsOpen::default();
        panels.set(Panel::KnowledgeAssistant, true);
        assert!(panels.is_open(Panel::KnowledgeAssistant));
        assert!(!panels.is_open(Panel::Accessibility));
    }

    #[test]
    fn test_delta_persist_rules() {
        let mut delta = StateDelta::default();
        assert!(delta.is_empty());
        delta.panels = Some(PanelsOpen::default());
        assert!(!delta.is_empty());
        assert!(!delta.needs_persist());
        delta.theme = Some(Theme::Dark);
        assert!(delta.needs_persist());
    }
}
