//! Action directives produced by the classifier.
//!
//! A directive is created per utterance, consumed once by the executor,
//! then discarded.

use crate::feature::FeatureKey;
use crate::state::{Panel, Theme};
use crate::target::{ResourceId, SectionId};
use serde::{Deserialize, Serialize};

/// How a feature level changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "level", rename_all = "snake_case")]
pub enum TransitionKind {
    TurnedOn,
    TurnedOff,
    IncreasedTo(u8),
    DecreasedTo(u8),
    /// Explicit level from the utterance ("level 3", "stufe 2")
    SetTo(u8),
    /// Target equals the current value
    NoOp,
}

/// Outcome of level/direction resolution for one feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub new_value: u8,
    pub transition: TransitionKind,
}

impl Resolution {
    pub fn is_noop(&self) -> bool {
        self.transition == TransitionKind::NoOp
    }
}

/// Theme the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "theme", rename_all = "snake_case")]
pub enum ThemeRequest {
    To(Theme),
    /// Both dark and light vocabularies matched
    Ambiguous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionDirective {
    /// Content question: open the knowledge assistant instead
    Handoff,
    OpenPanel { panel: Panel },
    ResetAccessibility,
    AdjustFeature {
        key: FeatureKey,
        resolution: Resolution,
    },
    SwitchTheme { request: ThemeRequest },
    /// Two-phase: scroll to the resource's section, then open it
    OpenResource { id: ResourceId },
    RequestCv,
    NavigateSection { id: SectionId },
    ShowHelp,
    Unrecognized,
}

impl ActionDirective {
    /// Stable short name (used in logs and the golden corpus)
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Handoff => "handoff",
            Self::OpenPanel { .. } => "open_panel",
            Self::ResetAccessibility => "reset_accessibility",
            Self::AdjustFeature { .. } => "adjust_feature",
            Self::SwitchTheme { .. } => "switch_theme",
            Self::OpenResource { .. } => "open_resource",
            Self::RequestCv => "request_cv",
            Self::NavigateSection { .. } => "navigate_section",
            Self::ShowHelp => "show_help",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Payload rendered as a string, if the directive carries one
    pub fn payload(&self) -> Option<String> {
        match self {
            Self::OpenPanel { panel } => Some(
                match panel {
                    Panel::Accessibility => "accessibility",
                    Panel::Navitoir => "navitoir",
                    Panel::KnowledgeAssistant => "knowledge_assistant",
                }
                .to_string(),
            ),
            Self::AdjustFeature { key, .. } => Some(key.to_string()),
            Self::SwitchTheme { request } => Some(match request {
                ThemeRequest::To(theme) => theme.to_string(),
                ThemeRequest::Ambiguous => "ambiguous".to_string(),
            }),
            Self::OpenResource { id } => Some(id.to_string()),
            Self::NavigateSection { id } => Some(id.to_string()),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.payload() {
            Some(p) => write!(f, "{}({})", self.tag(), p),
            None => write!(f, "{}", self.tag()),
        }
    }
}
