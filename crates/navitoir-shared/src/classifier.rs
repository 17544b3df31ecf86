//! Intent classifier pipeline.
//!
//! Ordered, short-circuiting stages. The first stage that fires decides the
//! directive; the order is observable behavior and must not change:
//!
//! 1. Handoff (content question without a navigation verb)
//! 2. Reset all accessibility settings
//! 3. Accessibility panel
//! 4. Feature adjustment (longest feature phrase, then level/direction)
//! 5. Theme switch (never for blue-light utterances)
//! 6. CV request
//! 7. Certificate/project resource (needs a navigation verb)
//! 8. Section navigation (longest section phrase)
//! 9. Help, then fallback

use crate::directive::{ActionDirective, ThemeRequest};
use crate::registry::{Category, Payload, PhraseSet, TriggerRegistry};
use crate::resolver;
use crate::state::{ControlState, Panel, Theme};
use crate::target::{ResourceId, SectionId};
use crate::utterance::Utterance;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Utterances about the blue light filter never switch the theme
static BLUE_LIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"blue\s*light|blaulicht").unwrap());

/// Pipeline stage that produced a directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Handoff,
    Reset,
    AccessibilityPanel,
    Feature,
    Theme,
    Cv,
    Resource,
    Section,
    Help,
    Fallback,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Handoff => "handoff",
            Self::Reset => "reset",
            Self::AccessibilityPanel => "accessibility_panel",
            Self::Feature => "feature",
            Self::Theme => "theme",
            Self::Cv => "cv",
            Self::Resource => "resource",
            Self::Section => "section",
            Self::Help => "help",
            Self::Fallback => "fallback",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub directive: ActionDirective,
    pub stage: Stage,
}

/// Read-only classifier over a trigger registry
#[derive(Debug, Clone, Copy)]
pub struct IntentClassifier<'a> {
    registry: &'a TriggerRegistry,
}

impl<'a> IntentClassifier<'a> {
    pub fn new(registry: &'a TriggerRegistry) -> Self {
        Self { registry }
    }

    /// Classify one utterance against a state snapshot. Total: every input
    /// yields exactly one directive.
    pub fn classify(&self, utterance: &Utterance, state: &ControlState) -> Classification {
        let text = utterance.normalized();
        if text.is_empty() {
            return done(ActionDirective::Unrecognized, Stage::Fallback);
        }

        let navigation = self.registry.matches(PhraseSet::NavigationVerbs, text);

        // Content questions go to the knowledge assistant unless phrased as navigation
        if !navigation && self.registry.matches(PhraseSet::ContentQuestions, text) {
            return done(ActionDirective::Handoff, Stage::Handoff);
        }

        if self.registry.matches(PhraseSet::ResetAccessibility, text) {
            return done(ActionDirective::ResetAccessibility, Stage::Reset);
        }

        if self.registry.matches(PhraseSet::AccessibilityPanel, text) {
            return done(
                ActionDirective::OpenPanel {
                    panel: Panel::Accessibility,
                },
                Stage::AccessibilityPanel,
            );
        }

        if let Some(directive) = self.feature(text, state) {
            return done(directive, Stage::Feature);
        }

        if let Some(request) = self.theme(text) {
            return done(ActionDirective::SwitchTheme { request }, Stage::Theme);
        }

        if self.registry.matches(PhraseSet::Cv, text) {
            let directive = if navigation {
                ActionDirective::OpenResource { id: ResourceId::Cv }
            } else if self.registry.matches(PhraseSet::CvRequest, text) {
                ActionDirective::RequestCv
            } else {
                ActionDirective::NavigateSection { id: SectionId::Main }
            };
            return done(directive, Stage::Cv);
        }

        if navigation {
            if let Some(id) = self.resource(text) {
                return done(ActionDirective::OpenResource { id }, Stage::Resource);
            }
        }

        if let Some(m) = self.registry.lookup(Category::Section, text) {
            if let Payload::Section(id) = m.payload {
                debug!("Section match: '{}' (specificity {})", m.phrase, m.specificity);
                return done(ActionDirective::NavigateSection { id }, Stage::Section);
            }
        }

        if self.registry.matches(PhraseSet::Help, text) {
            return done(ActionDirective::ShowHelp, Stage::Help);
        }

        done(ActionDirective::Unrecognized, Stage::Fallback)
    }

    fn feature(&self, text: &str, state: &ControlState) -> Option<ActionDirective> {
        let m = self.registry.lookup(Category::Feature, text)?;
        let Payload::Feature(key) = m.payload else {
            return None;
        };
        debug!("Feature match: {} via '{}' (specificity {})", key, m.phrase, m.specificity);
        // Direction words inside the feature's own name ("larger text") are not cues
        let rest = text.replacen(m.phrase, " ", 1);
        let resolution = resolver::resolve(self.registry, key.kind(), state.level(key), &rest);
        Some(ActionDirective::AdjustFeature { key, resolution })
    }

    /// Turning one theme off means switching to the other
    fn theme(&self, text: &str) -> Option<ThemeRequest> {
        if BLUE_LIGHT.is_match(text) {
            return None;
        }
        let dark = self.registry.matches(PhraseSet::ThemeDark, text);
        let light = self.registry.matches(PhraseSet::ThemeLight, text);
        let named = match (dark, light) {
            (true, true) => return Some(ThemeRequest::Ambiguous),
            (true, false) => Theme::Dark,
            (false, true) => Theme::Light,
            (false, false) => return None,
        };
        if self.registry.matches(PhraseSet::TurnOff, text) {
            debug!("Theme {} turned off, switching to the other", named);
            return Some(ThemeRequest::To(named.other()));
        }
        Some(ThemeRequest::To(named))
    }

    /// Certificates first, then projects
    fn resource(&self, text: &str) -> Option<ResourceId> {
        let m = self
            .registry
            .lookup(Category::Certificate, text)
            .or_else(|| self.registry.lookup(Category::Project, text))?;
        match m.payload {
            Payload::Resource(id) => {
                debug!("Resource match: {} via '{}'", id, m.phrase);
                Some(id)
            }
            _ => None,
        }
    }
}

fn done(directive: ActionDirective, stage: Stage) -> Classification {
    debug!("Classified at stage {}: {}", stage, directive);
    Classification { directive, stage }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::TransitionKind;
    use crate::feature::FeatureKey;
    use crate::locale::Locale;

    fn classify(text: &str) -> Classification {
        let registry = TriggerRegistry::builtin().unwrap();
        let state = ControlState::default();
        IntentClassifier::new(&registry).classify(&Utterance::new(text, Locale::En), &state)
    }

    #[test]
    fn test_handoff_without_navigation_verb() {
        let c = classify("tell me about his experience");
        assert_eq!(c.directive, ActionDirective::Handoff);
        assert_eq!(c.stage, Stage::Handoff);
    }

    #[test]
    fn test_navigation_verb_defeats_handoff() {
        let c = classify("show me about him");
        assert_eq!(
            c.directive,
            ActionDirective::NavigateSection {
                id: SectionId::About
            }
        );
    }

    #[test]
    fn test_accessibility_panel() {
        let c = classify("open accessibility");
        assert_eq!(
            c.directive,
            ActionDirective::OpenPanel {
                panel: Panel::Accessibility
            }
        );
        assert_eq!(classify("barrierefreiheit").stage, Stage::AccessibilityPanel);
    }

    #[test]
    fn test_reset_before_panel() {
        assert_eq!(
            classify("reset accessibility").directive,
            ActionDirective::ResetAccessibility
        );
    }

    #[test]
    fn test_blue_light_is_feature_not_theme() {
        let c = classify("increase blue light filter to level 3");
        match c.directive {
            ActionDirective::AdjustFeature { key, resolution } => {
                assert_eq!(key, FeatureKey::BlueLight);
                assert_eq!(resolution.transition, TransitionKind::SetTo(3));
            }
            other => panic!("Expected AdjustFeature, got {}", other),
        }
    }

    #[test]
    fn test_blue_light_spacing_variant_never_themes() {
        // double space escapes the feature phrase but still hits the exclusion
        let c = classify("blue  light please");
        assert_ne!(c.stage, Stage::Theme);
    }

    #[test]
    fn test_theme() {
        assert_eq!(
            classify("dark mode").directive,
            ActionDirective::SwitchTheme {
                request: ThemeRequest::To(Theme::Dark)
            }
        );
        assert_eq!(
            classify("switch to light theme").directive,
            ActionDirective::SwitchTheme {
                request: ThemeRequest::To(Theme::Light)
            }
        );
        assert_eq!(
            classify("dark or light?").directive,
            ActionDirective::SwitchTheme {
                request: ThemeRequest::Ambiguous
            }
        );
    }

    #[test]
    fn test_cv_variants() {
        assert_eq!(
            classify("open cv").directive,
            ActionDirective::OpenResource { id: ResourceId::Cv }
        );
        assert_eq!(
            classify("please send me your resume").directive,
            ActionDirective::RequestCv
        );
        assert_eq!(
            classify("cv").directive,
            ActionDirective::NavigateSection { id: SectionId::Main }
        );
    }

    #[test]
    fn test_resource_needs_navigation_verb() {
        assert_eq!(
            classify("open the efset certificate").directive,
            ActionDirective::OpenResource {
                id: ResourceId::EfsetEnglish
            }
        );
        // without a verb the section vocabulary takes over
        assert_eq!(
            classify("efset certificate").directive,
            ActionDirective::NavigateSection {
                id: SectionId::Certifications
            }
        );
    }

    #[test]
    fn test_certificates_before_projects() {
        assert_eq!(
            classify("show me the technical writing course").directive,
            ActionDirective::OpenResource {
                id: ResourceId::BoardInfinityTechWriting
            }
        );
        assert_eq!(
            classify("open the 2fa project").directive,
            ActionDirective::OpenResource {
                id: ResourceId::TwoFactorAuth
            }
        );
    }

    #[test]
    fn test_section_specificity() {
        assert_eq!(
            classify("take me to projects").directive,
            ActionDirective::NavigateSection {
                id: SectionId::Projects
            }
        );
        assert_eq!(
            classify("zeig mir die berufserfahrung").directive,
            ActionDirective::NavigateSection {
                id: SectionId::Experience
            }
        );
    }

    #[test]
    fn test_help_and_fallback() {
        assert_eq!(classify("help").directive, ActionDirective::ShowHelp);
        assert_eq!(classify("was kannst du").directive, ActionDirective::ShowHelp);
        assert_eq!(classify("xyzzy").directive, ActionDirective::Unrecognized);
        assert_eq!(classify("   ").directive, ActionDirective::Unrecognized);
    }

    #[test]
    fn test_feature_uses_state_snapshot() {
        let registry = TriggerRegistry::builtin().unwrap();
        let mut state = ControlState::default();
        state.accessibility.insert(FeatureKey::Dyslexia, 1);
        let c = IntentClassifier::new(&registry)
            .classify(&Utterance::new("increase dyslexia font", Locale::En), &state);
        match c.directive {
            ActionDirective::AdjustFeature { resolution, .. } => {
                assert_eq!(resolution.new_value, 2);
                assert_eq!(resolution.transition, TransitionKind::IncreasedTo(2));
            }
            other => panic!("Expected AdjustFeature, got {}", other),
        }
    }
}
