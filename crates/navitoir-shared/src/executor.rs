//! Action executor: the only writer of `ControlState`.
//!
//! Applies a directive, reports what changed, plans deferred side effects
//! and composes the localized confirmation.

use crate::directive::{ActionDirective, Resolution, ThemeRequest, TransitionKind};
use crate::effects::{DeferredStep, EffectTiming, SideEffect};
use crate::feature::FeatureKey;
use crate::locale::Locale;
use crate::messages::{self, MessageId};
use crate::state::{ControlState, Panel, PanelsOpen, StateDelta, Theme};
use crate::target::{ResourceId, SectionId};
use std::collections::BTreeMap;
use tracing::info;

/// Result of executing one directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    /// The directive as applied (feature no-ops are re-checked at write time)
    pub directive: ActionDirective,
    pub state_delta: StateDelta,
    pub effects: Vec<DeferredStep>,
}

#[derive(Debug, Clone)]
pub struct ActionExecutor {
    state: ControlState,
    timing: EffectTiming,
}

impl ActionExecutor {
    pub fn new(state: ControlState, timing: EffectTiming) -> Self {
        Self { state, timing }
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Load persisted accessibility levels and theme (clamped to valid ranges)
    pub fn hydrate(&mut self, accessibility: &BTreeMap<FeatureKey, u8>, theme: Theme) {
        for (key, level) in accessibility {
            self.state
                .accessibility
                .insert(*key, key.kind().clamp(*level as u32));
        }
        self.state.theme = theme;
        info!("Hydrated control state: theme={}, {} feature(s)", theme, accessibility.len());
    }

    pub fn execute(&mut self, directive: ActionDirective, locale: Locale) -> Outcome {
        match directive {
            ActionDirective::Handoff => {
                let delta = self.switch_panel(Panel::KnowledgeAssistant);
                outcome(
                    messages::template(MessageId::Handoff, locale).to_string(),
                    directive,
                    delta,
                    vec![],
                )
            }
            ActionDirective::OpenPanel { panel } => {
                let delta = self.switch_panel(panel);
                outcome(
                    messages::template(MessageId::OpenAccessibilityPanel, locale).to_string(),
                    directive,
                    delta,
                    vec![],
                )
            }
            ActionDirective::ResetAccessibility => self.reset(locale),
            ActionDirective::AdjustFeature { key, resolution } => {
                self.adjust(key, resolution, locale)
            }
            ActionDirective::SwitchTheme { request } => self.switch_theme(request, locale),
            ActionDirective::OpenResource { id } => self.open_resource(id, locale),
            ActionDirective::RequestCv => {
                let section = ResourceId::Cv.home_section();
                outcome(
                    messages::render(
                        MessageId::RequestCv,
                        locale,
                        &[("section", section.display_name(locale))],
                    ),
                    directive,
                    StateDelta::default(),
                    vec![DeferredStep::now(SideEffect::ScrollTo { section })],
                )
            }
            ActionDirective::NavigateSection { id } => self.navigate(id, locale),
            ActionDirective::ShowHelp => outcome(
                messages::menu_message(MessageId::HelpHeader, locale),
                directive,
                StateDelta::default(),
                vec![],
            ),
            ActionDirective::Unrecognized => outcome(
                messages::menu_message(MessageId::UnrecognizedHeader, locale),
                directive,
                StateDelta::default(),
                vec![],
            ),
        }
    }

    /// Apply a released deferred step. Safe to call late or repeatedly.
    pub fn apply_effect(&mut self, effect: SideEffect) -> StateDelta {
        match effect {
            SideEffect::ClosePanel { panel } => {
                let before = self.state.panels;
                self.state.panels.set(panel, false);
                panels_delta(before, self.state.panels)
            }
            // Host-only effects
            SideEffect::ScrollTo { .. } | SideEffect::OpenResource { .. } => StateDelta::default(),
        }
    }

    fn adjust(&mut self, key: FeatureKey, resolution: Resolution, locale: Locale) -> Outcome {
        let previous = self.state.level(key);
        let target = key.kind().clamp(resolution.new_value as u32);

        // Re-check against live state: the resolution came from a snapshot
        let applied = if resolution.is_noop() || target == previous {
            Resolution {
                new_value: previous,
                transition: TransitionKind::NoOp,
            }
        } else {
            Resolution {
                new_value: target,
                transition: resolution.transition,
            }
        };

        let message = messages::feature_message(key, previous, &applied, locale);
        let directive = ActionDirective::AdjustFeature {
            key,
            resolution: applied,
        };
        if applied.is_noop() {
            return outcome(message, directive, StateDelta::default(), vec![]);
        }

        self.state.accessibility.insert(key, applied.new_value);
        info!("Feature {} changed {} -> {}", key, previous, applied.new_value);

        let mut delta = StateDelta::default();
        delta.accessibility.insert(key, applied.new_value);
        let effects = vec![DeferredStep::after(
            self.timing.close_panel_ms,
            SideEffect::ClosePanel {
                panel: Panel::Navitoir,
            },
        )];
        outcome(message, directive, delta, effects)
    }

    fn reset(&mut self, locale: Locale) -> Outcome {
        let mut delta = StateDelta::default();
        for (key, level) in self.state.accessibility.iter_mut() {
            if *level != 0 {
                *level = 0;
                delta.accessibility.insert(*key, 0);
            }
        }
        if delta.is_empty() {
            return outcome(
                messages::template(MessageId::ResetAlready, locale).to_string(),
                ActionDirective::ResetAccessibility,
                delta,
                vec![],
            );
        }
        info!("Reset {} accessibility setting(s)", delta.accessibility.len());
        outcome(
            messages::template(MessageId::ResetDone, locale).to_string(),
            ActionDirective::ResetAccessibility,
            delta,
            vec![],
        )
    }

    fn switch_theme(&mut self, request: ThemeRequest, locale: Locale) -> Outcome {
        let directive = ActionDirective::SwitchTheme { request };
        let target = match request {
            ThemeRequest::To(theme) => theme,
            ThemeRequest::Ambiguous => {
                let message = messages::render(
                    MessageId::ThemeAmbiguous,
                    locale,
                    &[
                        ("dark", messages::theme_name(Theme::Dark, locale)),
                        ("light", messages::theme_name(Theme::Light, locale)),
                    ],
                );
                return outcome(message, directive, StateDelta::default(), vec![]);
            }
        };

        let name = messages::theme_name(target, locale);
        if self.state.theme == target {
            let message = messages::render(MessageId::ThemeAlready, locale, &[("theme", name)]);
            return outcome(message, directive, StateDelta::default(), vec![]);
        }

        self.state.theme = target;
        info!("Theme switched to {}", target);
        let delta = StateDelta {
            theme: Some(target),
            ..Default::default()
        };
        let message = messages::render(MessageId::ThemeSwitched, locale, &[("theme", name)]);
        outcome(message, directive, delta, vec![])
    }

    fn open_resource(&mut self, id: ResourceId, locale: Locale) -> Outcome {
        // Scroll first so the user sees the context, then open
        let effects = vec![
            DeferredStep::now(SideEffect::ScrollTo {
                section: id.home_section(),
            }),
            DeferredStep::after(self.timing.scroll_to_open_ms, SideEffect::OpenResource { id }),
        ];
        info!("Opening resource {} via section {}", id, id.home_section());
        outcome(
            messages::open_resource_message(id, locale),
            ActionDirective::OpenResource { id },
            StateDelta::default(),
            effects,
        )
    }

    fn navigate(&mut self, id: SectionId, locale: Locale) -> Outcome {
        info!("Navigating to section {}", id);
        outcome(
            messages::navigate_message(id, locale),
            ActionDirective::NavigateSection { id },
            StateDelta::default(),
            vec![DeferredStep::now(SideEffect::ScrollTo { section: id })],
        )
    }

    /// Open `panel` and close the command panel
    fn switch_panel(&mut self, panel: Panel) -> StateDelta {
        let before = self.state.panels;
        self.state.panels.set(Panel::Navitoir, false);
        self.state.panels.set(panel, true);
        panels_delta(before, self.state.panels)
    }
}

fn panels_delta(before: PanelsOpen, after: PanelsOpen) -> StateDelta {
    StateDelta {
        panels: (before != after).then_some(after),
        ..Default::default()
    }
}

fn outcome(
    message: String,
    directive: ActionDirective,
    state_delta: StateDelta,
    effects: Vec<DeferredStep>,
) -> Outcome {
    Outcome {
        message,
        directive,
        state_delta,
        effects,
    }
}
