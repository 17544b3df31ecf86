//! Navitoir engine: classifier + executor + deferred-step scheduler.
//!
//! One utterance is fully classified and executed per `submit`. The host
//! drives time through `poll`, which releases due side effects in order.
//! While a navigate-then-open sequence still has pending steps, further
//! submissions are refused with `NavitoirError::Busy`.

use crate::classifier::{IntentClassifier, Stage};
use crate::directive::ActionDirective;
use crate::effects::{DeferredStep, EffectScheduler, EffectTiming, ScheduledStep};
use crate::error::NavitoirError;
use crate::executor::ActionExecutor;
use crate::locale::Locale;
use crate::registry::TriggerRegistry;
use crate::settings::PersistedSettings;
use crate::state::{ControlState, StateDelta};
use crate::utterance::Utterance;
use std::time::Instant;
use tracing::{info, warn};

/// What the host gets back for one utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub message: String,
    pub directive: ActionDirective,
    pub state_delta: StateDelta,
    /// Planned side effects, already queued on the scheduler
    pub effects: Vec<DeferredStep>,
    pub stage: Stage,
    pub directive_seq: u64,
}

#[derive(Debug)]
pub struct Navitoir {
    registry: TriggerRegistry,
    executor: ActionExecutor,
    scheduler: EffectScheduler,
    directive_seq: u64,
}

impl Navitoir {
    pub fn new(registry: TriggerRegistry, state: ControlState, timing: EffectTiming) -> Self {
        Self {
            registry,
            executor: ActionExecutor::new(state, timing),
            scheduler: EffectScheduler::new(),
            directive_seq: 0,
        }
    }

    /// Built-in trigger table, default state and timing
    pub fn with_defaults() -> Result<Self, NavitoirError> {
        Ok(Self::new(
            TriggerRegistry::builtin()?,
            ControlState::default(),
            EffectTiming::default(),
        ))
    }

    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }

    pub fn state(&self) -> &ControlState {
        self.executor.state()
    }

    /// A two-phase directive is still waiting to open its resource
    pub fn is_processing(&self) -> bool {
        self.scheduler.has_pending_open()
    }

    pub fn submit(
        &mut self,
        raw: &str,
        locale: Locale,
        now: Instant,
    ) -> Result<Response, NavitoirError> {
        if self.is_processing() {
            warn!("Rejected submission while processing: {:?}", raw);
            return Err(NavitoirError::Busy);
        }

        let utterance = Utterance::new(raw, locale);
        let classification =
            IntentClassifier::new(&self.registry).classify(&utterance, self.executor.state());
        let outcome = self.executor.execute(classification.directive, locale);

        self.directive_seq += 1;
        if !outcome.effects.is_empty() {
            self.scheduler.schedule(self.directive_seq, &outcome.effects, now);
        }

        info!(
            "#{} [{}] {} -> {}",
            self.directive_seq, locale, classification.stage, outcome.directive
        );

        Ok(Response {
            message: outcome.message,
            directive: outcome.directive,
            state_delta: outcome.state_delta,
            effects: outcome.effects,
            stage: classification.stage,
            directive_seq: self.directive_seq,
        })
    }

    /// Release every step due at `now`. State effects are applied before
    /// returning; the host carries out the rest.
    pub fn poll(&mut self, now: Instant) -> Vec<ScheduledStep> {
        let due = self.scheduler.poll(now);
        for step in &due {
            if step.effect.is_navigation() {
                continue;
            }
            if self.executor.apply_effect(step.effect).is_empty() {
                warn!(
                    "Deferred step {} of directive #{} had nothing left to do",
                    step.effect, step.directive_seq
                );
            }
        }
        due
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    pub fn pending_steps(&self) -> usize {
        self.scheduler.len()
    }

    pub fn hydrate(&mut self, settings: &PersistedSettings) {
        self.executor
            .hydrate(&settings.accessibility, settings.theme);
    }

    pub fn snapshot(&self) -> PersistedSettings {
        PersistedSettings::from_state(self.executor.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::SideEffect;
    use crate::feature::FeatureKey;
    use crate::state::Theme;
    use crate::target::{ResourceId, SectionId};
    use std::time::Duration;

    #[test]
    fn test_busy_while_open_is_pending() {
        let mut nav = Navitoir::with_defaults().unwrap();
        let t0 = Instant::now();
        nav.submit("open cv", Locale::En, t0).unwrap();
        assert!(nav.is_processing());

        let err = nav.submit("dark mode", Locale::En, t0).unwrap_err();
        assert!(matches!(err, NavitoirError::Busy));

        nav.poll(t0);
        assert!(nav.is_processing());
        let released = nav.poll(t0 + Duration::from_millis(800));
        assert_eq!(
            released[0].effect,
            SideEffect::OpenResource { id: ResourceId::Cv }
        );
        assert!(!nav.is_processing());
        assert!(nav.submit("dark mode", Locale::En, t0).is_ok());
    }

    #[test]
    fn test_section_scroll_does_not_block() {
        let mut nav = Navitoir::with_defaults().unwrap();
        let t0 = Instant::now();
        nav.submit("take me to projects", Locale::En, t0).unwrap();
        assert_eq!(nav.pending_steps(), 1);
        assert!(!nav.is_processing());

        let response = nav.submit("dark mode", Locale::En, t0).unwrap();
        assert_eq!(response.stage, Stage::Theme);
        assert_eq!(nav.state().theme, Theme::Dark);

        let released = nav.poll(t0);
        assert_eq!(
            released[0].effect,
            SideEffect::ScrollTo {
                section: SectionId::Projects
            }
        );
    }

    #[test]
    fn test_close_panel_does_not_block() {
        let mut nav = Navitoir::with_defaults().unwrap();
        let t0 = Instant::now();
        nav.submit("increase contrast", Locale::En, t0).unwrap();
        assert_eq!(nav.pending_steps(), 1);
        assert!(!nav.is_processing());
        assert!(nav.submit("more contrast", Locale::En, t0).is_ok());
    }

    #[test]
    fn test_hydrate_and_snapshot() {
        let mut nav = Navitoir::with_defaults().unwrap();
        let mut saved = nav.snapshot();
        saved.theme = Theme::Dark;
        saved.accessibility.insert(FeatureKey::RowHeight, 2);
        nav.hydrate(&saved);

        assert_eq!(nav.state().theme, Theme::Dark);
        let response = nav.submit("dark mode", Locale::En, Instant::now()).unwrap();
        assert!(response.state_delta.is_empty());
        assert_eq!(nav.snapshot().accessibility.get(&FeatureKey::RowHeight), Some(&2));
    }

    #[test]
    fn test_directive_seq_increments() {
        let mut nav = Navitoir::with_defaults().unwrap();
        let t0 = Instant::now();
        let a = nav.submit("help", Locale::En, t0).unwrap();
        let b = nav.submit("xyzzy", Locale::De, t0).unwrap();
        assert_eq!(a.directive_seq + 1, b.directive_seq);
        assert_eq!(b.stage, Stage::Fallback);
    }
}
