//! Deferred side effects and the scheduler that releases them in order.
//!
//! A directive yields an ordered list of steps, each with a delay relative
//! to the previous step. The scheduler turns them into absolute due times
//! and hands them back to the host in FIFO order. Within one directive due
//! times never decrease, so a resource is never opened before its section
//! has been scrolled to, even if other directives interleave.

use crate::state::Panel;
use crate::target::{ResourceId, SectionId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Host-visible side effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SideEffect {
    ScrollTo { section: SectionId },
    OpenResource { id: ResourceId },
    ClosePanel { panel: Panel },
}

impl SideEffect {
    /// Carried out by the host rather than the executor
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::ScrollTo { .. } | Self::OpenResource { .. })
    }

    /// Second phase of a navigate-then-open directive. Only this holds the
    /// processing flag; a plain scroll does not.
    pub fn holds_processing(&self) -> bool {
        matches!(self, Self::OpenResource { .. })
    }
}

impl std::fmt::Display for SideEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScrollTo { section } => write!(f, "scroll_to({})", section),
            Self::OpenResource { id } => write!(f, "open_resource({})", id),
            Self::ClosePanel { panel } => write!(f, "close_panel({:?})", panel),
        }
    }
}

/// One step of a directive's effect plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredStep {
    /// Delay after the previous step (or after submission for the first)
    pub delay_ms: u64,
    pub effect: SideEffect,
}

impl DeferredStep {
    pub fn now(effect: SideEffect) -> Self {
        Self {
            delay_ms: 0,
            effect,
        }
    }

    pub fn after(delay_ms: u64, effect: SideEffect) -> Self {
        Self { delay_ms, effect }
    }
}

/// Delays used when planning effects. Ordering hints only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTiming {
    /// Between scrolling to a section and opening the resource inside it
    #[serde(default = "default_scroll_to_open_ms")]
    pub scroll_to_open_ms: u64,
    /// Before the command panel closes after a settings change
    #[serde(default = "default_close_panel_ms")]
    pub close_panel_ms: u64,
}

fn default_scroll_to_open_ms() -> u64 {
    800
}

fn default_close_panel_ms() -> u64 {
    1500
}

impl Default for EffectTiming {
    fn default() -> Self {
        Self {
            scroll_to_open_ms: default_scroll_to_open_ms(),
            close_panel_ms: default_close_panel_ms(),
        }
    }
}

/// A step with an absolute due time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub seq: u64,
    pub directive_seq: u64,
    pub due: Instant,
    pub effect: SideEffect,
}

#[derive(Debug, Default)]
pub struct EffectScheduler {
    queue: VecDeque<ScheduledStep>,
    next_seq: u64,
}

impl EffectScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a directive's steps, delays accumulating from `now`
    pub fn schedule(&mut self, directive_seq: u64, steps: &[DeferredStep], now: Instant) {
        let mut due = now;
        for step in steps {
            due += Duration::from_millis(step.delay_ms);
            self.next_seq += 1;
            self.queue.push_back(ScheduledStep {
                seq: self.next_seq,
                directive_seq,
                due,
                effect: step.effect,
            });
        }
        debug!("Scheduled {} step(s) for directive #{}", steps.len(), directive_seq);
    }

    /// Remove and return every step due at `now`, in queue order
    pub fn poll(&mut self, now: Instant) -> Vec<ScheduledStep> {
        let (due, pending): (Vec<_>, Vec<_>) = self.queue.drain(..).partition(|s| s.due <= now);
        self.queue = pending.into();
        due
    }

    /// Earliest pending due time
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.iter().map(|s| s.due).min()
    }

    pub fn has_pending_open(&self) -> bool {
        self.queue.iter().any(|s| s.effect.holds_processing())
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
