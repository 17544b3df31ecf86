//! Level/direction resolution for accessibility features.
//!
//! An explicit level ("level 3", "stufe 2", "auf 1", "to 4", "lvl 5") wins.
//! Otherwise the utterance is classified against the increase, decrease,
//! turn-on and turn-off vocabularies and stepped from the current value.

use crate::directive::{Resolution, TransitionKind};
use crate::feature::FeatureKind;
use crate::registry::{PhraseSet, TriggerRegistry};
use regex::Regex;
use std::sync::LazyLock;

static LEVEL_EXPR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:level|stufe|auf|to|lvl)\s*(\d+)").unwrap());

/// Which way the user wants the feature to go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TurnOff,
    /// Turn on from 0, otherwise step up (Binary/Graded) or stay put
    OnOrIncrease { increase: bool },
    Decrease,
}

/// Which direction vocabularies matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionCues {
    pub increase: bool,
    pub decrease: bool,
    pub turn_on: bool,
    pub turn_off: bool,
}

impl DirectionCues {
    pub fn detect(registry: &TriggerRegistry, normalized: &str) -> Self {
        Self {
            increase: registry.matches(PhraseSet::Increase, normalized),
            decrease: registry.matches(PhraseSet::Decrease, normalized),
            turn_on: registry.matches(PhraseSet::TurnOn, normalized),
            turn_off: registry.matches(PhraseSet::TurnOff, normalized),
        }
    }

    /// Precedence: explicit off, or an unqualified mention of an active
    /// feature, turns it off; then on/increase; then decrease. A bare
    /// mention of an inactive feature turns it on.
    pub fn direction(&self, current: u8) -> Direction {
        let positive = self.increase || self.turn_on;
        if self.turn_off || (current > 0 && !positive && !self.decrease) {
            Direction::TurnOff
        } else if positive {
            Direction::OnOrIncrease {
                increase: self.increase,
            }
        } else if self.decrease {
            Direction::Decrease
        } else {
            Direction::OnOrIncrease { increase: false }
        }
    }
}

/// Explicit numeric level in the utterance, if any. Overflowing numbers
/// saturate so they clamp to the top level.
pub fn extract_level(normalized: &str) -> Option<u32> {
    let caps = LEVEL_EXPR.captures(normalized)?;
    let digits = caps.get(1)?.as_str();
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

/// Resolve the new value for a feature currently at `current`
pub fn resolve(
    registry: &TriggerRegistry,
    kind: FeatureKind,
    current: u8,
    normalized: &str,
) -> Resolution {
    if let Some(level) = extract_level(normalized) {
        let target = kind.clamp(level);
        return finish(current, target, TransitionKind::SetTo(target));
    }

    let cues = DirectionCues::detect(registry, normalized);
    step(kind, current, cues.direction(current))
}

/// Apply a direction to the current value
pub fn step(kind: FeatureKind, current: u8, direction: Direction) -> Resolution {
    let max = kind.max_level();
    let current = current.min(max);

    match direction {
        Direction::TurnOff => finish(current, 0, TransitionKind::TurnedOff),
        Direction::OnOrIncrease { increase } => {
            if current == 0 {
                finish(current, 1, TransitionKind::TurnedOn)
            } else if increase && kind != FeatureKind::Binary {
                let target = (current + 1).min(max);
                finish(current, target, TransitionKind::IncreasedTo(target))
            } else {
                finish(current, current, TransitionKind::NoOp)
            }
        }
        Direction::Decrease => {
            let target = current.saturating_sub(1);
            if target == 0 || kind == FeatureKind::Binary {
                finish(current, 0, TransitionKind::TurnedOff)
            } else {
                finish(current, target, TransitionKind::DecreasedTo(target))
            }
        }
    }
}

fn finish(current: u8, target: u8, transition: TransitionKind) -> Resolution {
    if target == current {
        Resolution {
            new_value: current,
            transition: TransitionKind::NoOp,
        }
    } else {
        Resolution {
            new_value: target,
            transition,
        }
    }
}
