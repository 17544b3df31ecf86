//! Utterance normalization and coarse phrase gating.
//!
//! Normalization is deliberately shallow: lower-case and trim, nothing else.
//! Trigger phrases are literals, so matching is plain substring containment.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// One free-text input with its locale tag. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    raw: String,
    normalized: String,
    locale: Locale,
}

impl Utterance {
    pub fn new(raw: impl Into<String>, locale: Locale) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self {
            raw,
            normalized,
            locale,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Lower-case and trim. No stemming, no tokenization.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True if any phrase is a substring of the normalized text
pub fn matches_any<S: AsRef<str>>(normalized: &str, phrases: &[S]) -> bool {
    phrases
        .iter()
        .any(|p| !p.as_ref().is_empty() && normalized.contains(p.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Take Me To PROJECTS  "), "take me to projects");
        assert_eq!(normalize("ZEIG MIR ÜBER MICH"), "zeig mir über mich");
    }

    #[test]
    fn test_utterance_keeps_raw() {
        let u = Utterance::new(" Dark Mode ", Locale::En);
        assert_eq!(u.raw(), " Dark Mode ");
        assert_eq!(u.normalized(), "dark mode");
        assert_eq!(u.locale(), Locale::En);
    }

    #[test]
    fn test_matches_any() {
        assert!(matches_any("please go to projects", &["go to", "open"]));
        assert!(!matches_any("tell me about him", &["go to", "open"]));
        assert!(!matches_any("anything", &[""]));
    }

    #[test]
    fn test_empty_utterance() {
        assert!(Utterance::new("   ", Locale::De).is_empty());
    }
}
