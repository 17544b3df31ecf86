//! Trigger registry: literal phrases mapped to canonical payloads.
//!
//! Tables are data, not code. The built-in table is embedded at compile
//! time; hosts may layer an override table on top. Lookup is longest
//! contained phrase wins, ties go to the first-registered entry.

use crate::error::NavitoirError;
use crate::feature::FeatureKey;
use crate::locale::Locale;
use crate::target::{ResourceId, ResourceKind, SectionId};
use crate::utterance::matches_any;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Built-in trigger table
const BUILTIN_TABLE: &str = include_str!("../data/triggers.toml");

/// Payload categories with specificity lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Section,
    Feature,
    Certificate,
    Project,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Section => "section",
            Self::Feature => "feature",
            Self::Certificate => "certificate",
            Self::Project => "project",
        };
        write!(f, "{}", s)
    }
}

/// Coarse gating vocabularies (any-substring tests, no payload)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhraseSet {
    NavigationVerbs,
    ContentQuestions,
    AccessibilityPanel,
    ResetAccessibility,
    ThemeDark,
    ThemeLight,
    Cv,
    CvRequest,
    Help,
    Increase,
    Decrease,
    TurnOn,
    TurnOff,
}

impl PhraseSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NavigationVerbs => "navigation_verbs",
            Self::ContentQuestions => "content_questions",
            Self::AccessibilityPanel => "accessibility_panel",
            Self::ResetAccessibility => "reset_accessibility",
            Self::ThemeDark => "theme_dark",
            Self::ThemeLight => "theme_light",
            Self::Cv => "cv",
            Self::CvRequest => "cv_request",
            Self::Help => "help",
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
        }
    }

    const ALL: [PhraseSet; 13] = [
        PhraseSet::NavigationVerbs,
        PhraseSet::ContentQuestions,
        PhraseSet::AccessibilityPanel,
        PhraseSet::ResetAccessibility,
        PhraseSet::ThemeDark,
        PhraseSet::ThemeLight,
        PhraseSet::Cv,
        PhraseSet::CvRequest,
        PhraseSet::Help,
        PhraseSet::Increase,
        PhraseSet::Decrease,
        PhraseSet::TurnOn,
        PhraseSet::TurnOff,
    ];
}

impl FromStr for PhraseSet {
    type Err = NavitoirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhraseSet::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| NavitoirError::UnknownPayload {
                category: "phrase set".to_string(),
                payload: s.to_string(),
            })
    }
}

/// Canonical target a trigger phrase resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payload {
    Section(SectionId),
    Feature(FeatureKey),
    Resource(ResourceId),
}

impl Payload {
    fn parse(category: Category, raw: &str) -> Result<Self, NavitoirError> {
        let payload = match category {
            Category::Section => Payload::Section(raw.parse()?),
            Category::Feature => Payload::Feature(raw.parse()?),
            Category::Certificate | Category::Project => {
                let id: ResourceId = raw.parse()?;
                let expected = match category {
                    Category::Certificate => ResourceKind::Certificate,
                    _ => ResourceKind::Project,
                };
                if id.kind() != expected {
                    return Err(NavitoirError::UnknownPayload {
                        category: category.to_string(),
                        payload: raw.to_string(),
                    });
                }
                Payload::Resource(id)
            }
        };
        Ok(payload)
    }
}

/// One registered phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEntry {
    pub phrase: String,
    pub category: Category,
    pub payload: Payload,
    pub locale: Locale,
}

/// Result of a specificity lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerMatch<'a> {
    pub payload: Payload,
    pub phrase: &'a str,
    /// Phrase length in characters
    pub specificity: usize,
}

// On-disk shape. Keys are parsed by hand so bad names get a precise error.
#[derive(Debug, Deserialize)]
struct TriggerTable {
    #[serde(default)]
    phrase_sets: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    triggers: Vec<TriggerGroup>,
}

#[derive(Debug, Deserialize)]
struct TriggerGroup {
    category: Category,
    payload: String,
    #[serde(default)]
    phrases: BTreeMap<String, Vec<String>>,
}

/// Phrase tables for every category and gating set
#[derive(Debug, Clone, Default)]
pub struct TriggerRegistry {
    entries: BTreeMap<Category, Vec<TriggerEntry>>,
    phrase_sets: BTreeMap<PhraseSet, Vec<String>>,
}

impl TriggerRegistry {
    /// Registry built from the embedded table
    pub fn builtin() -> Result<Self, NavitoirError> {
        Self::from_toml_str(BUILTIN_TABLE)
    }

    pub fn from_path(path: &Path) -> Result<Self, NavitoirError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, NavitoirError> {
        let table: TriggerTable = toml::from_str(content)?;
        let mut registry = Self::default();

        for (set_name, by_locale) in table.phrase_sets {
            let set: PhraseSet = set_name.parse()?;
            for (_, phrases) in sorted_locales(by_locale)? {
                let list = registry.phrase_sets.entry(set).or_default();
                for phrase in phrases {
                    let phrase = phrase.to_lowercase();
                    if phrase.trim().is_empty() {
                        return Err(NavitoirError::EmptyPhrase {
                            category: "phrase set".to_string(),
                            payload: set_name.clone(),
                        });
                    }
                    list.push(phrase);
                }
            }
        }

        for group in table.triggers {
            let payload = Payload::parse(group.category, &group.payload)?;
            for (locale, phrases) in sorted_locales(group.phrases)? {
                for phrase in phrases {
                    let phrase = phrase.to_lowercase();
                    if phrase.trim().is_empty() {
                        return Err(NavitoirError::EmptyPhrase {
                            category: group.category.to_string(),
                            payload: group.payload.clone(),
                        });
                    }
                    registry.push(TriggerEntry {
                        phrase,
                        category: group.category,
                        payload,
                        locale,
                    });
                }
            }
        }

        debug!(
            "Trigger registry loaded: {} entries, {} phrase sets",
            registry.len(),
            registry.phrase_sets.len()
        );
        Ok(registry)
    }

    /// Register one entry after all existing ones of its category
    pub fn push(&mut self, entry: TriggerEntry) {
        self.entries.entry(entry.category).or_default().push(entry);
    }

    /// Append another table's phrases. Existing entries keep tie precedence.
    pub fn extend(&mut self, other: TriggerRegistry) {
        for (_, entries) in other.entries {
            for entry in entries {
                self.push(entry);
            }
        }
        for (set, phrases) in other.phrase_sets {
            self.phrase_sets.entry(set).or_default().extend(phrases);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self, category: Category) -> &[TriggerEntry] {
        self.entries.get(&category).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn phrases(&self, set: PhraseSet) -> &[String] {
        self.phrase_sets.get(&set).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Coarse gate: does any phrase of the set occur in the text?
    pub fn matches(&self, set: PhraseSet, normalized: &str) -> bool {
        matches_any(normalized, self.phrases(set))
    }

    /// Longest registered phrase of the category contained in the text.
    /// Strictly-greater comparison keeps the first-registered entry on ties.
    pub fn lookup(&self, category: Category, normalized: &str) -> Option<TriggerMatch<'_>> {
        let mut best: Option<TriggerMatch<'_>> = None;
        for entry in self.entries(category) {
            if !normalized.contains(entry.phrase.as_str()) {
                continue;
            }
            let specificity = entry.phrase.chars().count();
            if best.map_or(true, |b| specificity > b.specificity) {
                best = Some(TriggerMatch {
                    payload: entry.payload,
                    phrase: &entry.phrase,
                    specificity,
                });
            }
        }
        best
    }
}

/// Parse locale keys and order them by declaration order of `Locale`
fn sorted_locales(
    by_locale: BTreeMap<String, Vec<String>>,
) -> Result<Vec<(Locale, Vec<String>)>, NavitoirError> {
    let mut out = Vec::with_capacity(by_locale.len());
    for (key, phrases) in by_locale {
        out.push((key.parse::<Locale>()?, phrases));
    }
    out.sort_by_key(|(locale, _)| *locale);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TriggerRegistry {
        TriggerRegistry::builtin().unwrap()
    }

    #[test]
    fn test_builtin_loads() {
        let r = registry();
        assert!(!r.is_empty());
        assert!(!r.entries(Category::Feature).is_empty());
        assert!(!r.phrases(PhraseSet::NavigationVerbs).is_empty());
    }

    #[test]
    fn test_every_feature_and_section_registered() {
        let r = registry();
        for key in FeatureKey::ALL {
            assert!(
                r.entries(Category::Feature)
                    .iter()
                    .any(|e| e.payload == Payload::Feature(key)),
                "no trigger for {}",
                key
            );
        }
        for id in SectionId::ALL {
            assert!(r
                .entries(Category::Section)
                .iter()
                .any(|e| e.payload == Payload::Section(id)));
        }
    }

    #[test]
    fn test_longest_match_wins() {
        let r = registry();
        let m = r.lookup(Category::Feature, "turn on the blue light filter").unwrap();
        assert_eq!(m.payload, Payload::Feature(FeatureKey::BlueLight));
        assert_eq!(m.phrase, "blue light filter");
        assert_eq!(m.specificity, 17);
    }

    #[test]
    fn test_both_locales_same_payload() {
        let r = registry();
        let en = r.lookup(Category::Section, "projects").unwrap();
        let de = r.lookup(Category::Section, "projekte").unwrap();
        assert_eq!(en.payload, de.payload);
    }

    #[test]
    fn test_tie_goes_to_first_registered() {
        let table = r#"
            [[triggers]]
            category = "section"
            payload = "skills"
            phrases.en = ["tools"]

            [[triggers]]
            category = "section"
            payload = "projects"
            phrases.en = ["works"]
        "#;
        let r = TriggerRegistry::from_toml_str(table).unwrap();
        let m = r.lookup(Category::Section, "tools and works").unwrap();
        assert_eq!(m.payload, Payload::Section(SectionId::Skills));
    }

    #[test]
    fn test_no_match() {
        assert!(registry().lookup(Category::Feature, "what's the weather").is_none());
    }

    #[test]
    fn test_unknown_payload_rejected() {
        let table = r#"
            [[triggers]]
            category = "section"
            payload = "blog"
            phrases.en = ["blog"]
        "#;
        let err = TriggerRegistry::from_toml_str(table).unwrap_err();
        assert!(matches!(err, NavitoirError::UnknownPayload { .. }));
    }

    #[test]
    fn test_resource_category_must_match_kind() {
        let table = r#"
            [[triggers]]
            category = "certificate"
            payload = "welth-health"
            phrases.en = ["welth"]
        "#;
        assert!(TriggerRegistry::from_toml_str(table).is_err());
    }

    #[test]
    fn test_empty_phrase_rejected() {
        let table = r#"
            [phrase_sets.help]
            en = ["  "]
        "#;
        let err = TriggerRegistry::from_toml_str(table).unwrap_err();
        assert!(matches!(err, NavitoirError::EmptyPhrase { .. }));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let table = r#"
            [phrase_sets.help]
            fr = ["aide"]
        "#;
        let err = TriggerRegistry::from_toml_str(table).unwrap_err();
        assert!(matches!(err, NavitoirError::UnknownLocale(_)));
    }

    #[test]
    fn test_extend_appends_after_builtin() {
        let mut r = registry();
        let extra = TriggerRegistry::from_toml_str(
            r#"
            [[triggers]]
            category = "section"
            payload = "contact"
            phrases.de = ["melden"]
        "#,
        )
        .unwrap();
        let before = r.len();
        r.extend(extra);
        assert_eq!(r.len(), before + 1);
        let m = r.lookup(Category::Section, "bei ihm melden").unwrap();
        assert_eq!(m.payload, Payload::Section(SectionId::Contact));
    }

    #[test]
    fn test_phrases_lowercased() {
        let r = TriggerRegistry::from_toml_str(
            r#"
            [phrase_sets.help]
            en = ["HELP ME"]
        "#,
        )
        .unwrap();
        assert!(r.matches(PhraseSet::Help, "please help me"));
    }
}
