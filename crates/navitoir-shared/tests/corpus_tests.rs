//! Corpus-driven classifier tests.
//!
//! Validates the intent classifier against golden expectations in
//! utterance_corpus.tsv.

use navitoir_shared::{ControlState, IntentClassifier, Locale, TriggerRegistry, Utterance};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

/// Parsed corpus entry
#[derive(Debug)]
struct CorpusEntry {
    utterance: String,
    expected_tag: String,
    expected_payload: Option<String>,
    line_num: usize,
}

fn parse_corpus() -> Vec<CorpusEntry> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = PathBuf::from(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("utterance_corpus.tsv");

    let content = fs::read_to_string(&path).expect("Failed to read utterance_corpus.tsv");

    let mut entries = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        let line_num = line_idx + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with("utterance\t") {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() != 3 {
            panic!("Line {}: expected 3 columns, got {}", line_num, parts.len());
        }

        entries.push(CorpusEntry {
            utterance: parts[0].to_string(),
            expected_tag: parts[1].to_string(),
            expected_payload: (parts[2] != "-").then(|| parts[2].to_string()),
            line_num,
        });
    }

    entries
}

#[test]
fn test_corpus_minimum_size() {
    let entries = parse_corpus();
    assert!(
        entries.len() >= 40,
        "Corpus must have >= 40 entries, got {}",
        entries.len()
    );
}

#[test]
fn test_corpus_matches_classifier() {
    let registry = TriggerRegistry::builtin().unwrap();
    let classifier = IntentClassifier::new(&registry);
    let state = ControlState::default();

    let mut failures = Vec::new();
    for entry in parse_corpus() {
        // Locale only affects messages; classify under both
        for locale in Locale::ALL {
            let c = classifier.classify(&Utterance::new(entry.utterance.as_str(), locale), &state);
            let tag = c.directive.tag();
            let payload = c.directive.payload();
            if tag != entry.expected_tag || payload != entry.expected_payload {
                failures.push(format!(
                    "line {} [{}] '{}': expected {} {:?}, got {} {:?} (stage {})",
                    entry.line_num,
                    locale,
                    entry.utterance,
                    entry.expected_tag,
                    entry.expected_payload,
                    tag,
                    payload,
                    c.stage
                ));
            }
        }
    }

    assert!(failures.is_empty(), "Corpus mismatches:\n{}", failures.join("\n"));
}

#[test]
fn test_corpus_covers_every_directive_kind() {
    let tags: BTreeSet<String> = parse_corpus().into_iter().map(|e| e.expected_tag).collect();
    for expected in [
        "handoff",
        "open_panel",
        "reset_accessibility",
        "adjust_feature",
        "switch_theme",
        "open_resource",
        "request_cv",
        "navigate_section",
        "show_help",
        "unrecognized",
    ] {
        assert!(tags.contains(expected), "Corpus has no '{}' entry", expected);
    }
}

#[test]
fn test_corpus_has_both_languages() {
    let entries = parse_corpus();
    let german = entries
        .iter()
        .filter(|e| e.utterance.chars().any(|c| "äöüß".contains(c)) || e.utterance.starts_with("zeig"))
        .count();
    assert!(german >= 5, "Expected at least 5 German utterances, got {}", german);
}
