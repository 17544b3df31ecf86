//! Accessibility feature descriptors.
//!
//! The registry is static: eleven features, each with a level kind and
//! localized display names.

use crate::error::NavitoirError;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical accessibility setting keys (same keys the settings store uses)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKey {
    Contrast,
    Mark,
    LargeText,
    TextSpacing,
    StopAnimations,
    HideImages,
    Dyslexia,
    RowHeight,
    FocusIndicator,
    Saturation,
    BlueLight,
}

/// How many levels a feature has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// 0 = off, 1 = on
    Binary,
    /// 0 = off, 1 = light, 2 = full
    Graded3,
    /// 0 = off, 1..=5 filter strength (blue light filter only)
    Graded6,
}

impl FeatureKind {
    pub fn max_level(&self) -> u8 {
        match self {
            Self::Binary => 1,
            Self::Graded3 => 2,
            Self::Graded6 => 5,
        }
    }

    pub fn clamp(&self, level: u32) -> u8 {
        level.min(self.max_level() as u32) as u8
    }
}

/// Static description of one feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub key: FeatureKey,
    pub kind: FeatureKind,
    name_en: &'static str,
    name_de: &'static str,
}

impl FeatureDescriptor {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name_en,
            Locale::De => self.name_de,
        }
    }
}

const FEATURES: &[FeatureDescriptor] = &[
    FeatureDescriptor {
        key: FeatureKey::Contrast,
        kind: FeatureKind::Graded3,
        name_en: "Contrast",
        name_de: "Kontrast",
    },
    FeatureDescriptor {
        key: FeatureKey::Mark,
        kind: FeatureKind::Binary,
        name_en: "Mark Links",
        name_de: "Links markieren",
    },
    FeatureDescriptor {
        key: FeatureKey::LargeText,
        kind: FeatureKind::Graded3,
        name_en: "Larger Text",
        name_de: "Größere Schrift",
    },
    FeatureDescriptor {
        key: FeatureKey::TextSpacing,
        kind: FeatureKind::Graded3,
        name_en: "Text Spacing",
        name_de: "Textabstand",
    },
    FeatureDescriptor {
        key: FeatureKey::StopAnimations,
        kind: FeatureKind::Binary,
        name_en: "Stop Animations",
        name_de: "Animationen stoppen",
    },
    FeatureDescriptor {
        key: FeatureKey::HideImages,
        kind: FeatureKind::Binary,
        name_en: "Hide Images",
        name_de: "Bilder verbergen",
    },
    FeatureDescriptor {
        key: FeatureKey::Dyslexia,
        kind: FeatureKind::Graded3,
        name_en: "Dyslexia Font",
        name_de: "Dyslexie-Schrift",
    },
    FeatureDescriptor {
        key: FeatureKey::RowHeight,
        kind: FeatureKind::Graded3,
        name_en: "Row Height",
        name_de: "Zeilenhöhe",
    },
    FeatureDescriptor {
        key: FeatureKey::FocusIndicator,
        kind: FeatureKind::Graded3,
        name_en: "Focus Indicator",
        name_de: "Fokus-Anzeige",
    },
    FeatureDescriptor {
        key: FeatureKey::Saturation,
        kind: FeatureKind::Graded3,
        name_en: "Saturation",
        name_de: "Sättigung",
    },
    FeatureDescriptor {
        key: FeatureKey::BlueLight,
        kind: FeatureKind::Graded6,
        name_en: "Blue Light Filter",
        name_de: "Blaulichtfilter",
    },
];

impl FeatureKey {
    pub const ALL: [FeatureKey; 11] = [
        FeatureKey::Contrast,
        FeatureKey::Mark,
        FeatureKey::LargeText,
        FeatureKey::TextSpacing,
        FeatureKey::StopAnimations,
        FeatureKey::HideImages,
        FeatureKey::Dyslexia,
        FeatureKey::RowHeight,
        FeatureKey::FocusIndicator,
        FeatureKey::Saturation,
        FeatureKey::BlueLight,
    ];

    pub fn descriptor(&self) -> &'static FeatureDescriptor {
        // FEATURES is declared in the same order as the enum
        &FEATURES[*self as usize]
    }

    pub fn kind(&self) -> FeatureKind {
        self.descriptor().kind
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        self.descriptor().display_name(locale)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contrast => "contrast",
            Self::Mark => "mark",
            Self::LargeText => "largeText",
            Self::TextSpacing => "textSpacing",
            Self::StopAnimations => "stopAnimations",
            Self::HideImages => "hideImages",
            Self::Dyslexia => "dyslexia",
            Self::RowHeight => "rowHeight",
            Self::FocusIndicator => "focusIndicator",
            Self::Saturation => "saturation",
            Self::BlueLight => "blueLight",
        }
    }
}

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeatureKey {
    type Err = NavitoirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| NavitoirError::UnknownPayload {
                category: "feature".to_string(),
                payload: s.to_string(),
            })
    }
}
