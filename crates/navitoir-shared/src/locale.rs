//! Supported interface languages.

use crate::error::NavitoirError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Active UI language. Declaration order is the order phrase sets are
/// registered in, which matters for first-registered-wins tie breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Pick the string for this locale
    pub fn pick<'a>(&self, en: &'a str, de: &'a str) -> &'a str {
        match self {
            Self::En => en,
            Self::De => de,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = NavitoirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" | "englisch" => Ok(Self::En),
            "de" | "german" | "deutsch" => Ok(Self::De),
            other => Err(NavitoirError::UnknownLocale(other.to_string())),
        }
    }
}
