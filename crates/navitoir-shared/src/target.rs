//! Canonical navigation targets: page sections and external resources.
//!
//! Only identifiers live here. Anchors and URLs belong to the host's
//! content registry, keyed by the same ids.

use crate::error::NavitoirError;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Main,
    About,
    Projects,
    Skills,
    Experience,
    Certifications,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Main,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match self {
            Self::Main => locale.pick("Home", "Startseite"),
            Self::About => locale.pick("About", "Über mich"),
            Self::Projects => locale.pick("Projects", "Projekte"),
            Self::Skills => locale.pick("Skills", "Fähigkeiten"),
            Self::Experience => locale.pick("Experience", "Erfahrung"),
            Self::Certifications => locale.pick("Certifications", "Zertifikate"),
            Self::Contact => locale.pick("Contact", "Kontakt"),
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = NavitoirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| NavitoirError::UnknownPayload {
                category: "section".to_string(),
                payload: s.to_string(),
            })
    }
}

/// What kind of thing a resource is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Cv,
    Certificate,
    Project,
}

/// External resources the site can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceId {
    Cv,
    UiucDigitalLearning,
    BoardInfinityTechWriting,
    EfsetEnglish,
    PlainLanguage,
    TwoFactorAuth,
    ElearningAccessibility,
    LlmSustainability,
    ClimateGuide,
    TechDocsGithub,
    WelthHealth,
}

impl ResourceId {
    pub const ALL: [ResourceId; 11] = [
        ResourceId::Cv,
        ResourceId::UiucDigitalLearning,
        ResourceId::BoardInfinityTechWriting,
        ResourceId::EfsetEnglish,
        ResourceId::PlainLanguage,
        ResourceId::TwoFactorAuth,
        ResourceId::ElearningAccessibility,
        ResourceId::LlmSustainability,
        ResourceId::ClimateGuide,
        ResourceId::TechDocsGithub,
        ResourceId::WelthHealth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cv => "cv",
            Self::UiucDigitalLearning => "uiuc-digital-learning",
            Self::BoardInfinityTechWriting => "board-infinity-tech-writing",
            Self::EfsetEnglish => "efset-english",
            Self::PlainLanguage => "plain-language",
            Self::TwoFactorAuth => "two-factor-auth",
            Self::ElearningAccessibility => "elearning-accessibility",
            Self::LlmSustainability => "llm-sustainability",
            Self::ClimateGuide => "climate-guide",
            Self::TechDocsGithub => "tech-docs-github",
            Self::WelthHealth => "welth-health",
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Cv => ResourceKind::Cv,
            Self::UiucDigitalLearning | Self::BoardInfinityTechWriting | Self::EfsetEnglish => {
                ResourceKind::Certificate
            }
            _ => ResourceKind::Project,
        }
    }

    /// Section the resource is shown in; scrolled to before opening it
    pub fn home_section(&self) -> SectionId {
        match self.kind() {
            ResourceKind::Cv => SectionId::Main,
            ResourceKind::Certificate => SectionId::Certifications,
            ResourceKind::Project => SectionId::Projects,
        }
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match self {
            Self::Cv => locale.pick("CV", "Lebenslauf"),
            Self::UiucDigitalLearning => locale.pick(
                "Digital Learning Design Foundations & Applications",
                "Grundlagen & Anwendungen des Digitalen Lerndesigns",
            ),
            Self::BoardInfinityTechWriting => {
                locale.pick("Technical Writing Course", "Kurs Technisches Schreiben")
            }
            Self::EfsetEnglish => {
                locale.pick("EF SET English Certificate", "EF SET Englisch Zertifikat")
            }
            Self::PlainLanguage => locale.pick(
                "Plain Language and Inclusivity",
                "Einfache Sprache und Inklusivität",
            ),
            Self::TwoFactorAuth => locale.pick(
                "Two-Factor Authentication (2FA) Module",
                "Zwei-Faktor-Authentifizierung (2FA) Modul",
            ),
            Self::ElearningAccessibility => locale.pick(
                "E-Learning Accessibility Best Practices",
                "Best Practices für Barrierefreiheit im E-Learning",
            ),
            Self::LlmSustainability => locale.pick(
                "LLMs, Sustainability and Climate Change",
                "LLMs, Nachhaltigkeit und Klimawandel",
            ),
            Self::ClimateGuide => locale.pick(
                "Climate Change Mitigation Guide",
                "Leitfaden zur Klimaschutzminderung",
            ),
            Self::TechDocsGithub => locale.pick(
                "Technical Documentation (GitHub)",
                "Technische Dokumentation (GitHub)",
            ),
            Self::WelthHealth => locale.pick("Welth Health Platform", "Welth Health Plattform"),
        }
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceId {
    type Err = NavitoirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| NavitoirError::UnknownPayload {
                category: "resource".to_string(),
                payload: s.to_string(),
            })
    }
}
