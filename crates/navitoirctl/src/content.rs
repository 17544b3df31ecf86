//! Content registry: page anchors and external URLs keyed by the ids the
//! engine emits.

use crate::config::NavitoirConfig;
use anyhow::{Context, Result};
use navitoir_shared::{ResourceId, SectionId};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRegistry {
    sections: BTreeMap<SectionId, String>,
    resources: BTreeMap<ResourceId, String>,
}

impl Default for ContentRegistry {
    fn default() -> Self {
        let sections = SectionId::ALL
            .iter()
            .map(|id| (*id, default_anchor(*id).to_string()))
            .collect();
        let resources = ResourceId::ALL
            .iter()
            .map(|id| (*id, default_url(*id).to_string()))
            .collect();
        Self {
            sections,
            resources,
        }
    }
}

fn default_anchor(id: SectionId) -> &'static str {
    match id {
        SectionId::Main => "#main-content",
        SectionId::About => "#about",
        SectionId::Projects => "#projects",
        SectionId::Skills => "#skills",
        SectionId::Experience => "#experience",
        SectionId::Certifications => "#certifications",
        SectionId::Contact => "#contact",
    }
}

fn default_url(id: ResourceId) -> &'static str {
    match id {
        ResourceId::Cv => "/cv.pdf",
        ResourceId::UiucDigitalLearning => {
            "https://www.coursera.org/account/accomplishments/verify/VA2HACXYEOYV"
        }
        ResourceId::BoardInfinityTechWriting => {
            "https://www.coursera.org/account/accomplishments/verify/CDOSFZ44QK27"
        }
        ResourceId::EfsetEnglish => "https://cert.efset.org/1uf78L",
        ResourceId::PlainLanguage => "https://plain-language-five.vercel.app",
        ResourceId::TwoFactorAuth => {
            "https://360.eu.articulate.com/review/content/8d8ac689-1670-458d-a7b3-0407850b55ef/review"
        }
        ResourceId::ElearningAccessibility => "https://example.com/e-learning-accessibility",
        ResourceId::LlmSustainability => {
            "https://www.notion.so/Instructional-Design-Portfolio-Opoku-Samuel-1d4f017e613b8029b616c5b6d1fd784d"
        }
        ResourceId::ClimateGuide => {
            "https://www.notion.so/Combating-Climate-Change-A-Collective-Responsibility-284f017e613b80acb039d4ca5425349f"
        }
        ResourceId::TechDocsGithub => "https://github.com/Samuelsen1/Sample-2",
        ResourceId::WelthHealth => "https://github.com/Samuelsen1/Tech-Writing-Samples",
    }
}

impl ContentRegistry {
    /// Defaults with the config's [sections] / [resources] overrides applied
    pub fn from_config(config: &NavitoirConfig) -> Result<Self> {
        let mut content = Self::default();
        for (key, anchor) in &config.sections {
            let id: SectionId = key
                .parse()
                .with_context(|| format!("Unknown section '{}' in [sections]", key))?;
            content.sections.insert(id, anchor.clone());
        }
        for (key, url) in &config.resources {
            let id: ResourceId = key
                .parse()
                .with_context(|| format!("Unknown resource '{}' in [resources]", key))?;
            content.resources.insert(id, url.clone());
        }
        Ok(content)
    }

    pub fn anchor(&self, id: SectionId) -> Option<&str> {
        self.sections.get(&id).map(String::as_str)
    }

    pub fn url(&self, id: ResourceId) -> Option<&str> {
        self.resources.get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_id() {
        let content = ContentRegistry::default();
        for id in SectionId::ALL {
            assert!(content.anchor(id).unwrap().starts_with('#'));
        }
        for id in ResourceId::ALL {
            assert!(content.url(id).is_some());
        }
    }

    #[test]
    fn test_config_overrides() {
        let mut config = NavitoirConfig::default();
        config
            .sections
            .insert("contact".to_string(), "#get-in-touch".to_string());
        config
            .resources
            .insert("cv".to_string(), "https://example.org/cv.pdf".to_string());
        let content = ContentRegistry::from_config(&config).unwrap();
        assert_eq!(content.anchor(SectionId::Contact), Some("#get-in-touch"));
        assert_eq!(content.url(ResourceId::Cv), Some("https://example.org/cv.pdf"));
        assert_eq!(content.anchor(SectionId::About), Some("#about"));
    }

    #[test]
    fn test_unknown_override_is_rejected() {
        let mut config = NavitoirConfig::default();
        config
            .resources
            .insert("blog".to_string(), "https://example.org".to_string());
        assert!(ContentRegistry::from_config(&config).is_err());
    }
}
