//! Reference data store: projects, work experiences, and section content.
//!
//! Loaded once from a JSON document and read-only afterwards. The built-in
//! document is compiled into the WASM binary; the host page may swap in its
//! own through `load_portfolio`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::QuestSettings;
use crate::error::CatalogError;
use crate::quest::direction::Direction;
use crate::quest::section::SectionId;

/// The portfolio shipped with the crate.
pub const BUILTIN_PORTFOLIO: &str = include_str!("../data/portfolio.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub direction: Direction,
    pub path_label: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// A section value is either a single line or a categorized list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentValue {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub label: String,
    pub value: ContentValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: Vec<ContentEntry>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    settings: QuestSettings,
    projects: Vec<Project>,
    #[serde(default)]
    experiences: Vec<Experience>,
    sections: Vec<Section>,
}

/// Validated, read-only reference data.
#[derive(Debug, Clone)]
pub struct Catalog {
    settings: QuestSettings,
    projects: Vec<Project>,
    experiences: Vec<Experience>,
    /// Sorted by `SectionId::ORDER`, exactly one per id.
    sections: Vec<Section>,
}

impl Catalog {
    /// Parse the compiled-in portfolio.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PORTFOLIO)
    }

    /// Parse and validate a portfolio document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let catalog = Self::validate(raw)?;
        log::info!(
            "portfolio loaded: {} projects, {} experiences",
            catalog.projects.len(),
            catalog.experiences.len()
        );
        Ok(catalog)
    }

    fn validate(raw: RawCatalog) -> Result<Self, CatalogError> {
        if raw.projects.is_empty() {
            return Err(CatalogError::NoProjects);
        }

        let mut ids = HashSet::new();
        for (i, p) in raw.projects.iter().enumerate() {
            if !ids.insert(p.id.as_str()) {
                return Err(CatalogError::DuplicateProject(p.id.clone()));
            }
            if let Some(first) = raw.projects[..i].iter().find(|q| q.direction == p.direction) {
                return Err(CatalogError::DuplicateDirection {
                    direction: p.direction,
                    first: first.id.clone(),
                    second: p.id.clone(),
                });
            }
        }

        let mut exp_ids = HashSet::new();
        for e in &raw.experiences {
            if !exp_ids.insert(e.id.as_str()) {
                return Err(CatalogError::DuplicateExperience(e.id.clone()));
            }
        }

        let mut sections = raw.sections;
        sections.sort_by_key(|s| s.id);
        for pair in sections.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(CatalogError::DuplicateSection(pair[0].id));
            }
        }
        for id in SectionId::ORDER {
            if !sections.iter().any(|s| s.id == id) {
                return Err(CatalogError::MissingSection(id));
            }
        }

        Ok(Self {
            settings: raw.settings,
            projects: raw.projects,
            experiences: raw.experiences,
            sections,
        })
    }

    pub fn settings(&self) -> &QuestSettings {
        &self.settings
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_by_direction(&self, direction: Direction) -> Option<&Project> {
        self.projects.iter().find(|p| p.direction == direction)
    }

    pub fn experience(&self, id: &str) -> Option<&Experience> {
        self.experiences.iter().find(|e| e.id == id)
    }

    /// Validation guarantees one entry per id, in canonical order.
    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.index()]
    }
}
