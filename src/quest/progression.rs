//! Session-scoped progression record and the command log.
//!
//! Mutators are `pub(super)`: only the interpreter and the exit handlers in
//! this module tree may change progression. Everything else reads.

use std::collections::BTreeSet;

use serde::Serialize;

use super::section::SectionId;
use crate::catalog::{Catalog, Experience, Project};

/// Append-only display log of echoed input and system output.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CommandLog {
    lines: Vec<String>,
}

impl CommandLog {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Which projects, experiences, and sections the visitor has reached.
///
/// Invariants: completed projects are a subset of unlocked projects, and
/// `unlocked_section_ids` is always a prefix of [`SectionId::ORDER`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    unlocked_project_ids: BTreeSet<String>,
    completed_project_ids: BTreeSet<String>,
    viewed_experience_ids: BTreeSet<String>,
    unlocked_section_ids: Vec<SectionId>,
    command_log: CommandLog,
}

impl Progression {
    /// Fresh progression with the welcome banner already in the log.
    pub fn with_banner(banner: &[String]) -> Self {
        let mut progression = Self::default();
        for line in banner {
            progression.command_log.push(line.clone());
        }
        progression
    }

    pub fn is_unlocked(&self, project_id: &str) -> bool {
        self.unlocked_project_ids.contains(project_id)
    }

    pub fn is_completed(&self, project_id: &str) -> bool {
        self.completed_project_ids.contains(project_id)
    }

    pub fn is_viewed(&self, experience_id: &str) -> bool {
        self.viewed_experience_ids.contains(experience_id)
    }

    pub fn is_section_unlocked(&self, section: SectionId) -> bool {
        self.unlocked_section_ids.contains(&section)
    }

    pub fn unlocked_projects(&self) -> &BTreeSet<String> {
        &self.unlocked_project_ids
    }

    pub fn completed_projects(&self) -> &BTreeSet<String> {
        &self.completed_project_ids
    }

    pub fn viewed_experiences(&self) -> &BTreeSet<String> {
        &self.viewed_experience_ids
    }

    pub fn unlocked_sections(&self) -> &[SectionId] {
        &self.unlocked_section_ids
    }

    pub fn log(&self) -> &CommandLog {
        &self.command_log
    }

    /// Catalog projects not yet completed, in catalog order.
    pub fn missing_projects<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Project> {
        catalog
            .projects()
            .iter()
            .filter(|p| !self.is_completed(&p.id))
            .collect()
    }

    /// Catalog experiences not yet viewed, in catalog order.
    pub fn unviewed_experiences<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Experience> {
        catalog
            .experiences()
            .iter()
            .filter(|e| !self.is_viewed(&e.id))
            .collect()
    }

    /// Tier 1 done: every catalog project completed.
    pub fn all_projects_completed(&self, catalog: &Catalog) -> bool {
        catalog.projects().iter().all(|p| self.is_completed(&p.id))
    }

    pub fn all_experiences_viewed(&self, catalog: &Catalog) -> bool {
        catalog.experiences().iter().all(|e| self.is_viewed(&e.id))
    }

    pub fn all_sections_unlocked(&self) -> bool {
        self.unlocked_section_ids.len() == SectionId::ORDER.len()
    }

    pub(super) fn log_mut(&mut self) -> &mut CommandLog {
        &mut self.command_log
    }

    /// Returns `true` only when the project was newly unlocked.
    pub(super) fn unlock_project(&mut self, project_id: &str) -> bool {
        self.unlocked_project_ids.insert(project_id.to_string())
    }

    /// Refuses projects that were never unlocked. Returns `true` when newly completed.
    pub(super) fn complete_project(&mut self, project_id: &str) -> bool {
        if !self.is_unlocked(project_id) {
            return false;
        }
        self.completed_project_ids.insert(project_id.to_string())
    }

    pub(super) fn mark_viewed(&mut self, experience_id: &str) -> bool {
        self.viewed_experience_ids.insert(experience_id.to_string())
    }

    /// Unlocks only the next section in canonical order; anything else is refused.
    pub(super) fn unlock_section(&mut self, section: SectionId) -> bool {
        if section.index() != self.unlocked_section_ids.len() {
            return false;
        }
        self.unlocked_section_ids.push(section);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_seeds_log() {
        let p = Progression::with_banner(&["hello".to_string(), "there".to_string()]);
        assert_eq!(p.log().lines(), &["hello", "there"]);
    }

    #[test]
    fn complete_requires_unlock() {
        let mut p = Progression::default();
        assert!(!p.complete_project("palate"));
        assert!(p.completed_projects().is_empty());

        assert!(p.unlock_project("palate"));
        assert!(!p.unlock_project("palate"));
        assert!(p.complete_project("palate"));
        assert!(!p.complete_project("palate"));
        assert!(p.is_completed("palate"));
    }

    #[test]
    fn sections_only_unlock_as_prefix() {
        let mut p = Progression::default();
        assert!(!p.unlock_section(SectionId::Research));
        assert!(p.unlock_section(SectionId::Skills));
        assert!(!p.unlock_section(SectionId::Skills));
        assert!(!p.unlock_section(SectionId::Contact));
        assert!(p.unlock_section(SectionId::Research));
        assert_eq!(p.unlocked_sections(), &[SectionId::Skills, SectionId::Research]);
        assert!(!p.all_sections_unlocked());
    }

    #[test]
    fn snapshot_uses_camel_case() {
        let mut p = Progression::default();
        p.unlock_project("brickd");
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains(r#""unlockedProjectIds":["brickd"]"#));
        assert!(json.contains(r#""commandLog":[]"#));
    }
}
