//! View selection: which screen the visitor sees.
//!
//! [`select_view`] is a pure projection of progression plus navigation. The
//! completion predicate is always recomputed from the progression sets; only
//! the one-shot "dismissed" flag is stored.

use serde::Serialize;

use super::progression::Progression;
use super::section::SectionId;
use crate::catalog::Catalog;

/// A detail view the visitor has navigated into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum Detail {
    Project(String),
    Experience(String),
    Section(SectionId),
}

/// Navigation state, orthogonal to progression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    pub(super) open: Option<Detail>,
    pub(super) completion_dismissed: bool,
}

impl Navigation {
    pub fn open_detail(&self) -> Option<&Detail> {
        self.open.as_ref()
    }

    pub fn completion_dismissed(&self) -> bool {
        self.completion_dismissed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "id", rename_all = "camelCase")]
pub enum View {
    Hub,
    ProjectDetail(String),
    SectionDetail(SectionId),
    ExperienceDetail(String),
    Completion,
}

/// Every project completed and every section unlocked (plus every experience
/// viewed when the settings ask for it).
pub fn all_criteria_met(catalog: &Catalog, progression: &Progression) -> bool {
    let chronicles_ok = !catalog.settings().require_chronicles_for_completion
        || progression.all_experiences_viewed(catalog);
    progression.all_projects_completed(catalog) && progression.all_sections_unlocked() && chronicles_ok
}

/// An open detail wins; otherwise completion shows until dismissed, then the hub.
pub fn select_view(catalog: &Catalog, progression: &Progression, navigation: &Navigation) -> View {
    match &navigation.open {
        Some(Detail::Project(id)) => View::ProjectDetail(id.clone()),
        Some(Detail::Experience(id)) => View::ExperienceDetail(id.clone()),
        Some(Detail::Section(section)) => View::SectionDetail(*section),
        None if all_criteria_met(catalog, progression) && !navigation.completion_dismissed => {
            View::Completion
        }
        None => View::Hub,
    }
}
