//! The session, the single state container owned by the application root.
//!
//! Holds the read-only catalog, the progression record, and navigation.
//! Callers receive it by reference; all progression writes go through the
//! interpreter and the exit handlers.

use serde::Serialize;

use super::exit::{exit_experience, exit_project};
use super::interpreter::{Effect, Interpreter};
use super::progression::Progression;
use super::section::SectionId;
use super::view::{Detail, Navigation, View, select_view};
use crate::catalog::Catalog;

pub struct Session {
    catalog: Catalog,
    progression: Progression,
    navigation: Navigation,
}

/// Read-only projection served by `/api/state`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub view: View,
    pub open_detail: Option<&'a Detail>,
    pub completion_dismissed: bool,
    pub progression: &'a Progression,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        let progression = Progression::with_banner(&catalog.settings().welcome);
        Self {
            catalog,
            progression,
            navigation: Navigation::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn view(&self) -> View {
        select_view(&self.catalog, &self.progression, &self.navigation)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            view: self.view(),
            open_detail: self.navigation.open_detail(),
            completion_dismissed: self.navigation.completion_dismissed(),
            progression: &self.progression,
        }
    }

    /// Typed input or a quick-command button.
    pub fn submit(&mut self, input: &str) {
        let effect = Interpreter::new(&self.catalog, &mut self.progression).execute(input);
        self.apply(effect);
    }

    pub fn click_project(&mut self, project_id: &str) {
        let effect = Interpreter::new(&self.catalog, &mut self.progression).click_project(project_id);
        self.apply(effect);
    }

    pub fn open_experience(&mut self, experience_id: &str) {
        let effect =
            Interpreter::new(&self.catalog, &mut self.progression).open_experience(experience_id);
        self.apply(effect);
    }

    pub fn open_section(&mut self, section: SectionId) {
        let effect = Interpreter::new(&self.catalog, &mut self.progression).open_section(section);
        self.apply(effect);
    }

    /// Leave the open detail view, running its completion/viewed handler.
    /// A no-op at the hub.
    pub fn exit_detail(&mut self) {
        match self.navigation.open.take() {
            Some(Detail::Project(id)) => {
                exit_project(&self.catalog, &mut self.progression, &id);
            }
            Some(Detail::Experience(id)) => {
                exit_experience(&self.catalog, &mut self.progression, &id);
            }
            Some(Detail::Section(_)) | None => {}
        }
    }

    /// Dismiss the completion screen. Returns `false` if it was not showing.
    pub fn dismiss_completion(&mut self) -> bool {
        if self.view() != View::Completion {
            return false;
        }
        log::info!("completion screen dismissed");
        self.navigation.completion_dismissed = true;
        true
    }

    /// Start over with the same catalog.
    pub fn reset(&mut self) {
        log::info!("session reset");
        self.progression = Progression::with_banner(&self.catalog.settings().welcome);
        self.navigation = Navigation::default();
        self.progression
            .log_mut()
            .push("The realm has been reset. Your journey begins anew.");
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Stay => {}
            Effect::Open(detail) => {
                // Leaving one detail for another still counts as an exit.
                if self.navigation.open.as_ref() != Some(&detail) {
                    self.exit_detail();
                }
                self.navigation.open = Some(detail);
            }
            Effect::Show(detail) => self.navigation.open = Some(detail),
            Effect::Reset => self.reset(),
        }
    }
}
