//! Command interpreter: turns commands and icon clicks into progression
//! transitions or user-facing refusals.
//!
//! Each entry point ends in exactly one outcome: a transition, a hint, or a
//! [`Denied`] that is written to the command log. Nothing here panics on
//! player input.

use super::command::Command;
use super::direction::Direction;
use super::progression::Progression;
use super::section::SectionId;
use super::view::Detail;
use crate::catalog::Catalog;
use crate::error::Denied;

/// What the session should do after the interpreter returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Stay,
    /// Navigate from a click: leaving the current detail counts as an exit.
    Open(Detail),
    /// Switch to a detail from a typed command without exiting the current one.
    Show(Detail),
    Reset,
}

pub struct Interpreter<'a> {
    catalog: &'a Catalog,
    progression: &'a mut Progression,
}

impl<'a> Interpreter<'a> {
    pub fn new(catalog: &'a Catalog, progression: &'a mut Progression) -> Self {
        Self {
            catalog,
            progression,
        }
    }

    /// Run a typed or button-sourced command. The raw input is echoed first.
    pub fn execute(&mut self, input: &str) -> Effect {
        let echo = format!("{}{}", self.catalog.settings().echo_prefix, input.trim());
        self.progression.log_mut().push(echo);

        let result = match Command::parse(input) {
            Command::Go(direction) => self.go(direction),
            Command::Unlock(section) => self.unlock_section(section),
            Command::Help => {
                self.help();
                Ok(Effect::Stay)
            }
            Command::Status => {
                self.status();
                Ok(Effect::Stay)
            }
            Command::Reset => Ok(Effect::Reset),
            Command::Unknown(text) => Err(Denied::UnknownCommand(text)),
        };
        self.settle(result)
    }

    /// Icon click on a project. Opens its detail only when unlocked.
    pub fn click_project(&mut self, project_id: &str) -> Effect {
        let result = self.project_gate(project_id);
        self.settle(result)
    }

    /// Open a work experience. The chronicles open once Tier 1 is complete.
    pub fn open_experience(&mut self, experience_id: &str) -> Effect {
        let result = self.experience_gate(experience_id);
        self.settle(result)
    }

    /// Click on a section card. Locked cards point at the unlock phrase.
    pub fn open_section(&mut self, section: SectionId) -> Effect {
        let result = if self.progression.is_section_unlocked(section) {
            Ok(Effect::Open(Detail::Section(section)))
        } else {
            Err(Denied::SectionLocked {
                title: self.catalog.section(section).title.clone(),
                command: section.phrase().to_string(),
            })
        };
        self.settle(result)
    }

    fn settle(&mut self, result: Result<Effect, Denied>) -> Effect {
        match result {
            Ok(effect) => effect,
            Err(denied) => {
                log::debug!("denied: {:?}", denied);
                self.progression.log_mut().push(denied.to_string());
                Effect::Stay
            }
        }
    }

    fn go(&mut self, direction: Direction) -> Result<Effect, Denied> {
        let catalog = self.catalog;
        let project = catalog
            .project_by_direction(direction)
            .ok_or(Denied::NoPathway(direction))?;

        if !self.progression.unlock_project(&project.id) {
            self.progression.log_mut().push(format!(
                "{} is already revealed. Click its icon to explore.",
                project.title
            ));
            return Ok(Effect::Stay);
        }

        log::debug!("project `{}` unlocked via {}", project.id, direction);
        self.progression.log_mut().push(format!(
            "You travel {} along the {}. {} is revealed! Click its icon to explore.",
            direction, project.path_label, project.title
        ));
        Ok(Effect::Stay)
    }

    fn unlock_section(&mut self, section: SectionId) -> Result<Effect, Denied> {
        // Re-issuing the phrase just re-opens the section.
        if self.progression.is_section_unlocked(section) {
            return Ok(Effect::Show(Detail::Section(section)));
        }

        self.tier_gate()?;
        if self.catalog.settings().require_chronicles_for_sections {
            self.chronicle_gate()?;
        }
        if let Some(blocker) = section
            .predecessors()
            .iter()
            .find(|s| !self.progression.is_section_unlocked(**s))
        {
            return Err(Denied::OutOfSequence {
                title: self.catalog.section(*blocker).title.clone(),
                command: blocker.phrase().to_string(),
            });
        }

        if !self.progression.unlock_section(section) {
            log::warn!("section `{}` passed every gate but was refused", section);
            return Ok(Effect::Stay);
        }
        log::debug!("section `{}` unlocked", section);
        self.progression.log_mut().push(format!(
            "{} unlocked!",
            self.catalog.section(section).title
        ));
        Ok(Effect::Show(Detail::Section(section)))
    }

    /// Tier 1 gate: every project completed, not merely unlocked.
    fn tier_gate(&self) -> Result<(), Denied> {
        let missing = self.progression.missing_projects(self.catalog);
        if missing.is_empty() {
            return Ok(());
        }
        Err(Denied::ProjectsIncomplete {
            missing: missing.iter().map(|p| p.title.clone()).collect(),
        })
    }

    fn chronicle_gate(&self) -> Result<(), Denied> {
        let missing = self.progression.unviewed_experiences(self.catalog);
        if missing.is_empty() {
            return Ok(());
        }
        Err(Denied::ChroniclesIncomplete {
            missing: missing.iter().map(|e| e.title.clone()).collect(),
        })
    }

    fn project_gate(&self, project_id: &str) -> Result<Effect, Denied> {
        let project = self
            .catalog
            .project(project_id)
            .ok_or_else(|| Denied::UnknownId(project_id.to_string()))?;
        if !self.progression.is_unlocked(&project.id) {
            return Err(Denied::ProjectLocked {
                title: project.title.clone(),
                command: project.direction.command().to_string(),
            });
        }
        Ok(Effect::Open(Detail::Project(project.id.clone())))
    }

    fn experience_gate(&self, experience_id: &str) -> Result<Effect, Denied> {
        let experience = self
            .catalog
            .experience(experience_id)
            .ok_or_else(|| Denied::UnknownId(experience_id.to_string()))?;
        if !self.progression.all_projects_completed(self.catalog) {
            return Err(Denied::ChroniclesSealed);
        }
        Ok(Effect::Open(Detail::Experience(experience.id.clone())))
    }

    fn help(&mut self) {
        let lines = help_lines(self.catalog, self.progression);
        let log = self.progression.log_mut();
        for line in lines {
            log.push(line);
        }
    }

    fn status(&mut self) {
        let catalog = self.catalog;
        let p = &*self.progression;
        let lines = [
            format!(
                "Quests: {}/{} complete ({} revealed)",
                p.completed_projects().len(),
                catalog.projects().len(),
                p.unlocked_projects().len()
            ),
            format!(
                "Chronicles: {}/{} reviewed",
                p.viewed_experiences().len(),
                catalog.experiences().len()
            ),
            format!(
                "Advanced systems: {}/{} unlocked",
                p.unlocked_sections().len(),
                SectionId::ORDER.len()
            ),
        ];
        let log = self.progression.log_mut();
        for line in lines {
            log.push(line);
        }
    }
}

/// Which tier the visitor is working through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Quests,
    Chronicles,
    Systems,
}

pub fn current_tier(catalog: &Catalog, progression: &Progression) -> Tier {
    if !progression.all_projects_completed(catalog) {
        Tier::Quests
    } else if catalog.settings().require_chronicles_for_sections
        && !progression.all_experiences_viewed(catalog)
    {
        Tier::Chronicles
    } else {
        Tier::Systems
    }
}

/// Commands worth offering as quick buttons right now.
pub fn suggested_commands(catalog: &Catalog, progression: &Progression) -> Vec<&'static str> {
    let mut commands: Vec<&'static str> = match current_tier(catalog, progression) {
        Tier::Quests => catalog
            .projects()
            .iter()
            .filter(|p| !progression.is_unlocked(&p.id))
            .map(|p| p.direction.command())
            .collect(),
        Tier::Chronicles => Vec::new(),
        Tier::Systems => SectionId::ORDER.iter().map(|s| s.phrase()).collect(),
    };
    commands.push("help");
    commands.push("status");
    commands
}

fn help_lines(catalog: &Catalog, progression: &Progression) -> Vec<String> {
    let mut lines = Vec::new();
    match current_tier(catalog, progression) {
        Tier::Quests => {
            lines.push("Tier 1: complete every quest on the map.".to_string());
            for p in catalog.projects() {
                if progression.is_completed(&p.id) {
                    lines.push(format!("  [done] {}", p.title));
                } else if progression.is_unlocked(&p.id) {
                    lines.push(format!("  {} awaits: click its icon", p.title));
                } else {
                    lines.push(format!("  {} - a path lies {}", p.direction.command(), p.direction));
                }
            }
        }
        Tier::Chronicles => {
            lines.push("Tier 2: review every chronicle on the map.".to_string());
            for e in progression.unviewed_experiences(catalog) {
                lines.push(format!("  {} at {}", e.title, e.company));
            }
        }
        Tier::Systems => {
            lines.push("Tier 3: unlock the advanced systems in order.".to_string());
            for s in SectionId::ORDER {
                let state = if progression.is_section_unlocked(s) {
                    "unlocked"
                } else {
                    "locked"
                };
                lines.push(format!(
                    "  {} - {} [{}]",
                    s.phrase(),
                    catalog.section(s).title,
                    state
                ));
            }
        }
    }
    lines.push("Also: help, status, reset".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::fixture_json;

    fn catalog() -> Catalog {
        Catalog::from_json(&fixture_json(&[("a", "north"), ("b", "east")], &["x"])).unwrap()
    }

    fn finish_projects(p: &mut Progression) {
        for id in ["a", "b"] {
            p.unlock_project(id);
            p.complete_project(id);
        }
    }

    #[test]
    fn echo_comes_first() {
        let catalog = catalog();
        let mut p = Progression::default();
        Interpreter::new(&catalog, &mut p).execute("  Go North ");
        assert_eq!(p.log().lines()[0], "> Go North");
        assert!(p.log().lines()[1].contains("a title is revealed"));
    }

    #[test]
    fn go_unlocks_once_then_hints() {
        let catalog = catalog();
        let mut p = Progression::default();
        let mut interp = Interpreter::new(&catalog, &mut p);
        assert_eq!(interp.execute("go east"), Effect::Stay);
        assert_eq!(interp.execute("go east"), Effect::Stay);

        assert!(p.is_unlocked("b"));
        assert!(!p.is_completed("b"));
        assert_eq!(p.unlocked_projects().len(), 1);
        assert!(p.log().lines()[3].contains("already revealed"));
    }

    #[test]
    fn direction_without_project_has_no_pathway() {
        let catalog = catalog();
        let mut p = Progression::default();
        Interpreter::new(&catalog, &mut p).execute("go west");
        assert!(p.unlocked_projects().is_empty());
        assert_eq!(p.log().lines()[1], "No pathway leads west.");
    }

    #[test]
    fn locked_click_is_refused() {
        let catalog = catalog();
        let mut p = Progression::default();
        let effect = Interpreter::new(&catalog, &mut p).click_project("b");
        assert_eq!(effect, Effect::Stay);
        assert!(p.log().lines()[0].contains("Type \"go east\""));
        assert!(p.unlocked_projects().is_empty());
    }

    #[test]
    fn unlocked_click_opens_detail() {
        let catalog = catalog();
        let mut p = Progression::default();
        let mut interp = Interpreter::new(&catalog, &mut p);
        interp.execute("go north");
        assert_eq!(interp.click_project("a"), Effect::Open(Detail::Project("a".into())));
        assert!(!p.is_completed("a"));
    }

    #[test]
    fn section_requires_completed_projects() {
        let catalog = catalog();
        let mut p = Progression::default();
        p.unlock_project("a");
        p.unlock_project("b");
        p.complete_project("a");
        Interpreter::new(&catalog, &mut p).execute("check inventory");
        assert!(p.unlocked_sections().is_empty());
        assert!(p.log().lines()[1].ends_with("Complete these quests first: b title"));
    }

    #[test]
    fn sections_unlock_in_sequence() {
        let catalog = catalog();
        let mut p = Progression::default();
        finish_projects(&mut p);
        let mut interp = Interpreter::new(&catalog, &mut p);

        assert_eq!(interp.execute("consult scrolls"), Effect::Stay);
        assert_eq!(
            interp.execute("check inventory"),
            Effect::Show(Detail::Section(SectionId::Skills))
        );
        assert_eq!(interp.execute("display beacon"), Effect::Stay);
        assert_eq!(
            interp.execute("consult scrolls"),
            Effect::Show(Detail::Section(SectionId::Research))
        );
        assert_eq!(p.unlocked_sections(), &[SectionId::Skills, SectionId::Research]);
        assert!(p.log().lines()[1].contains("skills title is still locked"));
        assert!(p.log().lines()[5].contains("Type \"consult scrolls\" first"));
    }

    #[test]
    fn repeated_section_phrase_reopens_without_announcing() {
        let catalog = catalog();
        let mut p = Progression::default();
        finish_projects(&mut p);
        let mut interp = Interpreter::new(&catalog, &mut p);
        interp.execute("check inventory");
        let effect = interp.execute("check inventory");
        assert_eq!(effect, Effect::Show(Detail::Section(SectionId::Skills)));

        let announcements = p.log().lines().iter().filter(|l| l.ends_with("unlocked!")).count();
        assert_eq!(announcements, 1);
        assert_eq!(p.log().len(), 3);
    }

    #[test]
    fn chronicle_gate_applies_when_configured() {
        let json = fixture_json(&[("a", "north"), ("b", "east")], &["x"]).replacen(
            "{",
            r#"{"settings":{"requireChroniclesForSections":true},"#,
            1,
        );
        let catalog = Catalog::from_json(&json).unwrap();
        let mut p = Progression::default();
        finish_projects(&mut p);
        Interpreter::new(&catalog, &mut p).execute("check inventory");
        assert!(p.unlocked_sections().is_empty());
        assert!(p.log().lines()[1].contains("x role"));

        p.mark_viewed("x");
        Interpreter::new(&catalog, &mut p).execute("check inventory");
        assert_eq!(p.unlocked_sections(), &[SectionId::Skills]);
    }

    #[test]
    fn experiences_sealed_until_tier_one() {
        let catalog = catalog();
        let mut p = Progression::default();
        assert_eq!(Interpreter::new(&catalog, &mut p).open_experience("x"), Effect::Stay);
        finish_projects(&mut p);
        assert_eq!(
            Interpreter::new(&catalog, &mut p).open_experience("x"),
            Effect::Open(Detail::Experience("x".into()))
        );
    }

    #[test]
    fn locked_section_card_points_at_phrase() {
        let catalog = catalog();
        let mut p = Progression::default();
        let effect = Interpreter::new(&catalog, &mut p).open_section(SectionId::Contact);
        assert_eq!(effect, Effect::Stay);
        assert!(p.log().lines()[0].contains("\"display beacon\""));
    }

    #[test]
    fn unknown_input_leaves_progression_alone() {
        let catalog = catalog();
        let mut p = Progression::default();
        let mut interp = Interpreter::new(&catalog, &mut p);
        interp.execute("fly");
        interp.execute("");
        assert!(p.unlocked_projects().is_empty());
        assert_eq!(p.log().lines()[1], Denied::UnknownCommand("fly".into()).to_string());
        assert_eq!(p.log().lines()[2], "> ");
        assert!(p.log().lines()[3].starts_with("Unknown command"));
    }

    #[test]
    fn help_is_tier_aware() {
        let catalog = catalog();
        let mut p = Progression::default();
        Interpreter::new(&catalog, &mut p).execute("help");
        assert!(p.log().lines().iter().any(|l| l.contains("go north")));

        finish_projects(&mut p);
        let before = p.unlocked_sections().len();
        Interpreter::new(&catalog, &mut p).execute("help");
        assert!(p.log().lines().iter().any(|l| l.contains("check inventory")));
        assert_eq!(p.unlocked_sections().len(), before);
    }

    #[test]
    fn suggestions_follow_tier() {
        let catalog = catalog();
        let mut p = Progression::default();
        p.unlock_project("a");
        assert_eq!(suggested_commands(&catalog, &p), vec!["go east", "help", "status"]);
        finish_projects(&mut p);
        assert_eq!(suggested_commands(&catalog, &p)[0], "check inventory");
    }

    #[test]
    fn reset_is_deferred_to_session() {
        let catalog = catalog();
        let mut p = Progression::default();
        p.unlock_project("a");
        assert_eq!(Interpreter::new(&catalog, &mut p).execute("RESET"), Effect::Reset);
        assert!(p.is_unlocked("a"));
    }
}
