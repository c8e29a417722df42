//! Detail-view exit handlers: completion and viewed transitions happen here,
//! on leaving a detail, never on entering it. Both handlers are idempotent.

use super::progression::Progression;
use crate::catalog::Catalog;

/// Complete a project on leaving its detail view. Returns `true` if this call
/// completed it.
pub(super) fn exit_project(catalog: &Catalog, progression: &mut Progression, project_id: &str) -> bool {
    let Some(project) = catalog.project(project_id) else {
        log::warn!("exit from unknown project `{}`", project_id);
        return false;
    };
    if !progression.complete_project(project_id) {
        return false;
    }
    log::debug!("project `{}` completed", project_id);

    let total = catalog.projects().len();
    let done = progression.completed_projects().len();
    let log = progression.log_mut();
    log.push(format!("Quest complete: {}! ({}/{})", project.title, done, total));

    // Completion never regresses, so this fires once per session.
    if progression.all_projects_completed(catalog) {
        log::info!("tier one complete");
        let log = progression.log_mut();
        log.push(format!(
            "All {} quests conquered! The advanced systems stir. Type \"help\" to see what awaits.",
            total
        ));
        if !catalog.experiences().is_empty() {
            log.push("The chronicles of past campaigns are now open on the map.");
        }
    }
    true
}

/// Mark an experience viewed on leaving its detail view. Returns `true` if
/// this call marked it.
pub(super) fn exit_experience(
    catalog: &Catalog,
    progression: &mut Progression,
    experience_id: &str,
) -> bool {
    let Some(experience) = catalog.experience(experience_id) else {
        log::warn!("exit from unknown experience `{}`", experience_id);
        return false;
    };
    if !progression.mark_viewed(experience_id) {
        return false;
    }
    log::debug!("experience `{}` viewed", experience_id);

    progression.log_mut().push(format!(
        "Chronicle reviewed: {} at {}.",
        experience.title, experience.company
    ));
    if progression.all_experiences_viewed(catalog) {
        progression
            .log_mut()
            .push("Every chronicle has been reviewed.");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::fixture_json;

    fn catalog() -> Catalog {
        Catalog::from_json(&fixture_json(&[("a", "north"), ("b", "east")], &["x", "y"])).unwrap()
    }

    #[test]
    fn exit_completes_once() {
        let catalog = catalog();
        let mut p = Progression::default();
        p.unlock_project("a");

        assert!(exit_project(&catalog, &mut p, "a"));
        let after_first = p.log().len();
        let completed = p.completed_projects().clone();

        assert!(!exit_project(&catalog, &mut p, "a"));
        assert_eq!(p.log().len(), after_first);
        assert_eq!(p.completed_projects(), &completed);
    }

    #[test]
    fn exit_of_locked_project_is_ignored() {
        let catalog = catalog();
        let mut p = Progression::default();
        assert!(!exit_project(&catalog, &mut p, "a"));
        assert!(p.completed_projects().is_empty());
        assert!(p.log().is_empty());
    }

    #[test]
    fn tier_announcement_fires_on_last_completion_only() {
        let catalog = catalog();
        let mut p = Progression::default();
        p.unlock_project("a");
        p.unlock_project("b");

        exit_project(&catalog, &mut p, "a");
        assert!(!p.log().lines().iter().any(|l| l.contains("conquered")));

        exit_project(&catalog, &mut p, "b");
        exit_project(&catalog, &mut p, "a");
        exit_project(&catalog, &mut p, "b");
        let announcements = p
            .log()
            .lines()
            .iter()
            .filter(|l| l.contains("conquered"))
            .count();
        assert_eq!(announcements, 1);
    }

    #[test]
    fn experiences_are_viewed_once() {
        let catalog = catalog();
        let mut p = Progression::default();
        assert!(exit_experience(&catalog, &mut p, "y"));
        assert!(!exit_experience(&catalog, &mut p, "y"));
        assert!(exit_experience(&catalog, &mut p, "x"));
        assert!(!exit_experience(&catalog, &mut p, "nope"));

        let lines = p.log().lines();
        assert_eq!(lines.iter().filter(|l| l.starts_with("Chronicle reviewed")).count(), 2);
        assert_eq!(lines.last().unwrap(), "Every chronicle has been reviewed.");
    }
}
