//! Navigation routes: icon clicks, detail exits, and completion dismissal.
//!
//! Every POST answers with both swap targets, since a click can change the
//! view and append a hint to the log at the same time.

use crate::quest::Session;
use crate::quest::section::SectionId;
use crate::render;
use crate::routes::util::{get_param, parse_form_body};

fn missing_id() -> String {
    r#"<span class="text-red-400">Missing id parameter</span>"#.to_string()
}

// ── GET /api/view ──────────────────────────────────────────────────

/// Handle GET /api/view
/// Returns the screen picked by the view selector.
pub fn handle_view_get(session: &Session, _query: &str) -> String {
    render::render_view(session)
}

// ── POST /api/project/open ─────────────────────────────────────────

/// Handle POST /api/project/open
/// Body: id={project}. Locked projects answer with an unlock hint.
pub fn handle_project_open_post(session: &mut Session, body: &str) -> String {
    let params = parse_form_body(body);
    let Some(id) = get_param(&params, "id").filter(|id| !id.is_empty()) else {
        return missing_id();
    };
    session.click_project(id);
    render::render_refresh(session)
}

// ── POST /api/experience/open ──────────────────────────────────────

/// Handle POST /api/experience/open
/// Body: id={experience}. Sealed until every project is complete.
pub fn handle_experience_open_post(session: &mut Session, body: &str) -> String {
    let params = parse_form_body(body);
    let Some(id) = get_param(&params, "id").filter(|id| !id.is_empty()) else {
        return missing_id();
    };
    session.open_experience(id);
    render::render_refresh(session)
}

// ── POST /api/section/open ─────────────────────────────────────────

/// Handle POST /api/section/open
/// Body: id={skills|research|contact|resume}
pub fn handle_section_open_post(session: &mut Session, body: &str) -> String {
    let params = parse_form_body(body);
    let id = get_param(&params, "id").unwrap_or("");
    match SectionId::parse(id) {
        Some(section) => {
            session.open_section(section);
            render::render_refresh(session)
        }
        None if id.is_empty() => missing_id(),
        None => format!(
            r#"<span class="text-red-400">Unknown section: {}</span>"#,
            render::escape_html(id)
        ),
    }
}

// ── POST /api/detail/exit ──────────────────────────────────────────

/// Handle POST /api/detail/exit
/// Runs the exit handler for the open detail and returns to the hub.
pub fn handle_detail_exit_post(session: &mut Session, _body: &str) -> String {
    session.exit_detail();
    render::render_refresh(session)
}

// ── POST /api/completion/dismiss ───────────────────────────────────

/// Handle POST /api/completion/dismiss
pub fn handle_completion_dismiss_post(session: &mut Session, _body: &str) -> String {
    session.dismiss_completion();
    render::render_refresh(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::quest::view::View;

    fn session() -> Session {
        Session::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn locked_project_click_hints() {
        let mut s = session();
        let html = handle_project_open_post(&mut s, "id=brickd");
        assert!(html.contains("go northeast"));
        assert_eq!(s.view(), View::Hub);
    }

    #[test]
    fn open_then_exit_completes() {
        let mut s = session();
        s.submit("go northeast");
        let html = handle_project_open_post(&mut s, "id=brickd");
        assert!(html.contains("Mark as Explored"));
        handle_detail_exit_post(&mut s, "");
        assert!(s.progression().is_completed("brickd"));
    }

    #[test]
    fn missing_ids_are_reported() {
        let mut s = session();
        assert!(handle_project_open_post(&mut s, "").contains("Missing id"));
        assert!(handle_experience_open_post(&mut s, "id=").contains("Missing id"));
        assert!(handle_section_open_post(&mut s, "").contains("Missing id"));
        assert!(handle_section_open_post(&mut s, "id=hobbies").contains("Unknown section"));
    }

    #[test]
    fn locked_section_click_hints() {
        let mut s = session();
        let html = handle_section_open_post(&mut s, "id=research");
        assert!(html.contains("consult scrolls"));
        assert_eq!(s.view(), View::Hub);
    }

    #[test]
    fn dismiss_without_completion_is_harmless() {
        let mut s = session();
        handle_completion_dismiss_post(&mut s, "");
        assert!(!s.navigation().completion_dismissed());
    }
}
