//! Quest portfolio in-browser WASM engine.
//!
//! Exports `handle_request(method, path, query, body)` for the Web Worker
//! bridge to call, and `load_portfolio(json)` to swap in the host page's own
//! portfolio document. Uses `matchit` for URL routing.
//!
//! The worker keeps the module alive for the page's lifetime, so the single
//! [`Session`] below lasts exactly one visit; a reload starts over.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod config;
pub mod error;
pub mod quest;
pub mod render;
pub mod routes;

use catalog::Catalog;
use error::CatalogError;
use quest::Session;

thread_local! {
    static SESSION: RefCell<Result<Session, CatalogError>> =
        RefCell::new(Catalog::builtin().map(Session::new));
}

/// Run `f` against the live session, or render the catalog error.
fn with_session<F>(f: F) -> String
where
    F: FnOnce(&mut Session) -> String,
{
    SESSION.with(|cell| match &mut *cell.borrow_mut() {
        Ok(session) => f(session),
        Err(e) => format!(
            r#"<span class="text-red-400">Portfolio unavailable: {}</span>"#,
            render::escape_html(&e.to_string())
        ),
    })
}

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method`: HTTP method ("GET" or "POST")
/// * `path`  : URL path (e.g., "/api/terminal")
/// * `query` : Query string (e.g., "?pretty=true")
/// * `body`  : URL-encoded form body. Empty string for GET requests.
///
/// # Returns
/// An HTML string fragment suitable for HTMX to swap into the DOM, or JSON
/// for `/api/state`.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/view", "view").ok();
    router.insert("/api/terminal", "terminal").ok();
    router.insert("/api/project/open", "project_open").ok();
    router.insert("/api/experience/open", "experience_open").ok();
    router.insert("/api/section/open", "section_open").ok();
    router.insert("/api/detail/exit", "detail_exit").ok();
    router.insert("/api/completion/dismiss", "completion_dismiss").ok();
    router.insert("/api/state", "state").ok();

    let route = match router.at(path) {
        Ok(matched) => *matched.value,
        Err(_) => {
            log::debug!("no route for {} {}", method, path);
            return not_found();
        }
    };

    with_session(|session| match (route, method) {
        // GET routes
        ("view", "GET") => routes::navigation::handle_view_get(session, query),
        ("terminal", "GET") => routes::terminal::handle_terminal_get(session, query),
        ("state", "GET") => routes::state::handle_state_get(session, query),

        // POST routes
        ("terminal", "POST") => routes::terminal::handle_command_post(session, body),
        ("project_open", "POST") => routes::navigation::handle_project_open_post(session, body),
        ("experience_open", "POST") => {
            routes::navigation::handle_experience_open_post(session, body)
        }
        ("section_open", "POST") => routes::navigation::handle_section_open_post(session, body),
        ("detail_exit", "POST") => routes::navigation::handle_detail_exit_post(session, body),
        ("completion_dismiss", "POST") => {
            routes::navigation::handle_completion_dismiss_post(session, body)
        }

        _ => method_not_allowed(),
    })
}

/// Replace the portfolio document and start a fresh session.
///
/// On a bad document the current session is kept and the error is returned
/// as a fragment.
#[wasm_bindgen]
pub fn load_portfolio(json: &str) -> String {
    match Catalog::from_json(json) {
        Ok(catalog) => {
            SESSION.with(|cell| *cell.borrow_mut() = Ok(Session::new(catalog)));
            r#"<span class="text-emerald-400">Portfolio loaded</span>"#.to_string()
        }
        Err(e) => {
            log::warn!("rejected portfolio: {}", e);
            format!(
                r#"<span class="text-red-400">Portfolio rejected: {}</span>"#,
                render::escape_html(&e.to_string())
            )
        }
    }
}

fn not_found() -> String {
    r#"<span class="text-red-400">404: route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-red-400">405: method not allowed</span>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset_session() {
        load_portfolio(catalog::BUILTIN_PORTFOLIO);
    }

    #[test]
    fn returns_404_for_unknown_route() {
        let html = handle_request("GET", "/api/nonexistent", "", "");
        assert!(html.contains("404"));
    }

    #[test]
    fn returns_405_for_wrong_method() {
        assert!(handle_request("POST", "/api/view", "", "").contains("405"));
        assert!(handle_request("GET", "/api/detail/exit", "", "").contains("405"));
    }

    #[test]
    fn routes_view_get() {
        reset_session();
        let html = handle_request("GET", "/api/view", "", "");
        assert!(html.contains("Progress:"));
    }

    #[test]
    fn routes_terminal_post() {
        reset_session();
        let html = handle_request("POST", "/api/terminal", "", "command=go+west");
        assert!(html.contains("Inventory360 is revealed"));
        let json = handle_request("GET", "/api/state", "", "");
        assert!(json.contains("inventory360"));
        reset_session();
    }

    #[test]
    fn full_journey_over_routes() {
        reset_session();
        let ids = ["palate", "expressink", "premier-league", "inventory360", "brickd"];
        let dirs = ["north", "east", "south", "west", "northeast"];
        for (id, dir) in ids.iter().zip(dirs) {
            handle_request("POST", "/api/terminal", "", &format!("command=go+{}", dir));
            handle_request("POST", "/api/project/open", "", &format!("id={}", id));
            handle_request("POST", "/api/detail/exit", "", "");
        }
        for phrase in ["check+inventory", "consult+scrolls", "display+beacon", "unseal+documents"] {
            handle_request("POST", "/api/terminal", "", &format!("command={}", phrase));
        }
        handle_request("POST", "/api/detail/exit", "", "");
        assert!(handle_request("GET", "/api/view", "", "").contains("QUEST COMPLETE!"));

        handle_request("POST", "/api/completion/dismiss", "", "");
        assert!(handle_request("GET", "/api/view", "", "").contains("Progress:"));
        reset_session();
    }

    #[test]
    fn bad_portfolio_keeps_current_session() {
        reset_session();
        handle_request("POST", "/api/terminal", "", "command=go+north");
        let html = load_portfolio(r#"{"projects":[],"sections":[]}"#);
        assert!(html.contains("Portfolio rejected"));
        let json = handle_request("GET", "/api/state", "", "");
        assert!(json.contains("palate"));
        reset_session();
    }
}
