//! HTML fragment rendering for HTMX swaps.
//!
//! The page has two swap targets: `#quest-terminal` (command log and input)
//! and `#quest-view` (whatever the view selector picks). POST routes answer
//! with both as out-of-band swaps, so every trigger uses `hx-swap="none"`.

pub mod detail;
pub mod hub;
pub mod terminal;

use crate::quest::Session;
use crate::quest::view::View;

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Button attributes for a POST that swaps nothing in place.
///
/// `hx-vals` sits in a single-quoted attribute, so the id is JSON-encoded first
/// and then only `&` and `'` need entity escaping.
pub(crate) fn hx_post(path: &str, id: &str) -> String {
    let vals = serde_json::json!({ "id": id }).to_string();
    format!(
        r#"hx-post="{}" hx-vals='{}' hx-swap="none""#,
        path,
        vals.replace('&', "&amp;").replace('\'', "&#x27;")
    )
}

/// Render the screen the view selector currently picks.
pub fn render_view(session: &Session) -> String {
    match session.view() {
        View::Hub => hub::render_hub(session),
        View::ProjectDetail(id) => detail::render_project(session, &id),
        View::ExperienceDetail(id) => detail::render_experience(session, &id),
        View::SectionDetail(section) => detail::render_section(session, section),
        View::Completion => detail::render_completion(),
    }
}

/// Both swap targets as out-of-band fragments.
pub fn render_refresh(session: &Session) -> String {
    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div id="quest-terminal" hx-swap-oob="innerHTML">"#);
    html.push_str(&terminal::render_terminal(session));
    html.push_str(r#"</div>"#);
    html.push_str(r#"<div id="quest-view" hx-swap-oob="innerHTML">"#);
    html.push_str(&render_view(session));
    html.push_str(r#"</div>"#);
    html
}
