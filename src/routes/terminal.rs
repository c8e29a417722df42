//! `/api/terminal` routes: the command log and the command input.

use crate::quest::Session;
use crate::render;
use crate::routes::util::{get_param, parse_form_body};

// ── GET /api/terminal ──────────────────────────────────────────────

/// Handle GET /api/terminal
/// Returns the terminal panel (log, quick commands, input form).
pub fn handle_terminal_get(session: &Session, _query: &str) -> String {
    render::terminal::render_terminal(session)
}

// ── POST /api/terminal ─────────────────────────────────────────────

/// Handle POST /api/terminal
/// Body: command={text}
/// A missing `command` runs as empty input, which the interpreter
/// reports as unknown. Returns both swap targets out-of-band.
pub fn handle_command_post(session: &mut Session, body: &str) -> String {
    let params = parse_form_body(body);
    let command = get_param(&params, "command").unwrap_or("");
    session.submit(command);
    render::render_refresh(session)
}
