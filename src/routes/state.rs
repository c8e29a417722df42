//! `/api/state`: read-only JSON snapshot of the session.
//!
//! Serves debugging and host-side tests. Nothing reads it back in; session
//! state never outlives the page.

use crate::quest::Session;
use crate::routes::util::{get_param, parse_query};

/// Handle GET /api/state[?pretty=true]
pub fn handle_state_get(session: &Session, query: &str) -> String {
    let params = parse_query(query);
    let snapshot = session.snapshot();
    let json = if get_param(&params, "pretty") == Some("true") {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    };
    json.unwrap_or_else(|e| {
        log::error!("state snapshot failed: {}", e);
        "{}".to_string()
    })
}
