//! Session settings, read from the `settings` block of the portfolio document.

use serde::{Deserialize, Serialize};

/// Gating switches and terminal presentation. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestSettings {
    /// Every experience must be viewed before the first section can unlock.
    pub require_chronicles_for_sections: bool,

    /// The completion screen also waits for every experience to be viewed.
    pub require_chronicles_for_completion: bool,

    /// Prepended to each echoed command in the log.
    pub echo_prefix: String,

    /// Banner seeded into the log at session start and on `reset`.
    pub welcome: Vec<String>,
}

impl Default for QuestSettings {
    fn default() -> Self {
        Self {
            require_chronicles_for_sections: false,
            require_chronicles_for_completion: false,
            echo_prefix: "> ".to_string(),
            welcome: vec![
                "Welcome, adventurer, to the Realm of Code!".to_string(),
                "Type commands or click the map to explore. Try \"help\".".to_string(),
            ],
        }
    }
}
