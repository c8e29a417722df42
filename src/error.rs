//! Error types.
//!
//! `CatalogError` covers loading the portfolio document. `Denied` is every
//! recoverable refusal a player can run into; its `Display` text is the line
//! written to the command log, so none of these ever reach the browser as a
//! failure.

use thiserror::Error;

use crate::quest::direction::Direction;
use crate::quest::section::SectionId;

/// Reference data could not be loaded or failed validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid portfolio JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("portfolio lists no projects")]
    NoProjects,

    #[error("duplicate project id `{0}`")]
    DuplicateProject(String),

    #[error("direction `{direction}` is claimed by both `{first}` and `{second}`")]
    DuplicateDirection {
        direction: Direction,
        first: String,
        second: String,
    },

    #[error("duplicate experience id `{0}`")]
    DuplicateExperience(String),

    #[error("section `{0}` is listed more than once")]
    DuplicateSection(SectionId),

    #[error("section `{0}` is missing from the portfolio")]
    MissingSection(SectionId),
}

/// A player action whose precondition does not hold. Never mutates progression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Denied {
    #[error("Unknown command: \"{0}\". Type \"help\" to see what you can do.")]
    UnknownCommand(String),

    /// Valid direction, but the portfolio has no project bound to it.
    #[error("No pathway leads {0}.")]
    NoPathway(Direction),

    #[error("{title} is locked. Type \"{command}\" to reveal the path.")]
    ProjectLocked { title: String, command: String },

    #[error("The advanced systems are sealed. Complete these quests first: {}", .missing.join(", "))]
    ProjectsIncomplete { missing: Vec<String> },

    #[error("The chronicles must be reviewed first: {}", .missing.join(", "))]
    ChroniclesIncomplete { missing: Vec<String> },

    #[error("The chronicles stay sealed until every quest is complete.")]
    ChroniclesSealed,

    #[error("{title} is still locked. Type \"{command}\" first.")]
    OutOfSequence { title: String, command: String },

    #[error("{title} is locked. Type \"{command}\" to unlock it.")]
    SectionLocked { title: String, command: String },

    #[error("Nothing called \"{0}\" exists in this realm.")]
    UnknownId(String),
}
