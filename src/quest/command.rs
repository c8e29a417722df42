//! Terminal command vocabulary and the normalizing parser.
//!
//! Typed input and button clicks both arrive as strings and both go through
//! [`Command::parse`], so the two entry points share one vocabulary.

use super::direction::Direction;
use super::section::SectionId;

/// Every command the terminal understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `go <direction>`: reveal the project on that spoke.
    Go(Direction),
    /// A section phrase such as `check inventory`.
    Unlock(SectionId),
    Help,
    Status,
    /// Start the session over: progression, navigation, and log.
    Reset,
    /// Anything else. Carries the normalized input.
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let normalized = normalize(input);
        if let Some(direction) = Direction::from_command(&normalized) {
            return Command::Go(direction);
        }
        if let Some(section) = SectionId::from_phrase(&normalized) {
            return Command::Unlock(section);
        }
        match normalized.as_str() {
            "help" => Command::Help,
            "status" => Command::Status,
            "reset" => Command::Reset,
            _ => Command::Unknown(normalized),
        }
    }
}

/// Trim, lowercase, and collapse inner whitespace runs to a single space.
pub fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
