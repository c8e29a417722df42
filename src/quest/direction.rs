//! Compass directions that bind projects to the hub map.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One spoke of the hub. Accepts both `"north"` and `"go north"` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "go north")]
    North,
    #[serde(alias = "go east")]
    East,
    #[serde(alias = "go south")]
    South,
    #[serde(alias = "go west")]
    West,
    #[serde(alias = "go northeast")]
    Northeast,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Northeast,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::Northeast => "northeast",
        }
    }

    /// The terminal phrase that unlocks this direction's project.
    pub fn command(self) -> &'static str {
        match self {
            Direction::North => "go north",
            Direction::East => "go east",
            Direction::South => "go south",
            Direction::West => "go west",
            Direction::Northeast => "go northeast",
        }
    }

    /// Match an already-normalized command.
    pub fn from_command(normalized: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.command() == normalized)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
