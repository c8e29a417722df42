//! The four Advanced Systems sections and their canonical unlock order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Advanced section identity. Declaration order is the unlock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Skills,
    Research,
    Contact,
    Resume,
}

impl SectionId {
    pub const ORDER: [SectionId; 4] = [
        SectionId::Skills,
        SectionId::Research,
        SectionId::Contact,
        SectionId::Resume,
    ];

    /// Position in `ORDER`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Skills => "skills",
            SectionId::Research => "research",
            SectionId::Contact => "contact",
            SectionId::Resume => "resume",
        }
    }

    /// Terminal phrase that unlocks (or re-opens) this section.
    pub fn phrase(self) -> &'static str {
        match self {
            SectionId::Skills => "check inventory",
            SectionId::Research => "consult scrolls",
            SectionId::Contact => "display beacon",
            SectionId::Resume => "unseal documents",
        }
    }

    pub fn from_phrase(normalized: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|s| s.phrase() == normalized)
    }

    /// Parse a section id as sent by the UI (`"skills"`, `"resume"`, ...).
    pub fn parse(id: &str) -> Option<Self> {
        Self::ORDER
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(id.trim()))
    }

    /// Sections that must already be unlocked before this one.
    pub fn predecessors(self) -> &'static [SectionId] {
        &Self::ORDER[..self.index()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_index() {
        for (i, s) in SectionId::ORDER.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn phrases_are_unique() {
        for a in SectionId::ORDER {
            for b in SectionId::ORDER {
                if a != b {
                    assert_ne!(a.phrase(), b.phrase());
                }
            }
            assert_eq!(SectionId::from_phrase(a.phrase()), Some(a));
        }
    }

    #[test]
    fn predecessors_are_prefix() {
        assert!(SectionId::Skills.predecessors().is_empty());
        assert_eq!(
            SectionId::Contact.predecessors(),
            &[SectionId::Skills, SectionId::Research]
        );
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(SectionId::parse("Resume"), Some(SectionId::Resume));
        assert_eq!(SectionId::parse("hobbies"), None);
    }
}
