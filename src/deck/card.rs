//! A single flashcard record.

use serde::{Deserialize, Serialize};

/// A term/definition pair with a running count of wrong answers.
///
/// Cards serialize with the field names used by the deck file format:
/// `term`, `definition`, `mistakes`. A missing `mistakes` field on import
/// reads as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub mistakes: u32,
}

impl Card {
    /// Create a fresh card with a zeroed mistake counter.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }
}
