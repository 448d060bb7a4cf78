//! Deck file adapters - the `{"flashcards": [...]}` JSON format.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deck::Card;

/// On-disk deck representation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeckFile {
    pub flashcards: Vec<Card>,
}

/// Failures reading a deck file.
///
/// Any read failure reports as `File not found.` to the user; a file that
/// reads but does not parse is distinguished so the import path can abort
/// without a message.
#[derive(Debug, Error)]
pub enum DeckFileError {
    #[error("File not found.")]
    Unreadable(#[source] io::Error),

    #[error("malformed deck file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read and parse a deck file.
pub fn read_deck_file(path: &Path) -> Result<Vec<Card>, DeckFileError> {
    let bytes = fs::read(path).map_err(DeckFileError::Unreadable)?;
    let parsed: DeckFile = serde_json::from_slice(&bytes)?;
    Ok(parsed.flashcards)
}

/// Serialize cards to `path`, creating or overwriting the file.
///
/// Output is pretty-printed JSON in the same format `read_deck_file`
/// accepts.
pub fn write_deck_file(path: &Path, cards: Vec<Card>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&DeckFile { flashcards: cards })?;
    fs::write(path, json)
}
