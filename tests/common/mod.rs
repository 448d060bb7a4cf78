//! Shared test utilities and fixture generators

use std::io::Cursor;

use cardbox::deck::{Card, Deck};
use cardbox::session::Session;

/// Deck with the Paris/Berlin capitals pair used across tests
pub fn capitals_deck() -> Deck {
    let mut deck = Deck::new();
    deck.add(Card::new("Paris", "Capital of France")).unwrap();
    deck.add(Card::new("Berlin", "Capital of Germany")).unwrap();
    deck
}

/// Session reading from a scripted input string and writing to memory
pub fn scripted_session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}
