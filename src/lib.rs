//! Cardbox: Flashcard Study Library
//!
//! A library for maintaining a flashcard deck with mistake tracking,
//! quizzing over it through a line-oriented session, and moving decks to
//! and from the `{"flashcards": [...]}` JSON file format.

pub mod cli;
pub mod deck;
pub mod session;
pub mod storage;
pub mod utils;
