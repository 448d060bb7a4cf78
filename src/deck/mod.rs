//! Deck module - the card collection and its operations.

mod card;

pub use card::Card;

use std::collections::BTreeMap;

use rand::Rng;
use thiserror::Error;

/// Errors raised by deck operations.
///
/// The `Display` text of each variant is the exact message shown to the
/// user, so callers report failures with `err.to_string()` and nothing
/// else.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// A card with this term is already in the deck.
    #[error("The term \"{0}\" already exists. Try again:")]
    DuplicateTerm(String),

    /// Another card already carries this definition.
    #[error("The definition \"{0}\" already exists. Try again:")]
    DuplicateDefinition(String),

    /// No card with this term exists.
    #[error("Can't remove \"{0}\": there is no such card.")]
    UnknownTerm(String),

    /// Random selection is undefined over an empty deck.
    #[error("The deck is empty. Add at least one card first.")]
    EmptyDeck,
}

/// Result of answering a quiz prompt for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// The answer matched the card's definition exactly.
    Correct,
    /// The answer was wrong; the card's mistake counter was incremented.
    Wrong {
        /// The definition that was expected.
        correct: String,
        /// Term of a different card whose definition the answer matched.
        matches_other: Option<String>,
    },
}

/// The full card collection for a session, keyed by term.
///
/// `add` enforces that no two cards share a term and no two cards share a
/// definition. `insert` (the import path) only keys by term and can
/// overwrite; it deliberately skips the definition check.
#[derive(Debug, Default)]
pub struct Deck {
    cards: BTreeMap<String, Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<&Card> {
        self.cards.get(term)
    }

    /// Iterate over all cards in term order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Check that a term is free before accepting it from the user.
    pub fn check_term(&self, term: &str) -> Result<(), DeckError> {
        if self.cards.contains_key(term) {
            return Err(DeckError::DuplicateTerm(term.to_string()));
        }
        Ok(())
    }

    /// Check that a definition is free before accepting it from the user.
    pub fn check_definition(&self, definition: &str) -> Result<(), DeckError> {
        if self.term_with_definition(definition).is_some() {
            return Err(DeckError::DuplicateDefinition(definition.to_string()));
        }
        Ok(())
    }

    /// Term of the card whose definition matches `definition`, if any.
    pub fn term_with_definition(&self, definition: &str) -> Option<&str> {
        self.cards
            .values()
            .find(|card| card.definition == definition)
            .map(|card| card.term.as_str())
    }

    /// Add a card, enforcing term and definition uniqueness.
    ///
    /// On a collision the deck is left untouched.
    pub fn add(&mut self, card: Card) -> Result<(), DeckError> {
        self.check_term(&card.term)?;
        self.check_definition(&card.definition)?;
        self.cards.insert(card.term.clone(), card);
        Ok(())
    }

    /// Insert or overwrite a card by term.
    ///
    /// Import path: definition uniqueness is not re-checked, so an
    /// imported deck may violate the invariant `add` maintains.
    pub fn insert(&mut self, card: Card) {
        self.cards.insert(card.term.clone(), card);
    }

    /// Remove the card with this term.
    pub fn remove(&mut self, term: &str) -> Result<(), DeckError> {
        if self.cards.remove(term).is_none() {
            return Err(DeckError::UnknownTerm(term.to_string()));
        }
        Ok(())
    }

    /// Score an answer against the card with this term.
    ///
    /// A wrong answer increments the card's mistake counter by exactly
    /// one and reports whether the answer is the definition of some other
    /// card.
    pub fn answer_quiz(&mut self, term: &str, answer: &str) -> Result<QuizOutcome, DeckError> {
        let card = self
            .cards
            .get_mut(term)
            .ok_or_else(|| DeckError::UnknownTerm(term.to_string()))?;
        if card.definition == answer {
            return Ok(QuizOutcome::Correct);
        }
        card.mistakes += 1;
        let correct = card.definition.clone();
        let matches_other = self.term_with_definition(answer).map(str::to_string);
        Ok(QuizOutcome::Wrong {
            correct,
            matches_other,
        })
    }

    /// Zero every card's mistake counter.
    pub fn reset_stats(&mut self) {
        for card in self.cards.values_mut() {
            card.mistakes = 0;
        }
    }

    /// Terms tied at the deck-wide maximum mistake count, with the count.
    ///
    /// `None` when the maximum is zero, including for an empty deck.
    pub fn hardest_cards(&self) -> Option<(u32, Vec<&str>)> {
        let max = self.cards.values().map(|c| c.mistakes).max().unwrap_or(0);
        if max == 0 {
            return None;
        }
        let terms = self
            .cards
            .values()
            .filter(|c| c.mistakes == max)
            .map(|c| c.term.as_str())
            .collect();
        Some((max, terms))
    }

    /// Uniform random selection with replacement.
    pub fn random_term(&self, rng: &mut impl Rng) -> Result<&str, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        let index = rng.gen_range(0..self.cards.len());
        self.cards
            .keys()
            .nth(index)
            .map(String::as_str)
            .ok_or(DeckError::EmptyDeck)
    }
}
