//! The interactive study loop - command parsing and dispatch.
//!
//! One command per line of input, matched case-sensitively. Each handler
//! drives its own prompts through the shared [`Session`], so everything
//! the user sees and types ends up in the transcript.

use std::io::{self, BufRead, Write};
use std::path::Path;

use rand::Rng;

use crate::deck::{Card, Deck, QuizOutcome};
use crate::session::Session;
use crate::storage::{self, DeckFileError};

/// Prompt listing every action the dispatcher accepts.
pub const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// One dispatchable command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Export,
    Import,
    Ask,
    Log,
    HardestCard,
    ResetStats,
    Exit,
}

impl Action {
    /// Match an input line against the exact names in the action prompt.
    /// Case-sensitive; anything else is unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "export" => Some(Self::Export),
            "import" => Some(Self::Import),
            "ask" => Some(Self::Ask),
            "log" => Some(Self::Log),
            "hardest card" => Some(Self::HardestCard),
            "reset stats" => Some(Self::ResetStats),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the study loop until `exit` or end of input.
///
/// When `export_on_exit` is set the deck is saved on either way out, so a
/// session ended by closing stdin still keeps its cards. End of input
/// mid-command abandons that command and leaves the loop cleanly.
pub fn run_loop<R: BufRead, W: Write>(
    deck: &mut Deck,
    session: &mut Session<R, W>,
    export_on_exit: Option<&Path>,
    rng: &mut impl Rng,
) -> io::Result<()> {
    loop {
        session.say(ACTION_PROMPT)?;
        let input = match session.read_line() {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err),
        };
        let Some(action) = Action::parse(&input) else {
            session.notice("Unknown action")?;
            continue;
        };
        let outcome = match action {
            Action::Add => add_card(deck, session),
            Action::Remove => remove_card(deck, session),
            Action::Export => export_cards(deck, session),
            Action::Import => import_cards(deck, session),
            Action::Ask => ask(deck, session, rng),
            Action::Log => save_log(session),
            Action::HardestCard => hardest_card(deck, session),
            Action::ResetStats => reset_stats(deck, session),
            Action::Exit => break,
        };
        match outcome {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err),
        }
    }
    if let Some(path) = export_on_exit {
        export_path(deck, session, path)?;
    }
    Ok(())
}

/// Prompt for a term and a definition, re-prompting the colliding field
/// until it validates, then add the card.
fn add_card<R: BufRead, W: Write>(
    deck: &mut Deck,
    session: &mut Session<R, W>,
) -> io::Result<()> {
    session.say("The card:")?;
    let term = loop {
        let term = session.read_line()?;
        match deck.check_term(&term) {
            Ok(()) => break term,
            Err(err) => session.say(&err.to_string())?,
        }
    };
    session.say("The definition of the card:")?;
    let definition = loop {
        let definition = session.read_line()?;
        match deck.check_definition(&definition) {
            Ok(()) => break definition,
            Err(err) => session.say(&err.to_string())?,
        }
    };
    session.say(&format!(
        "The pair (\"{term}\":\"{definition}\") has been added."
    ))?;
    deck.insert(Card::new(term, definition));
    Ok(())
}

fn remove_card<R: BufRead, W: Write>(
    deck: &mut Deck,
    session: &mut Session<R, W>,
) -> io::Result<()> {
    session.say("Which card?")?;
    let term = session.read_line()?;
    match deck.remove(&term) {
        Ok(()) => session.say("The card has been removed."),
        Err(err) => session.say(&err.to_string()),
    }
}

fn export_cards<R: BufRead, W: Write>(
    deck: &Deck,
    session: &mut Session<R, W>,
) -> io::Result<()> {
    session.say("File name:")?;
    let name = session.read_line()?;
    export_path(deck, session, Path::new(&name))
}

/// Save the deck to `path`, reporting the count on success. Shared by the
/// `export` command and the `--export_to` exit path.
pub fn export_path<R: BufRead, W: Write>(
    deck: &Deck,
    session: &mut Session<R, W>,
    path: &Path,
) -> io::Result<()> {
    match storage::write_deck_file(path, deck.cards().cloned().collect()) {
        Ok(()) => session.say(&format!("{} cards have been saved.", deck.len())),
        Err(err) => session.say(&format!("Cannot save to \"{}\": {err}", path.display())),
    }
}

fn import_cards<R: BufRead, W: Write>(
    deck: &mut Deck,
    session: &mut Session<R, W>,
) -> io::Result<()> {
    session.say("File name:")?;
    let name = session.read_line()?;
    import_path(deck, session, Path::new(&name))
}

/// Load cards from `path`, inserting-or-overwriting by term. Shared by
/// the `import` command and the `--import_from` startup path.
pub fn import_path<R: BufRead, W: Write>(
    deck: &mut Deck,
    session: &mut Session<R, W>,
    path: &Path,
) -> io::Result<()> {
    match storage::read_deck_file(path) {
        Ok(cards) => {
            let count = cards.len();
            for card in cards {
                deck.insert(card);
            }
            session.say(&format!("{count} cards have been loaded."))
        }
        Err(DeckFileError::Unreadable(_)) => session.say("File not found."),
        // Malformed files abort the import without a message.
        Err(DeckFileError::Malformed(_)) => Ok(()),
    }
}

/// Quiz `n` randomly selected cards, with replacement. A non-numeric
/// count reads as zero.
fn ask<R: BufRead, W: Write>(
    deck: &mut Deck,
    session: &mut Session<R, W>,
    rng: &mut impl Rng,
) -> io::Result<()> {
    session.say("How many times to ask?")?;
    let count: usize = session.read_line()?.parse().unwrap_or(0);
    for _ in 0..count {
        let term = match deck.random_term(rng) {
            Ok(term) => term.to_string(),
            Err(err) => return session.say(&err.to_string()),
        };
        quiz(deck, session, &term)?;
    }
    Ok(())
}

fn quiz<R: BufRead, W: Write>(
    deck: &mut Deck,
    session: &mut Session<R, W>,
    term: &str,
) -> io::Result<()> {
    session.say(&format!("Print the definition of \"{term}\""))?;
    let answer = session.read_line()?;
    match deck.answer_quiz(term, &answer) {
        Ok(QuizOutcome::Correct) => session.say("Correct!"),
        Ok(QuizOutcome::Wrong {
            correct,
            matches_other: Some(other),
        }) => session.say(&format!(
            "Wrong. The right answer is \"{correct}\", but your definition is correct for \"{other}\"."
        )),
        Ok(QuizOutcome::Wrong {
            correct,
            matches_other: None,
        }) => session.say(&format!("Wrong. The right answer is \"{correct}\".")),
        Err(err) => session.say(&err.to_string()),
    }
}

/// Flush the transcript to a user-named file. An empty name cancels
/// silently.
fn save_log<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    session.say("File name:")?;
    let name = session.read_line()?;
    if name.is_empty() {
        return Ok(());
    }
    let saved = session.transcript().save(Path::new(&name));
    match saved {
        Ok(()) => session.say("The log has been saved."),
        Err(err) => session.say(&format!("Cannot save to \"{name}\": {err}")),
    }
}

fn hardest_card<R: BufRead, W: Write>(
    deck: &Deck,
    session: &mut Session<R, W>,
) -> io::Result<()> {
    match deck.hardest_cards() {
        None => session.say("There are no cards with errors."),
        Some((mistakes, terms)) if terms.len() == 1 => session.say(&format!(
            "The hardest card is \"{}\". You have {} errors answering it.",
            terms[0], mistakes
        )),
        Some((mistakes, terms)) => {
            let joined = terms.join("\", \"");
            session.say(&format!(
                "The hardest cards are \"{joined}\". You have {mistakes} errors answering them."
            ))
        }
    }
}

fn reset_stats<R: BufRead, W: Write>(
    deck: &mut Deck,
    session: &mut Session<R, W>,
) -> io::Result<()> {
    deck.reset_stats();
    session.say("Card statistics have been reset.")
}
