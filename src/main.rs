//! Cardbox: Flashcard Study CLI Tool
//!
//! A command-line flashcard trainer: add and remove cards, quiz yourself,
//! track mistakes, and carry decks between sessions as JSON files.

use std::io;

use anyhow::Result;
use clap::Parser;

use cardbox::cli::{self, Cli};
use cardbox::deck::Deck;
use cardbox::session::Session;
use cardbox::utils::{print_banner, print_farewell};

fn main() -> Result<()> {
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    let mut deck = Deck::new();

    // Preload the deck before the loop starts
    if let Some(path) = &cli.import_from {
        cli::import_path(&mut deck, &mut session, path)?;
    }

    let mut rng = rand::thread_rng();
    cli::run_loop(&mut deck, &mut session, cli.export_to.as_deref(), &mut rng)?;

    print_farewell();
    Ok(())
}
