//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Cardbox - study flashcards from the terminal
#[derive(Parser, Debug)]
#[command(name = "cardbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Deck file to load before the session starts.
    /// A missing file is reported and the session starts with an empty deck.
    #[arg(long = "import_from", value_name = "PATH")]
    pub import_from: Option<PathBuf>,

    /// Deck file to save when the session ends
    #[arg(long = "export_to", value_name = "PATH")]
    pub export_to: Option<PathBuf>,
}
