//! CLI module - argument parsing and the interactive loop

mod args;
mod repl;

pub use args::Cli;
pub use repl::{export_path, import_path, run_loop, Action, ACTION_PROMPT};
