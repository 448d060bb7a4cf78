//! Terminal styling utilities for session output
//!
//! Decorative output only. Nothing printed here is part of the session
//! transcript, so the saved log stays byte-faithful to the prompts and
//! responses.

use console::style;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("cardbox").cyan().bold(),
        style(format!("v{version}")).dim()
    );
    println!(
        "    {}",
        style("flashcard practice with mistake tracking").dim()
    );
    println!("    {}", style("─".repeat(44)).dim());
    println!();
}

/// Print the farewell line. Always the last output before exit.
pub fn print_farewell() {
    println!("{}", style("Bye bye!").cyan());
}
