//! Tests for CLI argument parsing

use cardbox::cli::Cli;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_cli_no_flags() {
    let cli = Cli::parse_from(["cardbox"]);

    assert!(cli.import_from.is_none(), "No import file by default");
    assert!(cli.export_to.is_none(), "No export file by default");
}

#[test]
fn test_cli_import_from() {
    let cli = Cli::parse_from(["cardbox", "--import_from", "deck.json"]);

    assert_eq!(cli.import_from, Some(PathBuf::from("deck.json")));
    assert!(cli.export_to.is_none());
}

#[test]
fn test_cli_export_to() {
    let cli = Cli::parse_from(["cardbox", "--export_to", "saved.json"]);

    assert!(cli.import_from.is_none());
    assert_eq!(cli.export_to, Some(PathBuf::from("saved.json")));
}

#[test]
fn test_cli_both_flags() {
    let cli = Cli::parse_from([
        "cardbox",
        "--import_from",
        "in.json",
        "--export_to",
        "out.json",
    ]);

    assert_eq!(cli.import_from, Some(PathBuf::from("in.json")));
    assert_eq!(cli.export_to, Some(PathBuf::from("out.json")));
}

#[test]
fn test_cli_equals_syntax() {
    let cli = Cli::parse_from(["cardbox", "--import_from=cards/geo.json"]);

    assert_eq!(cli.import_from, Some(PathBuf::from("cards/geo.json")));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    let result = Cli::try_parse_from(["cardbox", "--import-from", "deck.json"]);

    assert!(
        result.is_err(),
        "Kebab-case spelling is not accepted; the flags use underscores"
    );
}
