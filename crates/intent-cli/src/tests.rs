use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["intent-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_catalog_command() {
    let cli = Cli::try_parse_from(["intent-cli", "catalog"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Catalog)));
}

#[test]
fn parses_score_with_input() {
    let cli = Cli::try_parse_from(["intent-cli", "score", "--input", "signals.json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Score {
            ref input,
            previous: None,
            pretty: false,
        }) if input == &PathBuf::from("signals.json")
    ));
}

#[test]
fn score_requires_input() {
    let result = Cli::try_parse_from(["intent-cli", "score"]);
    assert!(result.is_err());
}

#[test]
fn parses_score_with_previous_and_pretty() {
    let cli = Cli::try_parse_from([
        "intent-cli",
        "score",
        "--input",
        "signals.json",
        "--previous",
        "last.json",
        "--pretty",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Score {
            previous: Some(ref p),
            pretty: true,
            ..
        }) if p == &PathBuf::from("last.json")
    ));
}

#[test]
fn generate_defaults() {
    let cli = Cli::try_parse_from(["intent-cli", "generate"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Generate {
            count: 25,
            seed: None,
            window_days: 30,
        })
    ));
}

#[test]
fn generate_with_seed_and_count() {
    let cli = Cli::try_parse_from([
        "intent-cli",
        "generate",
        "--count",
        "100",
        "--seed",
        "42",
        "--window-days",
        "7",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Generate {
            count: 100,
            seed: Some(42),
            window_days: 7,
        })
    ));
}
