//! Tests for command-line argument parsing

use clap::Parser;
use sift::cli::{Cli, Commands, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_parse_search_tokens() {
    let cli = Cli::try_parse_from(["sift", "search", "--corpus", "docs", "cat", "AND", "NOT", "dog"])
        .unwrap();

    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, vec!["cat", "AND", "NOT", "dog"]);
            assert_eq!(args.corpus, Some(PathBuf::from("docs")));
        }
        other => panic!("Expected search, got {other:?}"),
    }
    assert_eq!(cli.format, OutputFormat::Human);
}

#[test]
fn test_parse_search_requires_query() {
    assert!(Cli::try_parse_from(["sift", "search"]).is_err());
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from(["sift", "run", "--sort", "-vv", "--format", "json"]).unwrap();

    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Run(args) => {
            assert!(args.sort);
            assert!(args.queries.is_none());
        }
        other => panic!("Expected run, got {other:?}"),
    }
}

#[test]
fn test_parse_show_config() {
    let cli = Cli::try_parse_from(["sift", "show-config", "--toml"]).unwrap();
    assert!(matches!(cli.command, Commands::ShowConfig(ref args) if args.toml));
}

#[test]
fn test_cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
