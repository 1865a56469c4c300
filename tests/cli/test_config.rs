//! Tests for the show-config CLI command

use sift::cli::commands::config::{execute, ConfigArgs};
use sift::cli::OutputFormat;
use sift::core::config::Config;

#[test]
fn test_show_config_human() {
    let result = execute(ConfigArgs { toml: false }, &Config::default(), OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_show_config_json() {
    let result = execute(ConfigArgs { toml: false }, &Config::default(), OutputFormat::Json);
    assert!(result.is_ok());
}

#[test]
fn test_show_config_toml_round_trips() {
    let result = execute(ConfigArgs { toml: true }, &Config::default(), OutputFormat::Human);
    assert!(result.is_ok());

    let rendered = toml::to_string_pretty(&Config::default()).unwrap();
    let parsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed.search.max_query_length, Config::default().search.max_query_length);
    assert_eq!(parsed.corpus.exclude_patterns, vec!["*.dtd".to_string()]);
}
