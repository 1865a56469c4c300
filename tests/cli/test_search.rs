//! Tests for the search CLI command
//!
//! - Valid queries with results
//! - Empty results
//! - Malformed queries
//! - Output format variations

use crate::common::{test_config, TestCorpus};
use sift::cli::commands::search::{execute, SearchArgs};
use sift::cli::OutputFormat;

fn args(query: &str, corpus: &TestCorpus) -> SearchArgs {
    SearchArgs {
        query: query.split_whitespace().map(String::from).collect(),
        corpus: Some(corpus.corpus_path()),
        count: false,
    }
}

#[test]
fn test_search_valid_query_human() {
    let corpus = TestCorpus::small();

    let result = execute(
        args("cat AND dog", &corpus),
        test_config(&corpus),
        OutputFormat::Human,
    );
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

#[test]
fn test_search_valid_query_json() {
    let corpus = TestCorpus::small();

    let result = execute(
        args("dog AND NOT cat", &corpus),
        test_config(&corpus),
        OutputFormat::Json,
    );
    assert!(
        result.is_ok(),
        "JSON search should succeed: {:?}",
        result.err()
    );
}

#[test]
fn test_search_empty_results() {
    let corpus = TestCorpus::small();

    let mut search = args("fish", &corpus);
    search.count = true;

    let result = execute(search, test_config(&corpus), OutputFormat::Human);
    assert!(result.is_ok(), "No matches is not an error");
}

#[test]
fn test_search_malformed_query() {
    let corpus = TestCorpus::small();

    let result = execute(
        args("cat AND OR dog", &corpus),
        test_config(&corpus),
        OutputFormat::Human,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Malformed query"), "got: {err}");
}
