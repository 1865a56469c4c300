//! Tests for the index CLI command

use crate::common::{test_config, TestCorpus};
use sift::cli::commands::index::{execute, IndexArgs};
use sift::cli::OutputFormat;
use sift::core::config::Config;

/// Index the corpus passed on the command line
#[test]
fn test_index_human() {
    let corpus = TestCorpus::small();

    let args = IndexArgs {
        corpus: Some(corpus.corpus_path()),
        top_terms: 0,
        quiet: true,
    };

    let result = execute(args, Config::default(), OutputFormat::Human);
    assert!(result.is_ok(), "Index should succeed: {:?}", result.err());
}

/// Index the configured corpus with JSON output and top terms
#[test]
fn test_index_json_top_terms() {
    let corpus = TestCorpus::small();

    let args = IndexArgs {
        corpus: None,
        top_terms: 2,
        quiet: false,
    };

    let result = execute(args, test_config(&corpus), OutputFormat::Json);
    assert!(result.is_ok(), "JSON index should succeed: {:?}", result.err());
}

/// A missing corpus directory is an error
#[test]
fn test_index_missing_corpus() {
    let corpus = TestCorpus::small();

    let args = IndexArgs {
        corpus: Some(corpus.path().join("missing")),
        top_terms: 0,
        quiet: true,
    };

    let result = execute(args, Config::default(), OutputFormat::Human);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid path"));
}
