//! Search command - evaluate one boolean query against a corpus

use crate::cli::commands::with_corpus;
use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query tokens, e.g. `cat AND NOT dog` (operators are upper case)
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Corpus directory (defaults to the configured corpus.dir)
    #[arg(long, short = 'c')]
    pub corpus: Option<PathBuf>,

    /// Print only the number of matches
    #[arg(long)]
    pub count: bool,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.query.join(" ");
    let services = Services::build(with_corpus(config, args.corpus))?;

    let matches = services.evaluate(&query)?;

    let documents = if args.count {
        None
    } else {
        Some(matches.sorted().into_iter().map(String::from).collect())
    };

    let response = SearchResponse {
        query,
        total_results: matches.len(),
        documents,
    };

    match format {
        OutputFormat::Human => {
            if let Some(documents) = &response.documents {
                for doc_id in documents {
                    println!("{}", colors::doc_id(doc_id));
                }
            }
            eprintln!(
                "{} matching documents for {}",
                colors::number(&response.total_results.to_string()),
                colors::label(&response.query)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
