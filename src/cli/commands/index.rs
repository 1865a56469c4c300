//! Index command - build the index for a corpus and report statistics

use crate::cli::commands::with_corpus;
use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the index command
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Corpus directory (defaults to the configured corpus.dir)
    pub corpus: Option<PathBuf>,

    /// Also print the N most widespread terms
    #[arg(long, default_value = "0")]
    pub top_terms: usize,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// A term and the number of documents it occurs in
#[derive(Debug, Serialize)]
pub struct TermFrequency {
    pub term: String,
    pub documents: usize,
}

/// Indexing result response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub corpus: String,
    pub files_read: usize,
    pub files_skipped: usize,
    pub documents_indexed: usize,
    pub duplicate_documents: usize,
    pub terms: usize,
    pub postings: usize,
    pub duration_secs: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_terms: Vec<TermFrequency>,
}

/// Execute the index command
pub fn execute(
    args: IndexArgs,
    config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = with_corpus(config, args.corpus);
    let corpus = config.corpus.dir.display().to_string();

    if !args.quiet && format == OutputFormat::Human {
        eprintln!("Indexing {}...", colors::file_path(&corpus));
    }

    let services = Services::build(config)?;
    let stats = &services.stats;

    let mut top_terms: Vec<TermFrequency> = services
        .index
        .iter()
        .map(|(term, postings)| TermFrequency {
            term: term.to_string(),
            documents: postings.len(),
        })
        .collect();
    top_terms.sort_by(|a, b| b.documents.cmp(&a.documents).then_with(|| a.term.cmp(&b.term)));
    top_terms.truncate(args.top_terms);

    let response = IndexResponse {
        corpus,
        files_read: stats.files_read,
        files_skipped: stats.files_skipped,
        documents_indexed: stats.documents_indexed,
        duplicate_documents: stats.duplicate_documents,
        terms: stats.terms,
        postings: stats.postings,
        duration_secs: stats.duration_ms as f64 / 1000.0,
        top_terms,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} documents from {} files in {}",
                colors::success("Indexed"),
                colors::number(&response.documents_indexed.to_string()),
                colors::number(&response.files_read.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            println!(
                "Terms: {}  Postings: {}",
                colors::number(&response.terms.to_string()),
                colors::number(&response.postings.to_string())
            );
            if response.files_skipped > 0 {
                println!(
                    "{} {} files skipped (unreadable or over the size limit)",
                    colors::warning("Warning:"),
                    response.files_skipped
                );
            }
            if response.duplicate_documents > 0 {
                println!(
                    "{} {} documents reused an existing DOCID",
                    colors::warning("Warning:"),
                    response.duplicate_documents
                );
            }
            for (rank, tf) in response.top_terms.iter().enumerate() {
                println!(
                    "  {} {} {}",
                    colors::rank(&format!("{:>3}.", rank + 1)),
                    colors::term(&tf.term),
                    colors::dim(&format!("({} docs)", tf.documents))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
