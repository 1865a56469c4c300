//! Run command - evaluate every topic and write result lists

use crate::cli::commands::with_corpus;
use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Corpus directory (defaults to the configured corpus.dir)
    #[arg(long, short = 'c')]
    pub corpus: Option<PathBuf>,

    /// Topic file (defaults to the configured queries.file)
    #[arg(long, short = 't')]
    pub queries: Option<PathBuf>,

    /// Output root for result files (defaults to output.dir)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Sort document IDs in result files
    #[arg(long)]
    pub sort: bool,

    /// Exit with an error if any topic fails
    #[arg(long)]
    pub strict: bool,
}

/// Execute the run command
pub fn execute(
    args: RunArgs,
    config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = with_corpus(config, args.corpus);
    if let Some(queries) = args.queries {
        config.queries.file = queries;
    }
    if let Some(output) = args.output {
        config.output.dir = output;
    }
    if args.sort {
        config.output.sort_results = true;
    }

    let services = Services::build(config)?;
    let report = services.run_batch()?;

    match format {
        OutputFormat::Human => {
            for outcome in &report.outcomes {
                match (&outcome.error, outcome.matches) {
                    (None, Some(count)) => println!(
                        "{} {} {}",
                        colors::success("ok  "),
                        colors::label(&outcome.topic),
                        colors::dim(&format!("({count} matches)"))
                    ),
                    (Some(error), _) => println!(
                        "{} {} {}",
                        colors::error("fail"),
                        colors::label(&outcome.topic),
                        colors::dim(error)
                    ),
                    (None, None) => {}
                }
            }
            println!(
                "Ran {} topics ({} failed) over {} documents in {}",
                colors::number(&report.outcomes.len().to_string()),
                colors::number(&report.queries_failed.to_string()),
                colors::number(&report.index.documents_indexed.to_string()),
                colors::number(&format_duration(
                    (report.index.duration_ms + report.duration_ms) as f64 / 1000.0
                ))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if args.strict && report.queries_failed > 0 {
        return Err(format!("{} of {} topics failed", report.queries_failed, report.outcomes.len()).into());
    }

    Ok(())
}
