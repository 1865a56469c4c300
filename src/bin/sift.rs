//! sift - boolean retrieval from the command line
//!
//! # Examples
//!
//! ```bash
//! # Index a corpus and print statistics
//! sift index ./documents
//!
//! # Evaluate one query
//! sift search --corpus ./documents cat AND NOT dog
//!
//! # Evaluate every topic and write result files
//! sift run --corpus ./documents --queries topics.xml --output results
//! ```

use clap::Parser;
use sift::cli::{run, Cli, OutputFormat};
use sift::cli::output::print_error;
use sift::SiftError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: u8, format: OutputFormat) {
    let default_filter = match verbose {
        0 => "sift=warn",
        1 => "sift=info",
        _ => "sift=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Logs always go to stderr; stdout carries results
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        OutputFormat::Human => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init(),
        OutputFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.format);

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        // 2 for bad input (query, topic, path, config), 1 for everything else
        let code = match e.downcast_ref::<SiftError>() {
            Some(err) if err.is_bad_request() => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
