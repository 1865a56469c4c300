//! CLI adapter for sift
//!
//! Provides the command-line interface over `core/`.
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              |  (clap adapter)  |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// sift - boolean retrieval over tagged corpora
///
/// Builds an inverted index from `<DOC>` records and evaluates
/// AND / OR / NOT queries against it.
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(version)]
#[command(about = "Boolean retrieval over tagged document corpora", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the index for a corpus and report statistics
    Index(commands::IndexArgs),

    /// Evaluate a single boolean query against a corpus
    Search(commands::SearchArgs),

    /// Evaluate every topic of a topic file and write result lists
    Run(commands::RunArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  sift completions bash > ~/.local/share/bash-completion/completions/sift
    ///   zsh:   sift completions zsh > ~/.zfunc/_sift
    ///   fish:  sift completions fish > ~/.config/fish/completions/sift.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Completions don't need configuration
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    match cli.command {
        Commands::Index(args) => commands::index::execute(args, config, cli.format),
        Commands::Search(args) => commands::search::execute(args, config, cli.format),
        Commands::Run(args) => commands::run::execute(args, config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
