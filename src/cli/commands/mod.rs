//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command.

pub mod completions;
pub mod config;
pub mod index;
pub mod run;
pub mod search;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use index::IndexArgs;
pub use run::RunArgs;
pub use search::SearchArgs;

use crate::core::config::Config;
use std::path::PathBuf;

/// Apply a command-line corpus directory over the configured one
pub(crate) fn with_corpus(mut config: Config, corpus: Option<PathBuf>) -> Config {
    if let Some(dir) = corpus {
        config.corpus.dir = dir;
    }
    config
}
