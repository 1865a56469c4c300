//! Configuration management for sift.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SiftError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub queries: QueriesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Corpus ingestion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Directory holding the tagged corpus files
    #[serde(default = "default_corpus_dir")]
    pub dir: PathBuf,

    /// File patterns to include (glob syntax, empty = all files)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Maximum corpus file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Topic file configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueriesConfig {
    /// Topic file holding `<top>` elements
    #[serde(default = "default_queries_file")]
    pub file: PathBuf,
}

/// Result output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Root directory for result files
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Sort document IDs before writing
    #[serde(default)]
    pub sort_results: bool,
}

/// Query evaluation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum query length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

// Default value functions
fn default_corpus_dir() -> PathBuf {
    PathBuf::from("documents")
}

fn default_exclude_patterns() -> Vec<String> {
    vec!["*.dtd".to_string()]
}

fn default_max_file_size() -> usize {
    64
}

fn default_queries_file() -> PathBuf {
    PathBuf::from("queries.xml")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_query_length() -> usize {
    4096
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dir: default_corpus_dir(),
            include_patterns: Vec::new(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for QueriesConfig {
    fn default() -> Self {
        Self {
            file: default_queries_file(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            sort_results: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_query_length: default_max_query_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SiftError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        xdg.log_paths();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File priority order:
    /// 1. `SIFT_CONFIG` env var
    /// 2. XDG config file (~/.config/sift/config.toml)
    /// 3. ./sift.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SIFT_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("sift.toml").exists() {
                Self::from_file("sift.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(dir) = env::var("SIFT_CORPUS_DIR") {
            self.corpus.dir = PathBuf::from(dir);
        }
        if let Ok(max_size) = env::var("SIFT_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.corpus.max_file_size_mb = size;
            }
        }

        if let Ok(file) = env::var("SIFT_QUERIES_FILE") {
            self.queries.file = PathBuf::from(file);
        }

        if let Ok(dir) = env::var("SIFT_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }
        if let Ok(sort) = env::var("SIFT_SORT_RESULTS") {
            if let Ok(s) = sort.parse() {
                self.output.sort_results = s;
            }
        }

        if let Ok(max_query_len) = env::var("SIFT_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.corpus.max_file_size_mb == 0 {
            return Err(SiftError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.corpus.dir.as_os_str().is_empty() {
            return Err(SiftError::ConfigError(
                "Corpus directory cannot be empty".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(SiftError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Corpus dir: {:?}", self.corpus.dir);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.corpus.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.corpus.exclude_patterns.len()
        );
        tracing::info!("  Max file size: {} MB", self.corpus.max_file_size_mb);
        tracing::info!("  Topic file: {:?}", self.queries.file);
        tracing::info!("  Output dir: {:?}", self.output.dir);
        tracing::info!("  Sort results: {}", self.output.sort_results);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
    }
}
