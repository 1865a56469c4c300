//! Corpus directory walker with pattern-based filtering.
//!
//! Traverses the corpus directory and filters files using glob
//! patterns. Walk errors (permission denied, etc.) are logged and
//! skipped.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{Result, SiftError};

/// Files found below a corpus root
#[derive(Debug, Default)]
pub struct CorpusFiles {
    /// Files to ingest, sorted by path
    pub files: Vec<PathBuf>,

    /// Files that matched the patterns but exceed the size limit
    pub oversized: Vec<PathBuf>,
}

/// Corpus walker with pattern-based filtering
pub struct CorpusWalker {
    /// Patterns to include (e.g., "*.xml")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "*.dtd")
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl CorpusWalker {
    /// Create a new corpus walker
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for files to include
    ///   (empty includes every file)
    /// * `exclude_patterns` - Glob patterns for files to exclude
    /// * `max_file_size_mb` - Maximum file size in megabytes
    pub fn new(
        include_patterns: &[String],
        exclude_patterns: &[String],
        max_file_size_mb: usize,
    ) -> Result<Self> {
        Ok(Self {
            include_patterns: compile_patterns(include_patterns, "include")?,
            exclude_patterns: compile_patterns(exclude_patterns, "exclude")?,
            max_file_size_bytes: (max_file_size_mb as u64).saturating_mul(1024 * 1024),
        })
    }

    /// Collect all matching files below `root`, sorted by path
    ///
    /// Sorting keeps ingestion order (and therefore duplicate-ID
    /// warnings) stable across platforms. Matching files over the size
    /// limit are returned separately so callers can report them.
    pub fn collect_files(&self, root: &Path) -> Result<CorpusFiles> {
        if !root.is_dir() {
            return Err(SiftError::InvalidPath(format!(
                "Corpus directory {root:?} does not exist or is not a directory"
            )));
        }

        let mut found = CorpusFiles::default();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();

                    if !self.matches_patterns(path) {
                        tracing::debug!("Skipping filtered file: {:?}", path);
                        continue;
                    }

                    match entry.metadata() {
                        Ok(metadata) if metadata.len() > self.max_file_size_bytes => {
                            tracing::warn!(
                                "Skipping large corpus file: {:?} ({} bytes)",
                                path,
                                metadata.len()
                            );
                            found.oversized.push(path.to_path_buf());
                        }
                        _ => found.files.push(path.to_path_buf()),
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        found.files.sort();
        found.oversized.sort();
        Ok(found)
    }

    /// Skip hidden directories below the root
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') && entry.file_type().is_dir() {
                return false;
            }
        }

        true
    }

    /// Check a file path against the include/exclude patterns
    fn matches_patterns(&self, path: &Path) -> bool {
        let path_str = match path.to_str() {
            Some(s) => s,
            None => return false,
        };
        let file_name = path.file_name().and_then(|f| f.to_str());

        let matches = |p: &Pattern| p.matches(path_str) || file_name.is_some_and(|f| p.matches(f));

        let included = self.include_patterns.is_empty() || self.include_patterns.iter().any(matches);

        included && !self.exclude_patterns.iter().any(matches)
    }
}

fn compile_patterns(patterns: &[String], kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .map_err(|e| SiftError::ConfigError(format!("Invalid {kind} pattern '{p}': {e}")))
        })
        .collect()
}
