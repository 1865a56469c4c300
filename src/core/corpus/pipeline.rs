//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end ingestion workflow:
//! 1. Walk the corpus directory
//! 2. Read file contents
//! 3. Extract documents
//! 4. Feed every document to the index builder

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::corpus::markup::{parse_documents, parse_topics};
use crate::core::corpus::CorpusWalker;
use crate::core::error::{Result, SiftError};
use crate::core::index::{IndexBuilder, InvertedIndex};
use crate::core::types::{IndexStats, Topic};

/// Orchestrates corpus ingestion
pub struct IndexingPipeline {
    walker: CorpusWalker,
}

impl IndexingPipeline {
    /// Create a new indexing pipeline
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for corpus files to include
    /// * `exclude_patterns` - Glob patterns for corpus files to exclude
    /// * `max_file_size_mb` - Maximum file size in megabytes
    pub fn new(
        include_patterns: &[String],
        exclude_patterns: &[String],
        max_file_size_mb: usize,
    ) -> Result<Self> {
        let walker = CorpusWalker::new(include_patterns, exclude_patterns, max_file_size_mb)?;
        Ok(Self { walker })
    }

    /// Build the index for every document below `root`
    ///
    /// Errors reading individual files are logged and counted but
    /// don't stop the process.
    pub fn index_directory(&self, root: &Path) -> Result<(InvertedIndex, IndexStats)> {
        let start = Instant::now();

        tracing::info!("Starting corpus collection from {:?}", root);
        let found = self.walker.collect_files(root)?;
        let files = found.files;
        tracing::info!(
            "Found {} corpus files ({} over the size limit)",
            files.len(),
            found.oversized.len()
        );

        let mut builder = IndexBuilder::new();
        let mut stats = IndexStats {
            files_skipped: found.oversized.len(),
            ..IndexStats::default()
        };

        for (idx, file_path) in files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} files processed", idx, files.len());
            }

            match read_corpus_file(file_path) {
                Ok(contents) => {
                    let documents = parse_documents(&contents);
                    for doc in &documents {
                        builder.add_document(doc);
                    }
                    stats.files_read += 1;
                    stats.documents_indexed += documents.len();

                    tracing::debug!("Indexed {:?} ({} documents)", file_path, documents.len());
                }
                Err(e) => {
                    tracing::warn!("Failed to process {:?}: {}", file_path, e);
                    stats.files_skipped += 1;
                }
            }
        }

        stats.duplicate_documents = builder.duplicate_count();
        let index = builder.finish();
        stats.terms = index.term_count();
        stats.postings = index.posting_count();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Indexing complete: {} documents from {} files ({} skipped), \
             {} terms in {}ms",
            stats.documents_indexed,
            stats.files_read,
            stats.files_skipped,
            stats.terms,
            stats.duration_ms
        );

        Ok((index, stats))
    }
}

/// Read the topic file and return every well-formed topic with a query
///
/// Malformed topics are logged and skipped.
pub fn load_topics(path: &Path) -> Result<Vec<Topic>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        SiftError::InvalidPath(format!("Failed to read topic file {path:?}: {e}"))
    })?;

    let mut topics = Vec::new();
    for topic in parse_topics(&contents) {
        match topic {
            Ok(topic) => topics.push(topic),
            Err(e) => tracing::warn!("Skipping topic: {}", e),
        }
    }

    tracing::info!("Loaded {} topics from {:?}", topics.len(), path);
    Ok(topics)
}

fn read_corpus_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            SiftError::CorpusError(format!("Skipping non-UTF-8 file: {path:?}"))
        } else {
            SiftError::CorpusError(format!("Failed to read {path:?}: {e}"))
        }
    })
}
