//! Unified service container for sift
//!
//! Holds the configuration and the read-only index, and runs queries
//! against it.

use crate::core::config::Config;
use crate::core::corpus::{load_topics, IndexingPipeline};
use crate::core::error::{Result, SiftError};
use crate::core::index::{InvertedIndex, PostingsSet};
use crate::core::query::QueryEvaluator;
use crate::core::results::ResultWriter;
use crate::core::types::{IndexStats, QueryOutcome, RunReport, Topic};
use std::sync::Arc;
use std::time::Instant;

/// Unified services container
///
/// Cloning is cheap; all clones share the same index.
#[derive(Clone)]
pub struct Services {
    /// Read-only inverted index
    pub index: Arc<InvertedIndex>,

    /// Statistics from building the index
    pub stats: IndexStats,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Build the index for the configured corpus directory
    pub fn build(config: Config) -> Result<Self> {
        let pipeline = Self::create_pipeline(&config)?;
        let (index, stats) = pipeline.index_directory(&config.corpus.dir)?;
        Ok(Self {
            index: Arc::new(index),
            stats,
            config: Arc::new(config),
        })
    }

    /// Wrap an index that was built elsewhere
    pub fn from_index(config: Config, index: InvertedIndex) -> Self {
        let stats = IndexStats {
            documents_indexed: index.document_count(),
            terms: index.term_count(),
            postings: index.posting_count(),
            ..IndexStats::default()
        };
        Self {
            index: Arc::new(index),
            stats,
            config: Arc::new(config),
        }
    }

    /// Create an IndexingPipeline from the corpus configuration
    pub fn create_pipeline(config: &Config) -> Result<IndexingPipeline> {
        IndexingPipeline::new(
            &config.corpus.include_patterns,
            &config.corpus.exclude_patterns,
            config.corpus.max_file_size_mb,
        )
    }

    /// Evaluate a single query line
    pub fn evaluate(&self, query: &str) -> Result<PostingsSet> {
        let length = query.chars().count();
        if length > self.config.search.max_query_length {
            return Err(SiftError::InvalidQuery(format!(
                "Query is {} characters long, maximum is {}",
                length, self.config.search.max_query_length
            )));
        }

        QueryEvaluator::new(&self.index).evaluate_str(query)
    }

    /// Evaluate every topic and write its results
    ///
    /// A failing topic is logged and reported in its outcome; the
    /// remaining topics still run.
    pub fn run_topics(&self, topics: &[Topic], writer: &ResultWriter) -> Vec<QueryOutcome> {
        topics
            .iter()
            .map(|topic| {
                let label = format!("{}/{}", topic.output_dir, topic.name);
                let result = self
                    .evaluate(&topic.query)
                    .and_then(|matches| Ok((matches.len(), writer.write(topic, &matches)?)));

                match result {
                    Ok((count, path)) => {
                        tracing::info!("Topic {}: {} matches", label, count);
                        QueryOutcome {
                            topic: label,
                            query: topic.query.clone(),
                            matches: Some(count),
                            output: Some(path),
                            error: None,
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Topic {} failed: {}", label, e);
                        QueryOutcome {
                            topic: label,
                            query: topic.query.clone(),
                            matches: None,
                            output: None,
                            error: Some(e.message()),
                        }
                    }
                }
            })
            .collect()
    }

    /// Load the configured topic file and run every topic
    pub fn run_batch(&self) -> Result<RunReport> {
        let start = Instant::now();

        let topics = load_topics(&self.config.queries.file)?;
        let writer = ResultWriter::new(&self.config.output.dir, self.config.output.sort_results);
        let outcomes = self.run_topics(&topics, &writer);
        let queries_failed = outcomes.iter().filter(|o| !o.is_success()).count();

        Ok(RunReport {
            index: self.stats.clone(),
            outcomes,
            queries_failed,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
