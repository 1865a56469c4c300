//! Core data types for sift.
//!
//! This module defines the data structures passed between the
//! corpus adapters, the index, the evaluator and the CLI.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Opaque document identifier, supplied by the corpus
pub type DocumentId = String;

/// A single document as extracted from the corpus markup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Corpus-supplied identifier
    pub id: DocumentId,

    /// Text of every TITLE element, in document order
    pub titles: Vec<String>,

    /// Text of every HEADING element, in document order
    pub headings: Vec<String>,

    /// Text of every TEXT element, in document order
    pub texts: Vec<String>,
}

impl Document {
    /// Create a document with no fields
    pub fn new(id: impl Into<DocumentId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Add a TITLE fragment
    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.titles.push(text.into());
        self
    }

    /// Add a HEADING fragment
    pub fn with_heading(mut self, text: impl Into<String>) -> Self {
        self.headings.push(text.into());
        self
    }

    /// Add a TEXT fragment
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.texts.push(text.into());
        self
    }

    /// All titles, then all headings, then all texts.
    ///
    /// Fragments are separated by a newline so that terms at the end of
    /// one field never fuse with terms at the start of the next.
    pub fn content(&self) -> String {
        let fragments: Vec<&str> = self
            .titles
            .iter()
            .chain(&self.headings)
            .chain(&self.texts)
            .map(String::as_str)
            .collect();
        fragments.join("\n")
    }
}

/// A query topic read from the topic file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Directory part of the topic number (`DIR/NAME`)
    pub output_dir: String,

    /// File name part of the topic number
    pub name: String,

    /// Raw query line
    pub query: String,
}

impl Topic {
    /// Relative path of the result file for this topic
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir).join(&self.name)
    }
}

/// Statistics from an indexing operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of corpus files read successfully
    pub files_read: usize,

    /// Number of corpus files skipped (unreadable, non-UTF-8, over the size limit)
    pub files_skipped: usize,

    /// Number of documents added to the index
    pub documents_indexed: usize,

    /// Number of documents whose ID had already been seen
    pub duplicate_documents: usize,

    /// Distinct terms in the index
    pub terms: usize,

    /// Total (term, document) pairs in the index
    pub postings: usize,

    /// Indexing duration in milliseconds
    pub duration_ms: u64,
}

/// Outcome of a single query in a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutcome {
    /// Topic the query came from
    pub topic: String,

    /// Raw query line
    pub query: String,

    /// Number of matching documents, absent on failure
    pub matches: Option<usize>,

    /// Where the result list was written, absent on failure
    pub output: Option<PathBuf>,

    /// Failure message, if the query failed
    pub error: Option<String>,
}

impl QueryOutcome {
    /// Whether the query produced a result file
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub index: IndexStats,
    pub outcomes: Vec<QueryOutcome>,
    pub queries_failed: usize,
    pub duration_ms: u64,
}
