//! sift - Boolean retrieval over tagged document corpora
//!
//! Builds a term-to-document inverted index from a corpus of
//! `<DOC>` records and answers boolean queries (`AND`, `OR`, `NOT`)
//! against it, returning the set of matching document IDs.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - tokenizer, index (builder + postings)
//!   - query (token stream + two-stack evaluator)
//!   - corpus (file walking, markup extraction, pipeline)
//!   - results, config, error, types, xdg, services
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use sift::core::index::InvertedIndex;
//! use sift::core::query::QueryEvaluator;
//! use sift::core::types::Document;
//!
//! let index = InvertedIndex::build(vec![
//!     Document::new("D1").with_text("cat dog"),
//!     Document::new("D2").with_text("dog bird"),
//! ]);
//!
//! let matches = QueryEvaluator::new(&index).evaluate_str("cat OR bird").unwrap();
//! assert_eq!(matches.sorted(), vec!["D1", "D2"]);
//! ```

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Result, SiftError};
pub use crate::core::index::{InvertedIndex, PostingsSet};
pub use crate::core::query::QueryEvaluator;
pub use crate::core::services::Services;
pub use crate::core::types::*;
