//! Corpus ingestion module.
//!
//! Reads tagged corpus and topic files from disk and turns them into
//! documents and queries:
//!
//! - Directory walking with include/exclude patterns
//! - `<DOC>` and `<top>` element extraction
//! - Indexing pipeline orchestration

pub mod markup;
pub mod pipeline;
pub mod walker;

pub use pipeline::{load_topics, IndexingPipeline};
pub use walker::{CorpusFiles, CorpusWalker};
