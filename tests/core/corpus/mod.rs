//! Corpus ingestion tests
//!
//! Indexing tagged corpus files from a directory tree and reading
//! topic files.

mod test_indexing;
