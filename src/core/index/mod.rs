//! Inverted index module.
//!
//! Maps every term of the corpus to the set of documents it occurs
//! in. Key properties:
//!
//! - A document appears in a term's postings iff the term occurs in
//!   the document's TITLE, HEADING or TEXT content
//! - Terms that occur nowhere have no entry
//! - The index is built once and is read-only afterwards

pub mod inverted;
pub mod postings;

pub use inverted::{IndexBuilder, InvertedIndex};
pub use postings::PostingsSet;
