//! Term to postings mapping and its builder.

use crate::core::index::PostingsSet;
use crate::core::tokenizer::tokenize;
use crate::core::types::{Document, DocumentId};
use std::collections::{HashMap, HashSet};

/// Read-only inverted index.
///
/// Built once through [`IndexBuilder`] (or [`InvertedIndex::build`]) and
/// never modified afterwards. The index owns every postings set and only
/// hands out shared references, so it can be queried from any number of
/// evaluations at once.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, PostingsSet>,
    documents: usize,
}

impl InvertedIndex {
    /// Build an index from a sequence of documents
    pub fn build<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        let mut builder = IndexBuilder::new();
        for doc in documents {
            builder.add_document(&doc);
        }
        builder.finish()
    }

    /// Postings for `term`, if it occurs anywhere in the corpus
    pub fn postings(&self, term: &str) -> Option<&PostingsSet> {
        self.terms.get(term)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of distinct documents that were added
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Total number of (term, document) pairs
    pub fn posting_count(&self) -> usize {
        self.terms.values().map(PostingsSet::len).sum()
    }

    /// Iterate all terms with their postings (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingsSet)> {
        self.terms.iter().map(|(term, postings)| (term.as_str(), postings))
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Accumulates documents into an [`InvertedIndex`].
///
/// Not synchronized: documents must be added from a single thread.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    terms: HashMap<String, PostingsSet>,
    seen: HashSet<DocumentId>,
    duplicates: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize a document's fields and record its ID under every term.
    ///
    /// Returns false if the document ID was already added. Duplicate IDs
    /// are not rejected: their terms are merged into the same postings.
    pub fn add_document(&mut self, doc: &Document) -> bool {
        let first_time = self.seen.insert(doc.id.clone());
        if !first_time {
            self.duplicates += 1;
            tracing::warn!("Duplicate document ID {:?}, merging its terms", doc.id);
        }

        let content = doc.content();
        self.add_text(&doc.id, &content);
        first_time
    }

    /// Record `doc_id` under every term of `text`
    pub fn add_text(&mut self, doc_id: &str, text: &str) {
        for term in tokenize(text) {
            match self.terms.get_mut(term) {
                Some(postings) => {
                    if !postings.contains(doc_id) {
                        postings.insert(doc_id);
                    }
                }
                None => {
                    let mut postings = PostingsSet::new();
                    postings.insert(doc_id);
                    self.terms.insert(term.to_string(), postings);
                }
            }
        }
    }

    /// Number of documents whose ID had already been added
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    /// Freeze the builder into a read-only index
    pub fn finish(self) -> InvertedIndex {
        InvertedIndex {
            terms: self.terms,
            documents: self.seen.len(),
        }
    }
}
