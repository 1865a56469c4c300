//! Term extraction from raw field text.
//!
//! A term is a maximal run of alphanumeric characters. Every other
//! character is a separator, and runs of separators never produce
//! empty terms. Terms keep their original casing.
//!
//! Scanning goes through `char_indices()`, so term boundaries always
//! fall on character boundaries and the returned terms borrow
//! directly from the input.
//!
//! # Example
//!
//! ```
//! use sift::core::tokenizer::tokenize;
//!
//! let terms: Vec<&str> = tokenize("a1 b-2!!c3").collect();
//! assert_eq!(terms, vec!["a1", "b", "2", "c3"]);
//! ```

use std::iter::FusedIterator;
use std::str::CharIndices;

/// Tokenize `text` into a lazy sequence of terms.
pub fn tokenize(text: &str) -> Terms<'_> {
    Terms {
        text,
        chars: text.char_indices(),
        start: None,
    }
}

/// Returns true if `c` may appear inside a term.
#[inline]
pub fn is_term_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Lazy, single-pass iterator over the terms of a string.
///
/// Created by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Terms<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    /// Byte offset where the current candidate term started
    start: Option<usize>,
}

impl<'a> Iterator for Terms<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        for (offset, c) in self.chars.by_ref() {
            if is_term_char(c) {
                if self.start.is_none() {
                    self.start = Some(offset);
                }
            } else if let Some(start) = self.start.take() {
                return Some(&self.text[start..offset]);
            }
        }

        // End of input flushes the last candidate
        self.start
            .take()
            .map(|start| &self.text[start..])
            .filter(|term| !term.is_empty())
    }
}

impl FusedIterator for Terms<'_> {}
