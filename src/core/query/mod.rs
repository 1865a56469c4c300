//! Boolean query module.
//!
//! Parses whitespace-separated query lines into token streams and
//! evaluates them against an [`InvertedIndex`](crate::core::index::InvertedIndex).

pub mod evaluator;
pub mod token;

pub use evaluator::QueryEvaluator;
pub use token::{parse_query, Operator, QueryToken};
