//! Core domain logic (protocol-agnostic)
//!
//! This module contains all indexing and query logic, independent
//! of how it is driven (CLI, tests, benches).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **tokenizer**: Term extraction
//! - **index**: Postings sets and the inverted index
//! - **query**: Boolean query tokens and evaluation
//! - **corpus**: Corpus walking, markup extraction, ingestion pipeline
//! - **results**: Result list output
//! - **services**: Unified service container

pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod query;
pub mod results;
pub mod services;
pub mod tokenizer;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SiftError};
pub use services::Services;
