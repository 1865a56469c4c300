//! Result list output.
//!
//! Each query's matches are written as one document ID per line to
//! `<root>/<topic dir>/<topic name>`.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::core::error::{Result, SiftError};
use crate::core::index::PostingsSet;
use crate::core::types::Topic;

/// Writes result lists below an output root
#[derive(Debug, Clone)]
pub struct ResultWriter {
    root: PathBuf,
    sort: bool,
}

impl ResultWriter {
    /// Create a writer rooted at `root`.
    ///
    /// With `sort` unset, IDs are written in set iteration order.
    pub fn new(root: impl Into<PathBuf>, sort: bool) -> Self {
        Self {
            root: root.into(),
            sort,
        }
    }

    /// Write the result list for `topic`, returning the file path
    pub fn write(&self, topic: &Topic, results: &PostingsSet) -> Result<PathBuf> {
        let path = self.root.join(topic.output_path());

        // Topic names come from the topic file; keep them below the root
        if topic.name.is_empty() || topic.name == ".." || topic.output_dir == ".." {
            return Err(SiftError::OutputError(format!(
                "Refusing to write results for topic {}/{}",
                topic.output_dir, topic.name
            )));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SiftError::OutputError(format!("Failed to create {parent:?}: {e}"))
            })?;
        }

        let file = fs::File::create(&path)
            .map_err(|e| SiftError::OutputError(format!("Failed to create {path:?}: {e}")))?;
        let mut out = BufWriter::new(file);

        if self.sort {
            for doc_id in results.sorted() {
                writeln!(out, "{doc_id}")?;
            }
        } else {
            for doc_id in results {
                writeln!(out, "{doc_id}")?;
            }
        }
        out.flush()?;

        tracing::debug!("Wrote {} results to {:?}", results.len(), path);
        Ok(path)
    }
}
