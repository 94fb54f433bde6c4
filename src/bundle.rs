//! The merged export bundle and its JSON encodings.
//!
//! [`ExportBundle`] is the single document the whole run produces: the
//! processed file names, the total record count, and every record merged
//! across files, globally ordered by timestamp.
//!
//! The global sort key is the timestamp *string* (missing sorts as the
//! empty string, i.e. first). For records whose source date failed to
//! parse this is lexicographic rather than chronological; that quirk is
//! part of the observed output contract and is kept.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::MessageRecord;

/// The consolidated result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportBundle {
    /// Input file names in processing (numeric) order.
    pub source_files: Vec<String>,

    /// Number of records in `messages`.
    pub total_messages: usize,

    /// All extracted records, ascending by timestamp string.
    pub messages: Vec<MessageRecord>,
}

impl ExportBundle {
    /// Builds a bundle from the processed file list and the merged records.
    ///
    /// Records are sorted here; the count is derived after sorting.
    pub fn new(source_files: Vec<String>, mut messages: Vec<MessageRecord>) -> Self {
        sort_by_timestamp(&mut messages);
        Self {
            source_files,
            total_messages: messages.len(),
            messages,
        }
    }

    /// Compact JSON: no whitespace, non-ASCII characters kept literal.
    pub fn to_compact_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Human-readable JSON, 2-space indented. Same data as the compact form.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes both encodings, compact first.
    ///
    /// Called once, after the full merge, so the operator never observes a
    /// partially written pair.
    pub fn write(&self, compact_path: &Path, pretty_path: &Path) -> Result<()> {
        fs::write(compact_path, self.to_compact_json()?)?;
        fs::write(pretty_path, self.to_pretty_json()?)?;
        Ok(())
    }
}

/// Stable sort ascending by timestamp string; missing timestamps sort
/// first. Ties keep their pre-sort order (file order, then document order).
pub fn sort_by_timestamp(messages: &mut [MessageRecord]) {
    messages.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
}

fn sort_key(message: &MessageRecord) -> &str {
    message.timestamp.as_deref().unwrap_or("")
}
