//! # Chatmerge
//!
//! A Rust library and CLI for consolidating Telegram Desktop HTML chat
//! exports into a single chronologically ordered JSON document.
//!
//! ## Overview
//!
//! Telegram Desktop exports a chat as one or more semi-structured HTML
//! files (`messages.html`, `messages2.html`, ...). Chatmerge walks the
//! class-tagged markup of each file, recovers structured message records
//! (sender, timestamp, text, media metadata, reply links, reactions),
//! merges them across files, and serializes the result twice: a compact
//! `chat_export.json` and a 2-space-indented `chat_export_pretty.json`.
//!
//! Extraction is best-effort by design. A timestamp that does not match
//! the export's `DD.MM.YYYY HH:MM:SS` layout is stored raw, missing
//! substructure just leaves fields absent, and one unreadable file never
//! aborts the batch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use chatmerge::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let dir = Path::new(".");
//!
//!     let files = discover_inputs(dir)?;
//!     let mut merged = Vec::new();
//!     for name in &files {
//!         merged.extend(extract_file(&dir.join(name))?);
//!     }
//!
//!     let bundle = ExportBundle::new(files, merged);
//!     bundle.write(
//!         Path::new("chat_export.json"),
//!         Path::new("chat_export_pretty.json"),
//!     )?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`extract`] — per-document extraction ([`extract`](extract::extract),
//!   [`extract_file`](extract::extract_file))
//! - [`discover`] — input discovery and numeric ordering
//!   ([`discover_inputs`](discover::discover_inputs))
//! - [`bundle`] — [`ExportBundle`] and its JSON encodings
//! - [`message`] — [`MessageRecord`] and
//!   [`MediaDescriptor`](message::MediaDescriptor)
//! - [`cli`] — clap argument struct for the binary
//! - [`error`] — [`ChatmergeError`] and [`Result`]

pub mod bundle;
pub mod cli;
pub mod discover;
pub mod error;
pub mod extract;
pub mod message;

// Re-export the main types at the crate root for convenience
pub use bundle::ExportBundle;
pub use error::{ChatmergeError, Result};
pub use message::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatmerge::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bundle::{ExportBundle, sort_by_timestamp};
    pub use crate::discover::{discover_inputs, input_number};
    pub use crate::error::{ChatmergeError, Result};
    pub use crate::extract::{extract, extract_file, extract_str};
    pub use crate::message::{MediaDescriptor, MessageRecord};
}
