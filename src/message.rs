//! Record types for extracted chat messages.
//!
//! This module provides [`MessageRecord`], the structured representation of a
//! single message recovered from an export document, and [`MediaDescriptor`],
//! the summary of a non-text attachment.
//!
//! Every field of a record is optional; the extractor fills in whatever the
//! markup actually carries. Serialization omits absent fields, so the JSON
//! output contains exactly the fields that were found.
//!
//! # Example
//!
//! ```
//! use chatmerge::message::MessageRecord;
//!
//! let msg = MessageRecord::new()
//!     .with_sender("Alice")
//!     .with_text("Hello!")
//!     .with_reply_to(42);
//!
//! assert!(msg.has_content());
//! let json = serde_json::to_string(&msg)?;
//! assert!(!json.contains("media"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// A single message extracted from an export document.
///
/// Field names follow the export schema: the sender serializes as `from`
/// and the timestamp is a string, either ISO-8601 (when the source date
/// matched the expected `DD.MM.YYYY HH:MM:SS` layout) or the raw source
/// string (when it did not).
///
/// A record is only worth keeping when it has text or media; see
/// [`has_content`](Self::has_content).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Display name of the message author.
    #[serde(rename = "from")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub sender: Option<String>,

    /// When the message was sent.
    ///
    /// ISO-8601 (`2024-01-15T10:30:00`) when the source date parsed, the
    /// unmodified source string otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Trimmed text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub text: Option<String>,

    /// Attachment summary, present when the message carries a media block.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub media: Option<MediaDescriptor>,

    /// ID of the message this is replying to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub reply_to: Option<u64>,

    /// Reaction emoji attached to the message, in document order.
    ///
    /// Omitted entirely when no reactions were found; never an empty list.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub reactions: Option<Vec<String>>,
}

impl MessageRecord {
    /// Creates an empty record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the sender name.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Builder method to set the timestamp string.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Builder method to set the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder method to set the media descriptor.
    #[must_use]
    pub fn with_media(mut self, media: MediaDescriptor) -> Self {
        self.media = Some(media);
        self
    }

    /// Builder method to set the reply reference.
    #[must_use]
    pub fn with_reply_to(mut self, reply_id: u64) -> Self {
        self.reply_to = Some(reply_id);
        self
    }

    /// Builder method to set the reactions list.
    #[must_use]
    pub fn with_reactions(mut self, reactions: Vec<String>) -> Self {
        self.reactions = Some(reactions);
        self
    }

    /// Returns `true` if the record carries text or media.
    ///
    /// Records failing this check are dropped by the extractor: a message
    /// node with neither is pure metadata.
    pub fn has_content(&self) -> bool {
        self.text.is_some() || self.media.is_some()
    }
}

/// Structured summary of a non-text attachment (photo, video, voice
/// message, sticker, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Lower-cased attachment kind, `"unknown"` when the media block has
    /// no title node.
    #[serde(rename = "type")]
    pub kind: String,

    /// Free-form details from the status node (duration, file size, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub details: Option<String>,
}

impl MediaDescriptor {
    /// Creates a descriptor with the given kind and no details.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            details: None,
        }
    }

    /// Builder method to set the details string.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Default for MediaDescriptor {
    fn default() -> Self {
        Self::new("unknown")
    }
}
