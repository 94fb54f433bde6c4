//! Message extraction from export documents.
//!
//! Telegram Desktop lays each message out as a `div.message` with a known
//! set of class-tagged descendants: `from_name`, `date` (with a
//! human-readable `title` attribute), `text`, `media` (with nested `title`
//! and `status`), `reply_to` (with an anchor whose `onclick` calls
//! `GoToMessage(<id>)`), and `reaction`/`emoji`. This module walks that
//! layout and recovers a [`MessageRecord`] per message node.
//!
//! Extraction is deliberately forgiving: missing nodes leave fields absent,
//! a timestamp that does not match the expected `DD.MM.YYYY HH:MM:SS`
//! layout is stored raw, and nothing a single message contains can fail
//! the document. The only reportable error is an unreadable input file.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{ChatmergeError, Result};
use crate::message::{MediaDescriptor, MessageRecord};

/// Date layout used by the export's `title` attribute.
const TITLE_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// ISO-8601 layout stored in records (no zone: the export carries none).
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

static MESSAGE: LazyLock<Selector> = LazyLock::new(|| selector(".message"));
static FROM_NAME: LazyLock<Selector> = LazyLock::new(|| selector(".from_name"));
static DATE: LazyLock<Selector> = LazyLock::new(|| selector(".date"));
static TEXT: LazyLock<Selector> = LazyLock::new(|| selector(".text"));
static MEDIA: LazyLock<Selector> = LazyLock::new(|| selector(".media"));
static MEDIA_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".title"));
static MEDIA_STATUS: LazyLock<Selector> = LazyLock::new(|| selector(".status"));
static REPLY_TO: LazyLock<Selector> = LazyLock::new(|| selector(".reply_to"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static REACTION: LazyLock<Selector> = LazyLock::new(|| selector(".reaction"));
static EMOJI: LazyLock<Selector> = LazyLock::new(|| selector(".emoji"));

static GOTO_MESSAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GoToMessage\((\d+)\)").unwrap());

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Reads and extracts a single export file.
///
/// A read failure is reported as [`ChatmergeError::Parse`] carrying the
/// path, so batch callers can log and skip the file. The markup itself
/// cannot fail: the parser is tolerant and extraction is best-effort.
pub fn extract_file(path: &Path) -> Result<Vec<MessageRecord>> {
    let html = fs::read_to_string(path).map_err(|e| ChatmergeError::parse(path, e))?;
    Ok(extract_str(&html))
}

/// Parses HTML source and extracts its messages.
pub fn extract_str(html: &str) -> Vec<MessageRecord> {
    extract(&Html::parse_document(html))
}

/// Extracts all message records from a parsed document, in document order.
///
/// Service messages (date separators, pinned-message notices, ...) are
/// skipped, and so is any message carrying neither text nor media.
pub fn extract(document: &Html) -> Vec<MessageRecord> {
    document
        .select(&MESSAGE)
        .filter(|node| !node.value().classes().any(|c| c == "service"))
        .map(extract_message)
        .filter(MessageRecord::has_content)
        .collect()
}

fn extract_message(node: ElementRef<'_>) -> MessageRecord {
    let mut record = MessageRecord::new();

    if let Some(from) = node.select(&FROM_NAME).next() {
        record.sender = Some(element_text(&from));
    }

    if let Some(title) = node.select(&DATE).next().and_then(|d| d.value().attr("title")) {
        record.timestamp = Some(normalize_timestamp(title));
    }

    if let Some(text) = node.select(&TEXT).next() {
        record.text = Some(element_text(&text));
    }

    if let Some(media) = node.select(&MEDIA).next() {
        record.media = Some(extract_media(media));
    }

    record.reply_to = node
        .select(&REPLY_TO)
        .next()
        .and_then(|reply| reply.select(&ANCHOR).next())
        .and_then(|link| link.value().attr("onclick"))
        .and_then(parse_reply_target);

    let reactions: Vec<String> = node
        .select(&REACTION)
        .filter_map(|reaction| reaction.select(&EMOJI).next())
        .map(|emoji| element_text(&emoji))
        .collect();
    if !reactions.is_empty() {
        record.reactions = Some(reactions);
    }

    record
}

fn extract_media(node: ElementRef<'_>) -> MediaDescriptor {
    let mut media = node
        .select(&MEDIA_TITLE)
        .next()
        .map_or_else(MediaDescriptor::default, |title| {
            MediaDescriptor::new(element_text(&title).to_lowercase())
        });

    if let Some(status) = node.select(&MEDIA_STATUS).next() {
        media.details = Some(element_text(&status));
    }

    media
}

/// Converts an export date string to ISO-8601, falling back to the raw
/// (trimmed) string when it does not match `DD.MM.YYYY HH:MM:SS`.
///
/// The fallback keeps the field populated instead of raising: an odd date
/// is still more useful than no date.
pub fn normalize_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    match NaiveDateTime::parse_from_str(trimmed, TITLE_DATE_FORMAT) {
        Ok(dt) => dt.format(ISO_FORMAT).to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// Recovers a reply-target id from a navigation click handler.
///
/// The export encodes reply links as `onclick="return GoToMessage(123)"`.
/// Anything that does not match `GoToMessage(<digits>)` yields `None`.
pub fn parse_reply_target(onclick: &str) -> Option<u64> {
    GOTO_MESSAGE
        .captures(onclick)
        .and_then(|caps| caps[1].parse().ok())
}

/// Concatenated, trimmed text content of an element's descendants.
fn element_text(node: &ElementRef<'_>) -> String {
    node.text().collect::<String>().trim().to_string()
}
