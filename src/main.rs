//! # chatmerge CLI
//!
//! Consolidates `messages*.html` export files from one directory into
//! `chat_export.json` and `chat_export_pretty.json`.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use chatmerge::cli::Args;
use chatmerge::discover::discover_inputs;
use chatmerge::extract::extract_file;
use chatmerge::{ChatmergeError, ExportBundle, MessageRecord};

/// Preview text is cut at this many characters.
const PREVIEW_TEXT_LIMIT: usize = 50;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatmergeError> {
    let args = <Args as ClapParser>::parse();
    let dir = Path::new(&args.dir);

    println!("📦 chatmerge v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let files = discover_inputs(dir)?;
    if files.is_empty() {
        println!("No messages*.html files found in {}", dir.display());
        return Ok(());
    }
    println!("Found {} file(s): {}", files.len(), files.join(", "));

    // One bad file never aborts the run: log it and keep going.
    let mut merged: Vec<MessageRecord> = Vec::new();
    for name in &files {
        println!("⏳ Processing {name}...");
        match extract_file(&dir.join(name)) {
            Ok(records) => {
                println!("   Extracted {} message(s)", records.len());
                merged.extend(records);
            }
            Err(e) => eprintln!("   ⚠️  Skipping {name}: {e}"),
        }
    }

    let bundle = ExportBundle::new(files, merged);

    let compact_path = dir.join(&args.output);
    let pretty_path = dir.join(&args.pretty_output);
    bundle.write(&compact_path, &pretty_path)?;

    println!();
    println!("✅ Extracted {} message(s) in total", bundle.total_messages);
    println!("💾 Saved to: {}", compact_path.display());
    println!("📖 Human-readable version: {}", pretty_path.display());

    if !bundle.messages.is_empty() {
        println!();
        println!("First {} message(s):", bundle.messages.len().min(3));
        for (i, msg) in bundle.messages.iter().take(3).enumerate() {
            println!("  {}. {}", i + 1, preview_line(msg));
        }
    }

    Ok(())
}

/// One-line operator preview: `[timestamp] sender: text...`.
///
/// Text is cut at [`PREVIEW_TEXT_LIMIT`] characters and always carries a
/// trailing ellipsis; a message with no (or empty) text shows a media
/// placeholder instead.
fn preview_line(msg: &MessageRecord) -> String {
    let timestamp = msg.timestamp.as_deref().unwrap_or("no timestamp");
    let sender = msg.sender.as_deref().unwrap_or("unknown");
    let text = match msg.text.as_deref() {
        Some(t) if !t.is_empty() => truncate(t, PREVIEW_TEXT_LIMIT),
        _ => "(media/no text)".to_string(),
    };
    format!("[{timestamp}] {sender}: {text}")
}

/// First `limit` characters plus an ellipsis, char-boundary safe.
fn truncate(text: &str, limit: usize) -> String {
    let cut: String = text.chars().take(limit).collect();
    format!("{cut}...")
}
