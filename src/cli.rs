//! Command-line interface definition using clap.
//!
//! The tool is designed to run with zero arguments from inside an export
//! directory; every flag only overrides a default.

use clap::Parser;

/// Merge Telegram Desktop HTML chat exports into a single chronologically
/// ordered JSON document.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatmerge")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatmerge
    chatmerge --dir ~/Downloads/Telegram/ChatExport_2024-01-15
    chatmerge -d export -o merged.json -p merged_pretty.json")]
pub struct Args {
    /// Directory containing messages*.html export files
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// Compact JSON output file name, relative to the input directory
    #[arg(short, long, default_value = "chat_export.json")]
    pub output: String,

    /// Pretty-printed JSON output file name, relative to the input directory
    #[arg(short, long, default_value = "chat_export_pretty.json")]
    pub pretty_output: String,
}
