//! Input discovery and ordering.
//!
//! Telegram Desktop splits large exports into `messages.html`,
//! `messages2.html`, `messages3.html`, ... in one directory. Discovery is
//! non-recursive and matches on that naming convention; ordering is by the
//! embedded number, not lexicographic, so `messages10.html` comes after
//! `messages2.html`.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Export file names start with this prefix...
pub const INPUT_PREFIX: &str = "messages";

/// ...and end with this extension.
pub const INPUT_EXTENSION: &str = ".html";

static INPUT_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"messages(\d+)").unwrap());

/// Lists export files in `dir` (non-recursive), ordered for processing.
///
/// Returns bare file names, ascending by [`input_number`]. The sort is
/// stable, so files without a number (`messages.html`, effectively 0)
/// keep their discovery order among themselves.
pub fn discover_inputs(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name.starts_with(INPUT_PREFIX) && name.ends_with(INPUT_EXTENSION) {
            names.push(name.to_string());
        }
    }

    names.sort_by_key(|name| input_number(name));
    Ok(names)
}

/// Numeric suffix of an export file name; 0 when there is none.
///
/// `messages7.html` is 7, `messages.html` is 0. A digit run too long for
/// `u64` also falls back to 0.
pub fn input_number(name: &str) -> u64 {
    INPUT_NUMBER
        .captures(name)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_input_number() {
        assert_eq!(input_number("messages.html"), 0);
        assert_eq!(input_number("messages2.html"), 2);
        assert_eq!(input_number("messages10.html"), 10);
        assert_eq!(input_number("messages99999999999999999999999.html"), 0);
    }

    #[test]
    fn test_numeric_ordering() {
        let dir = tempdir().unwrap();
        for name in ["messages10.html", "messages2.html", "messages.html"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let names = discover_inputs(dir.path()).unwrap();
        assert_eq!(names, ["messages.html", "messages2.html", "messages10.html"]);
    }

    #[test]
    fn test_non_matching_names_ignored() {
        let dir = tempdir().unwrap();
        for name in [
            "messages1.html",
            "messages1.html.bak",
            "photos1.html",
            "messages1.txt",
            "export.html",
        ] {
            File::create(dir.path().join(name)).unwrap();
        }

        let names = discover_inputs(dir.path()).unwrap();
        assert_eq!(names, ["messages1.html"]);
    }

    #[test]
    fn test_directories_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("messages3.html")).unwrap();
        File::create(dir.path().join("messages1.html")).unwrap();

        let names = discover_inputs(dir.path()).unwrap();
        assert_eq!(names, ["messages1.html"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(discover_inputs(dir.path()).unwrap().is_empty());
    }
}
