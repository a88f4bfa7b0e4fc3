//! Word list loading utilities
//!
//! A word list is plain text with one entry per line. Entries may be
//! phrases; blank lines are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Load the entries of a word list file
///
/// Surrounding whitespace is trimmed from each line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letterset::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(entries_from_str(&content))
}

/// Split word list text into trimmed, non-empty entries
#[must_use]
pub fn entries_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn entries_skip_blank_lines() {
        let entries = entries_from_str("listen\n\n  silent  \n\t\nenlist\n");
        assert_eq!(entries, ["listen", "silent", "enlist"]);
    }

    #[test]
    fn entries_keep_phrases() {
        let entries = entries_from_str("dormitory\ndirty room\n");
        assert_eq!(entries[1], "dirty room");
    }

    #[test]
    fn load_from_temp_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stop\npots\ntops").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0], "stop");
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_from_file("/nonexistent/wordlist.txt").is_err());
    }
}
