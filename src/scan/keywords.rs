use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::utils::fs::read_file_to_string;

/// A line flagged by the scanner: 1-based line number plus the line
/// text with surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHit {
    pub line_number: usize,
    pub text: String,
}

/// Lazily yield every line containing any of the keywords, in file
/// order. Matching is literal substring containment.
pub fn scan_lines<'a>(
    content: &'a str,
    keywords: &'a [&'a str],
) -> impl Iterator<Item = KeywordHit> + 'a {
    content.lines().enumerate().filter_map(move |(idx, line)| {
        keywords
            .iter()
            .any(|keyword| line.contains(keyword))
            .then(|| KeywordHit {
                line_number: idx + 1,
                text: line.trim().to_string(),
            })
    })
}

/// Scan a file for keyword lines. Re-invoking re-reads the file, so a
/// scan is restartable by calling again.
pub fn scan_file(path: impl AsRef<Path>, keywords: &[&str]) -> Result<Vec<KeywordHit>> {
    let path = path.as_ref();
    let content = read_file_to_string(path)?;
    let hits: Vec<KeywordHit> = scan_lines(&content, keywords).collect();
    debug!("{} keyword lines in {}", hits.len(), path.display());
    Ok(hits)
}
