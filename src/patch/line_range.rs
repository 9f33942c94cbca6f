use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::patch::preview::render_line_diff;
use crate::utils::fs::{read_file_to_string, write_file_sync};

/// Rebuilds the region between two marker lines with a fixed block.
///
/// The region runs from the first line containing `start_marker`
/// (inclusive) up to but excluding the first line at or after it that
/// contains `end_marker`. Everything outside the region is preserved
/// byte-for-byte, line endings included.
#[derive(Debug, Clone)]
pub struct LineRangeRewrite {
    /// Short name used in log lines.
    pub name: &'static str,
    pub start_marker: &'static str,
    pub end_marker: &'static str,
    /// Replacement lines, written out with a trailing newline each.
    pub replacement: &'static [&'static str],
}

/// Outcome of a line-range rewrite. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    Applied {
        content: String,
        start_line: usize,
        /// Line holding the end marker; the rewrite stops just before it.
        end_line: usize,
    },
    /// One or both markers were absent; nothing was rewritten.
    MarkersMissing {
        start: Option<usize>,
        end: Option<usize>,
    },
}

impl LineRangeRewrite {
    pub fn new(
        name: &'static str,
        start_marker: &'static str,
        end_marker: &'static str,
        replacement: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            start_marker,
            end_marker,
            replacement,
        }
    }

    /// Apply the rewrite to in-memory content.
    pub fn apply(&self, content: &str) -> RewriteOutcome {
        let lines: Vec<&str> = content.split_inclusive('\n').collect();

        let start = lines
            .iter()
            .position(|line| line.contains(self.start_marker));
        // With no start line the end marker is still located so the
        // failure report can name what was and was not found.
        let end = match start {
            Some(s) => lines[s..]
                .iter()
                .position(|line| line.contains(self.end_marker))
                .map(|offset| s + offset),
            None => lines.iter().position(|line| line.contains(self.end_marker)),
        };

        let (s, e) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            _ => {
                return RewriteOutcome::MarkersMissing {
                    start: start.map(|i| i + 1),
                    end: end.map(|i| i + 1),
                }
            }
        };

        let mut rebuilt = String::with_capacity(content.len());
        for line in &lines[..s] {
            rebuilt.push_str(line);
        }
        for line in self.replacement {
            rebuilt.push_str(line);
            rebuilt.push('\n');
        }
        for line in &lines[e..] {
            rebuilt.push_str(line);
        }

        debug!(
            "{}: rewrote lines {}-{} with {} replacement lines",
            self.name,
            s + 1,
            e,
            self.replacement.len()
        );

        RewriteOutcome::Applied {
            content: rebuilt,
            start_line: s + 1,
            end_line: e + 1,
        }
    }

    /// Read the file, apply the rewrite, and overwrite the file in place
    /// when both markers were found. Missing markers perform no write.
    pub fn rewrite_file(&self, path: impl AsRef<Path>) -> Result<RewriteOutcome> {
        let path = path.as_ref();
        let content = read_file_to_string(path)?;
        let outcome = self.apply(&content);
        if let RewriteOutcome::Applied {
            content: rebuilt,
            start_line,
            end_line,
        } = &outcome
        {
            debug!(
                "{}: change preview\n{}",
                self.name,
                render_line_diff(&content, rebuilt)
            );
            write_file_sync(path, rebuilt)?;
            info!(
                "{}: rewrote {} between lines {} and {}",
                self.name,
                path.display(),
                start_line,
                end_line
            );
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn rewrite() -> LineRangeRewrite {
        LineRangeRewrite::new("test", "start {", "end {", &["new one", "new two"])
    }

    #[test]
    fn apply_replaces_region_between_markers() {
        let content = "before\n  start {\n  old\n  end {\nafter\n";
        match rewrite().apply(content) {
            RewriteOutcome::Applied {
                content,
                start_line,
                end_line,
            } => {
                assert_eq!(content, "before\nnew one\nnew two\n  end {\nafter\n");
                assert_eq!(start_line, 2);
                assert_eq!(end_line, 4);
            }
            RewriteOutcome::MarkersMissing { .. } => panic!("markers should be found"),
        }
    }

    #[test]
    fn apply_preserves_prefix_and_suffix_bytes() {
        let content = "keep a\nkeep b\n  start {\ndrop\n  end {\nkeep c";
        match rewrite().apply(content) {
            RewriteOutcome::Applied { content, .. } => {
                assert!(content.starts_with("keep a\nkeep b\n"));
                // Suffix keeps its missing trailing newline.
                assert!(content.ends_with("  end {\nkeep c"));
            }
            RewriteOutcome::MarkersMissing { .. } => panic!("markers should be found"),
        }
    }

    #[test]
    fn apply_uses_first_start_and_first_end_after_it() {
        let content = "  end {\n  start {\nold\n  start {\n  end {\ntail\n";
        match rewrite().apply(content) {
            RewriteOutcome::Applied {
                start_line,
                end_line,
                ..
            } => {
                assert_eq!(start_line, 2);
                assert_eq!(end_line, 5);
            }
            RewriteOutcome::MarkersMissing { .. } => panic!("markers should be found"),
        }
    }

    #[test]
    fn apply_reports_missing_start() {
        let content = "nothing\n  end {\n";
        assert_eq!(
            rewrite().apply(content),
            RewriteOutcome::MarkersMissing {
                start: None,
                end: Some(2),
            }
        );
    }

    #[test]
    fn apply_reports_missing_end() {
        let content = "  end {\n  start {\nold\n";
        assert_eq!(
            rewrite().apply(content),
            RewriteOutcome::MarkersMissing {
                start: Some(2),
                end: None,
            }
        );
    }

    #[test]
    fn apply_on_empty_content_reports_both_missing() {
        assert_eq!(
            rewrite().apply(""),
            RewriteOutcome::MarkersMissing {
                start: None,
                end: None,
            }
        );
    }

    #[test]
    fn rewrite_file_missing_marker_leaves_bytes_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build.gradle");
        let original = "before\n  start {\nno end marker here\n";
        fs::write(&path, original).unwrap();

        let outcome = rewrite().rewrite_file(&path).unwrap();
        assert!(matches!(outcome, RewriteOutcome::MarkersMissing { .. }));
        assert_eq!(fs::read(&path).unwrap(), original.as_bytes());
    }

    #[test]
    fn rewrite_file_overwrites_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build.gradle");
        fs::write(&path, "before\n  start {\nold\n  end {\nafter\n").unwrap();

        let outcome = rewrite().rewrite_file(&path).unwrap();
        assert!(matches!(outcome, RewriteOutcome::Applied { .. }));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "before\nnew one\nnew two\n  end {\nafter\n"
        );
    }
}
