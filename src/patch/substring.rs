use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::patch::preview::render_line_diff;
use crate::utils::fs::{read_file_to_string, write_file_sync};

/// A one-shot literal patch: ordered bad-block candidates mapping to a
/// single replacement.
#[derive(Debug, Clone)]
pub struct SubstringPatch {
    /// Short name used in log lines.
    pub name: &'static str,
    /// Candidates tried in order; the first one contained in the
    /// content wins.
    pub candidates: Vec<&'static str>,
    /// Replacement for whichever candidate matched.
    pub replacement: &'static str,
}

/// Outcome of applying a patch to file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// A candidate matched; `content` is the rewritten text.
    Applied {
        content: String,
        /// Index into `candidates` of the pattern that matched.
        candidate: usize,
    },
    /// No candidate was contained in the content.
    NotFound,
}

impl SubstringPatch {
    pub fn new(
        name: &'static str,
        candidates: &[&'static str],
        replacement: &'static str,
    ) -> Self {
        Self {
            name,
            candidates: candidates.to_vec(),
            replacement,
        }
    }

    /// Apply the patch to in-memory content. Only the first occurrence
    /// of the matched candidate is replaced.
    pub fn apply(&self, content: &str) -> PatchOutcome {
        for (idx, bad) in self.candidates.iter().enumerate() {
            if content.contains(bad) {
                debug!("{}: candidate #{} matched", self.name, idx + 1);
                return PatchOutcome::Applied {
                    content: content.replacen(bad, self.replacement, 1),
                    candidate: idx,
                };
            }
        }
        PatchOutcome::NotFound
    }

    /// Read the file, apply the patch, and overwrite the file in place
    /// when a candidate matched. A not-found outcome performs no write
    /// and leaves the file byte-for-byte untouched.
    pub fn patch_file(&self, path: impl AsRef<Path>) -> Result<PatchOutcome> {
        let path = path.as_ref();
        let content = read_file_to_string(path)?;
        let outcome = self.apply(&content);
        if let PatchOutcome::Applied {
            content: patched,
            candidate,
        } = &outcome
        {
            debug!(
                "{}: change preview\n{}",
                self.name,
                render_line_diff(&content, patched)
            );
            write_file_sync(path, patched)?;
            info!(
                "{}: patched {} using candidate #{}",
                self.name,
                path.display(),
                candidate + 1
            );
        }
        Ok(outcome)
    }
}
