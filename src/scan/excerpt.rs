use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::utils::fs::{read_file_to_string, write_file_sync};

/// Write a numbered excerpt of `src` to `out`, covering the 1-based
/// inclusive line range. Lines outside the file are simply absent from
/// the excerpt. Returns the number of lines written.
pub fn write_numbered_excerpt(
    src: impl AsRef<Path>,
    out: impl AsRef<Path>,
    first_line: usize,
    last_line: usize,
) -> Result<usize> {
    let src = src.as_ref();
    let out = out.as_ref();
    let content = read_file_to_string(src)?;

    let mut excerpt = String::new();
    let mut written = 0;
    for (idx, line) in content.split_inclusive('\n').enumerate() {
        let number = idx + 1;
        if number < first_line {
            continue;
        }
        if number > last_line {
            break;
        }
        // `line` keeps its own terminator, so no newline is added here.
        excerpt.push_str(&format!("{}: {}", number, line));
        written += 1;
    }

    write_file_sync(out, &excerpt)?;
    debug!(
        "wrote {} numbered lines from {} to {}",
        written,
        src.display(),
        out.display()
    );
    Ok(written)
}

/// Character-window excerpt of content, used when a patch target cannot
/// be found. Offsets count characters, not bytes, so multibyte content
/// never splits a code point.
pub fn char_window(content: &str, start: usize, len: usize) -> &str {
    let begin = match content.char_indices().nth(start) {
        Some((byte_idx, _)) => byte_idx,
        None => return "",
    };
    let end = content[begin..]
        .char_indices()
        .nth(len)
        .map(|(byte_idx, _)| begin + byte_idx)
        .unwrap_or(content.len());
    &content[begin..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn numbered_excerpt_covers_requested_range() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("build.gradle");
        let out = dir.path().join("structure.txt");
        fs::write(&src, "a\nb\nc\nd\ne\n").unwrap();

        let written = write_numbered_excerpt(&src, &out, 2, 4).unwrap();
        assert_eq!(written, 3);
        assert_eq!(fs::read_to_string(&out).unwrap(), "2: b\n3: c\n4: d\n");
    }

    #[test]
    fn numbered_excerpt_clamps_to_end_of_file() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("build.gradle");
        let out = dir.path().join("structure.txt");
        fs::write(&src, "a\nb").unwrap();

        let written = write_numbered_excerpt(&src, &out, 2, 10).unwrap();
        assert_eq!(written, 1);
        // The final line has no terminator in the source either.
        assert_eq!(fs::read_to_string(&out).unwrap(), "2: b");
    }

    #[test]
    fn numbered_excerpt_of_empty_file_is_empty() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("build.gradle");
        let out = dir.path().join("structure.txt");
        fs::write(&src, "").unwrap();

        let written = write_numbered_excerpt(&src, &out, 1, 10).unwrap();
        assert_eq!(written, 0);
        assert_eq!(fs::read_to_string(&out).unwrap(), "");
    }

    #[test]
    fn char_window_clamps_to_content() {
        assert_eq!(char_window("hello", 1, 3), "ell");
        assert_eq!(char_window("hello", 3, 10), "lo");
        assert_eq!(char_window("hello", 10, 5), "");
        assert_eq!(char_window("", 0, 5), "");
    }

    #[test]
    fn char_window_respects_multibyte_boundaries() {
        assert_eq!(char_window("aé😀bc", 1, 2), "é😀");
        assert_eq!(char_window("aé😀bc", 2, 10), "😀bc");
    }
}
