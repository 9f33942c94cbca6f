use similar::{ChangeTag, TextDiff};

/// Render a compact line diff of an edit for log output. Unchanged
/// lines are omitted.
pub fn render_line_diff(old: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut out = String::new();

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => continue,
        };
        out.push(sign);
        out.push_str(change.value().trim_end_matches('\n'));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_changed_lines_with_signs() {
        let rendered = render_line_diff("a\nb\nc\n", "a\nx\nc\n");
        assert_eq!(rendered, "-b\n+x\n");
    }

    #[test]
    fn equal_content_renders_nothing() {
        assert_eq!(render_line_diff("a\nb\n", "a\nb\n"), "");
    }

    #[test]
    fn pure_insertion_renders_plus_lines() {
        let rendered = render_line_diff("a\n", "a\nb\n");
        assert_eq!(rendered, "+b\n");
    }
}
