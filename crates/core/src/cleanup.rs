//! Line-oriented removal of stray quotes from post bodies.
//!
//! Imported posts sometimes carry every paragraph wrapped in quotes and
//! blank lines written as `""`. Lines up to and including the second
//! `---` line are never touched.

use crate::frontmatter::DELIMITER;

/// Clean a single body line, or `None` when it should stay as is.
fn clean_line(line: &str) -> Option<String> {
    let stripped = line.trim();
    let quotes = stripped.matches('"').count();

    if stripped == "\"\"" || stripped == "\"" {
        return Some(String::new());
    }

    // Lines carrying other quotes (`He said "hi"`) are left alone.
    if quotes == 2 && stripped.len() > 1 && stripped.starts_with('"') && stripped.ends_with('"')
    {
        return Some(stripped[1..stripped.len() - 1].to_string());
    }
    if quotes == 1 && stripped.ends_with('"') {
        return Some(stripped[..stripped.len() - 1].to_string());
    }
    if quotes == 1 && stripped.starts_with('"') {
        return Some(stripped[1..].to_string());
    }

    None
}

/// Remove quote wrapping from body lines.
///
/// The result is identical to the input when nothing needed cleaning.
pub fn fix_quotes(content: &str) -> String {
    let mut delimiters_seen = 0usize;
    let mut out: Vec<String> = Vec::new();

    for line in content.split('\n') {
        if line.trim() == DELIMITER {
            delimiters_seen += 1;
            out.push(line.to_string());
            continue;
        }

        if delimiters_seen < 2 {
            out.push(line.to_string());
            continue;
        }

        match clean_line(line) {
            // A CRLF line keeps its `\r` so endings stay uniform.
            Some(fixed) if line.ends_with('\r') => out.push(fixed + "\r"),
            Some(fixed) => out.push(fixed),
            None => out.push(line.to_string()),
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_body_lines() {
        let input = "---\ntitle: x\n---\n\"hello\"\n\"\"\n\"world\n";
        assert_eq!(fix_quotes(input), "---\ntitle: x\n---\nhello\n\nworld\n");
    }

    #[test]
    fn front_matter_is_untouched() {
        let input = "---\ntitle: \"quoted\"\ndescription: \"\"\n---\n\"body\"";
        assert_eq!(fix_quotes(input), "---\ntitle: \"quoted\"\ndescription: \"\"\n---\nbody");
    }

    #[test]
    fn lone_quote_line_becomes_blank() {
        assert_eq!(fix_quotes("---\n---\n  \"  \ntext"), "---\n---\n\ntext");
    }

    #[test]
    fn trailing_quote_removed() {
        assert_eq!(fix_quotes("---\n---\nend of paragraph.\""), "---\n---\nend of paragraph.");
    }

    #[test]
    fn internal_quotes_left_alone() {
        let input = "---\n---\nHe said \"hi\"\n\"a\" and \"b\"";
        assert_eq!(fix_quotes(input), input);
    }

    #[test]
    fn untouched_lines_keep_whitespace() {
        let input = "---\n---\n    indented code\n";
        assert_eq!(fix_quotes(input), input);
    }

    #[test]
    fn horizontal_rule_in_body_passes_through() {
        let input = "---\n---\n\"a\"\n---\n\"b\"";
        assert_eq!(fix_quotes(input), "---\n---\na\n---\nb");
    }

    #[test]
    fn without_front_matter_nothing_changes() {
        let input = "\"quoted\"\nline\"";
        assert_eq!(fix_quotes(input), input);
    }

    #[test]
    fn crlf_endings_are_kept() {
        let input = "---\r\ntitle: x\r\n---\r\n\"hello\"\r\n\"\"\r\nplain\r\n";
        assert_eq!(fix_quotes(input), "---\r\ntitle: x\r\n---\r\nhello\r\n\r\nplain\r\n");
    }

    #[test]
    fn idempotent() {
        let input = "---\nt: x\n---\n\"hello\"\n\"\"\n\"world\ntail\"\n";
        let once = fix_quotes(input);
        assert_eq!(fix_quotes(&once), once);
    }
}
