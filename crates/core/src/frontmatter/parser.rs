//! Front matter splitting and field extraction.

use super::types::{DELIMITER, FrontmatterParseError, ParsedDocument, TagKey};
use regex::Regex;
use std::sync::OnceLock;

/// Split a document on the first two occurrences of `---`.
///
/// ```markdown
/// ---
/// title: "Hello"
/// tags: ["rust", "cli"]
/// ---
/// # Document content
/// ```
///
/// The delimiter is matched as a substring, so the front matter text keeps
/// the newline that follows the opening marker and the body keeps the
/// newline that follows the closing one.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let open = content.find(DELIMITER).ok_or(FrontmatterParseError::Unparseable)?;
    let after_open = open + DELIMITER.len();

    let close = content[after_open..]
        .find(DELIMITER)
        .map(|pos| after_open + pos)
        .ok_or(FrontmatterParseError::Unparseable)?;

    Ok(ParsedDocument {
        prefix: content[..open].to_string(),
        front_matter: content[after_open..close].to_string(),
        body: content[close + DELIMITER.len()..].to_string(),
    })
}

/// Raw value of the first `key:` line, trimmed.
fn raw_value<'a>(front_matter: &'a str, key: &str) -> Option<&'a str> {
    front_matter.lines().find_map(|line| {
        line.trim_start().strip_prefix(key).and_then(|rest| rest.strip_prefix(':')).map(str::trim)
    })
}

/// Extract a scalar field such as `title` or `description`.
///
/// Accepts double-quoted, single-quoted and bare values; one optional
/// quote is stripped from each end. Returns an empty string when the key
/// is absent.
pub fn extract_scalar(front_matter: &str, key: &str) -> String {
    let Some(value) = raw_value(front_matter, key) else {
        return String::new();
    };

    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    let value = value.strip_suffix(['"', '\'']).unwrap_or(value);
    value.to_string()
}

/// Extract the `date` field verbatim (rest of the line, trimmed).
pub fn extract_date(front_matter: &str) -> String {
    raw_value(front_matter, "date").unwrap_or_default().to_string()
}

/// Matches `tags: [...]` or `topics: [...]`, brackets may span lines.
pub(crate) fn list_field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\b(tags|topics):\s*\[(.*?)\]").expect("list field pattern is valid")
    })
}

fn quoted_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"["']([^"']+)["']"#).expect("quoted item pattern is valid")
    })
}

fn quoted_items(inner: &str) -> Vec<String> {
    quoted_item_re().captures_iter(inner).map(|caps| caps[1].to_string()).collect()
}

/// Extract the list stored under `key`, in source order.
///
/// Returns an empty vector when no bracketed list is stored under that key.
pub fn extract_list(front_matter: &str, key: TagKey) -> Vec<String> {
    list_field_re()
        .captures_iter(front_matter)
        .find(|caps| &caps[1] == key.as_str())
        .map(|caps| quoted_items(&caps[2]))
        .unwrap_or_default()
}

/// Extract the first tag list found, whichever of `tags` or `topics` it uses.
pub fn extract_tags(front_matter: &str) -> Vec<String> {
    list_field_re().captures(front_matter).map(|caps| quoted_items(&caps[2])).unwrap_or_default()
}
