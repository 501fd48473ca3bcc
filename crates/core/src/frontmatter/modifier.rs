//! Front matter rewriting operations.

use super::parser::list_field_re;
use super::types::TagKey;
use regex::{NoExpand, Regex};
use std::sync::OnceLock;

fn list_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(tags|topics):").expect("list key pattern is valid"))
}

/// Render `key: ["a", "b"]`.
pub fn format_list<S: AsRef<str>>(key: TagKey, values: &[S]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("\"{}\"", v.as_ref())).collect();
    format!("{}: [{}]", key, items.join(", "))
}

/// Replace (or insert) the tag list.
///
/// An existing `tags:`/`topics:` bracketed list is replaced in place under
/// `key`. Without one, the new line goes right after each `description:`
/// line, or at the end of the front matter when there is no description.
pub fn replace_list<S: AsRef<str>>(front_matter: &str, key: TagKey, values: &[S]) -> String {
    let line = format_list(key, values);

    if list_key_re().is_match(front_matter) {
        return list_field_re().replace_all(front_matter, NoExpand(&line)).into_owned();
    }

    let eol = if front_matter.contains("\r\n") { "\r\n" } else { "\n" };
    let has_description =
        front_matter.split('\n').any(|l| l.trim_start().starts_with("description:"));

    if has_description {
        let crlf_line = format!("{line}\r");
        let mut lines = Vec::new();
        for l in front_matter.split('\n') {
            lines.push(l);
            if l.trim_start().starts_with("description:") {
                lines.push(if l.ends_with('\r') { crlf_line.as_str() } else { line.as_str() });
            }
        }
        lines.join("\n")
    } else {
        format!("{}{eol}{}{eol}", front_matter.trim_end(), line)
    }
}

/// Repair `key: "text\""` into `key: "text"`.
///
/// Returns `None` when the malformed suffix is absent, so a clean value is
/// never touched.
pub fn rewrite_scalar_suffix(front_matter: &str, key: &str) -> Option<String> {
    let pattern = format!(r#"\b{}:\s*"([^"]*)\\"""#, regex::escape(key));
    let re = Regex::new(&pattern).ok()?;

    let caps = re.captures(front_matter)?;
    let whole = caps.get(0)?;
    let fixed = format!("{}: \"{}\"", key, &caps[1]);

    let mut out = String::with_capacity(front_matter.len());
    out.push_str(&front_matter[..whole.start()]);
    out.push_str(&fixed);
    out.push_str(&front_matter[whole.end()..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::parser::extract_list;

    #[test]
    fn format_list_quotes_and_joins() {
        assert_eq!(format_list(TagKey::Tags, &["a", "b c"]), r#"tags: ["a", "b c"]"#);
        assert_eq!(format_list::<&str>(TagKey::Topics, &[]), "topics: []");
    }

    #[test]
    fn replaces_existing_tags() {
        let fm = "\ntitle: x\ntags: [\"old\"]\ndate: 2024-01-01\n";
        let out = replace_list(fm, TagKey::Tags, &["new", "other"]);
        assert_eq!(out, "\ntitle: x\ntags: [\"new\", \"other\"]\ndate: 2024-01-01\n");
    }

    #[test]
    fn replaces_topics_under_new_key() {
        let fm = "\ntitle: x\ntopics: [\n  \"a\",\n  \"b\"\n]\n";
        let out = replace_list(fm, TagKey::Tags, &["c"]);
        assert_eq!(out, "\ntitle: x\ntags: [\"c\"]\n");
    }

    #[test]
    fn inserts_after_description() {
        let fm = "\ntitle: x\ndescription: \"d\"\ndate: 2024-01-01\n";
        let out = replace_list(fm, TagKey::Tags, &["a"]);
        assert_eq!(out, "\ntitle: x\ndescription: \"d\"\ntags: [\"a\"]\ndate: 2024-01-01\n");
    }

    #[test]
    fn appends_without_description() {
        let fm = "\ntitle: x\ndate: 2024-01-01\n\n";
        let out = replace_list(fm, TagKey::Tags, &["a"]);
        assert_eq!(out, "\ntitle: x\ndate: 2024-01-01\ntags: [\"a\"]\n");
    }

    #[test]
    fn crlf_insert_after_description() {
        let fm = "\r\ntitle: x\r\ndescription: d\r\n";
        let out = replace_list(fm, TagKey::Tags, &["a"]);
        assert_eq!(out, "\r\ntitle: x\r\ndescription: d\r\ntags: [\"a\"]\r\n");
    }

    #[test]
    fn crlf_append() {
        let fm = "\r\ntitle: x\r\n";
        let out = replace_list(fm, TagKey::Tags, &["a"]);
        assert_eq!(out, "\r\ntitle: x\r\ntags: [\"a\"]\r\n");
    }

    #[test]
    fn replace_is_idempotent() {
        for fm in ["\ntitle: x\ndescription: d\n", "\ntitle: x\n", "\ntags: [\"z\"]\n"] {
            let once = replace_list(fm, TagKey::Tags, &["a", "b"]);
            let twice = replace_list(&once, TagKey::Tags, &["a", "b"]);
            assert_eq!(once, twice);
            assert_eq!(extract_list(&twice, TagKey::Tags), vec!["a", "b"]);
        }
    }

    #[test]
    fn replacement_values_are_literal() {
        let out = replace_list("\ntags: []\n", TagKey::Tags, &["$1 costs"]);
        assert_eq!(out, "\ntags: [\"$1 costs\"]\n");
    }

    #[test]
    fn repairs_escaped_quote_suffix() {
        let fm = "\ntitle: \"Hello world\\\"\"\ndate: x\n";
        let out = rewrite_scalar_suffix(fm, "title").unwrap();
        assert_eq!(out, "\ntitle: \"Hello world\"\ndate: x\n");
    }

    #[test]
    fn repair_leaves_clean_value_alone() {
        assert_eq!(rewrite_scalar_suffix("\ntitle: \"Hello\"\n", "title"), None);
    }

    #[test]
    fn repair_is_idempotent() {
        let fm = "\ndescription: \"Some text\\\"\"\n";
        let once = rewrite_scalar_suffix(fm, "description").unwrap();
        assert_eq!(rewrite_scalar_suffix(&once, "description"), None);
    }

    #[test]
    fn repair_only_touches_requested_key() {
        let fm = "\ntitle: \"ok\"\ndescription: \"bad\\\"\"\n";
        assert_eq!(rewrite_scalar_suffix(fm, "title"), None);
        assert_eq!(
            rewrite_scalar_suffix(fm, "description").unwrap(),
            "\ntitle: \"ok\"\ndescription: \"bad\"\n"
        );
    }
}
