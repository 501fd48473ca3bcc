use blogfm_core::cleanup::fix_quotes;
use blogfm_core::frontmatter::{
    TagKey, extract_list, extract_scalar, parse, replace_list, serialize,
};
use blogfm_core::tagging::{PostContent, TagRules, merge_tags, suggest_tags};
use rstest::rstest;
use std::collections::BTreeSet;

#[rstest]
#[case("---\ntitle: x\n---\nbody")]
#[case("---\ntitle: \"Quoted\"\ntags: [\"a\", \"b\"]\n---\n\n# Heading\n\n---\n\nafter rule\n")]
#[case("---\n---\n")]
#[case("---\r\ndescription: 'crlf'\r\n---\r\nbody\r\n")]
#[case("---\ntopics: [\n  \"wrapped\",\n  \"list\"\n]\n---\n")]
fn serialize_parse_roundtrip(#[case] text: &str) {
    let doc = parse(text).expect("well-formed document");
    assert_eq!(serialize(&doc), text);
}

#[rstest]
#[case("no delimiters at all")]
#[case("---\nonly one delimiter")]
#[case("")]
fn unparseable_documents(#[case] text: &str) {
    assert!(parse(text).is_err());
}

#[rstest]
#[case("\ntitle: x\n")]
#[case("\ntitle: x\ndescription: y\n")]
#[case("\ntags: [\"old\"]\n")]
#[case("\ntopics: [\n\"old\"\n]\ndescription: y\n")]
fn replace_list_is_idempotent(#[case] front_matter: &str) {
    let values = ["data science", "python"];
    let once = replace_list(front_matter, TagKey::Tags, &values);
    let twice = replace_list(&once, TagKey::Tags, &values);
    assert_eq!(once, twice);
}

#[test]
fn replace_list_inserts_after_description() {
    let fm = "\ntitle: \"T\"\ndescription: \"D\"\ndate: 2024-01-01\ndraft: false\n";
    let out = replace_list(fm, TagKey::Tags, &["a"]);
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(
        lines,
        vec!["", "title: \"T\"", "description: \"D\"", "tags: [\"a\"]", "date: 2024-01-01", "draft: false", ""]
    );
}

#[test]
fn extract_list_in_order() {
    assert_eq!(extract_list("tags: [\"a\", \"b\", \"c\"]", TagKey::Tags), vec!["a", "b", "c"]);
}

#[test]
fn quote_cleanup_on_body() {
    let doc = "---\ntitle: x\n---\n\"hello\"\n\"\"\n\"world\n";
    let fixed = fix_quotes(doc);
    let body = parse(&fixed).unwrap().body;
    assert_eq!(body, "\nhello\n\nworld\n");
}

#[test]
fn pandas_suggestion() {
    let tags = suggest_tags(&TagRules::default_rules(), &PostContent::new("pandas dataframe", "", ""));
    assert!(tags.contains("python"));
    assert!(tags.contains("pandas"));
    assert!(!tags.contains("rust"));
}

#[test]
fn merge_never_drops_existing() {
    let suggested: BTreeSet<String> = ["python".to_string()].into_iter().collect();
    assert_eq!(merge_tags(&["git"], &suggested), vec!["git", "python"]);
}

#[test]
fn full_document_retag_preserves_other_bytes() {
    let text = "---\ntitle: \"Rust tips\"\ndescription: 'short'\ndate: 2024-01-01\n---\n\nBody with `code`.\n";
    let doc = parse(text).unwrap();
    assert_eq!(extract_scalar(&doc.front_matter, "title"), "Rust tips");

    let fm = replace_list(&doc.front_matter, TagKey::Tags, &["rust", "tips"]);
    let out = serialize(&doc.with_front_matter(fm));
    assert_eq!(
        out,
        "---\ntitle: \"Rust tips\"\ndescription: 'short'\ntags: [\"rust\", \"tips\"]\ndate: 2024-01-01\n---\n\nBody with `code`.\n"
    );
}
