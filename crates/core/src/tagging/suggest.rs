//! Matching post content against [`TagRules`].

use super::rules::TagRules;
use crate::frontmatter::{ParsedDocument, extract_scalar};
use std::collections::BTreeSet;

/// Lowercased text a post is matched on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostContent {
    pub title: String,
    pub description: String,
    pub body: String,
}

impl PostContent {
    pub fn new(title: &str, description: &str, body: &str) -> Self {
        Self {
            title: title.to_lowercase(),
            description: description.to_lowercase(),
            body: body.to_lowercase(),
        }
    }

    pub fn from_document(doc: &ParsedDocument) -> Self {
        Self::new(
            &extract_scalar(&doc.front_matter, "title"),
            &extract_scalar(&doc.front_matter, "description"),
            doc.body.trim(),
        )
    }

    fn combined(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.body)
    }
}

/// Tags suggested for `content`, sorted.
pub fn suggest_tags(rules: &TagRules, content: &PostContent) -> BTreeSet<String> {
    let text = content.combined();
    let mut tags = BTreeSet::new();

    for rule in rules.keywords() {
        if rule.keywords.iter().any(|k| text.contains(k.as_str())) {
            tags.insert(rule.tag.clone());
        }
    }

    for rule in rules.patterns() {
        if rule.pattern.is_match(&text) {
            tags.insert(rule.tag.clone());
        }
    }

    for (tag, parents) in rules.implications() {
        if tags.contains(tag) {
            tags.extend(parents.iter().cloned());
        }
    }

    tags
}

/// Union of existing and suggested tags, sorted. Existing tags are never dropped.
pub fn merge_tags<S: AsRef<str>>(current: &[S], suggested: &BTreeSet<String>) -> Vec<String> {
    let mut all: BTreeSet<String> = current.iter().map(|t| t.as_ref().to_string()).collect();
    all.extend(suggested.iter().cloned());
    all.into_iter().collect()
}
