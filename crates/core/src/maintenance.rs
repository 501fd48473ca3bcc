//! Per-post maintenance flows.
//!
//! Each flow reads one post, transforms it in memory and writes it back
//! only when the text changed. Flows never abort on a bad post: they
//! return a [`PostOutcome`] the caller can report and count.

use crate::blog::{BlogError, BlogPost, write_if_changed};
use crate::cleanup::fix_quotes;
use crate::frontmatter::{
    ParsedDocument, TagKey, extract_tags, parse, replace_list, rewrite_scalar_suffix, serialize,
};
use crate::tagging::{PostContent, TagRules, merge_tags, suggest_tags};
use std::collections::BTreeSet;
use tracing::debug;

/// Scalar fields repaired by [`fix_titles`].
pub const REPAIRED_FIELDS: [&str; 2] = ["title", "description"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than two `---` delimiters.
    Unparseable,
    /// The post folder has no `index.md`.
    MissingIndex,
    /// Auto-tagging found neither existing nor suggested tags.
    NoTags,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unparseable => f.write_str("invalid front matter"),
            SkipReason::MissingIndex => f.write_str("no index.md"),
            SkipReason::NoTags => f.write_str("no tags"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    Updated,
    /// Dry run: the post would have been written.
    WouldUpdate,
    Unchanged,
    Skipped(SkipReason),
}

/// Running counts for a batch of posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub processed: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: PostOutcome) {
        match outcome {
            PostOutcome::Updated | PostOutcome::WouldUpdate => {
                self.processed += 1;
                self.updated += 1;
            }
            PostOutcome::Unchanged => {
                self.processed += 1;
                self.unchanged += 1;
            }
            PostOutcome::Skipped(SkipReason::NoTags) => {
                self.processed += 1;
                self.skipped += 1;
            }
            PostOutcome::Skipped(_) => self.skipped += 1,
        }
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }
}

/// Read a post, mapping a missing `index.md` to a skip.
fn read_post(post: &BlogPost) -> Result<Result<String, SkipReason>, BlogError> {
    match post.read() {
        Ok(content) => Ok(Ok(content)),
        Err(BlogError::MissingIndex(_)) => Ok(Err(SkipReason::MissingIndex)),
        Err(e) => Err(e),
    }
}

fn commit(
    post: &BlogPost,
    original: &str,
    updated: &str,
    dry_run: bool,
) -> Result<PostOutcome, BlogError> {
    if original == updated {
        return Ok(PostOutcome::Unchanged);
    }
    if dry_run {
        return Ok(PostOutcome::WouldUpdate);
    }
    write_if_changed(&post.index_path(), original, updated)?;
    Ok(PostOutcome::Updated)
}

/// Strip stray quotes from the post body.
pub fn fix_formatting(post: &BlogPost, dry_run: bool) -> Result<PostOutcome, BlogError> {
    let original = match read_post(post)? {
        Ok(c) => c,
        Err(reason) => return Ok(PostOutcome::Skipped(reason)),
    };
    if parse(&original).is_err() {
        return Ok(PostOutcome::Skipped(SkipReason::Unparseable));
    }
    commit(post, &original, &fix_quotes(&original), dry_run)
}

/// Repair `title`/`description` values ending in `\""`.
///
/// Returns the repaired document, or `None` when nothing needed fixing.
pub fn repair_titles(doc: &ParsedDocument) -> Option<ParsedDocument> {
    let mut front_matter = doc.front_matter.clone();
    let mut changed = false;

    for key in REPAIRED_FIELDS {
        if let Some(fixed) = rewrite_scalar_suffix(&front_matter, key) {
            front_matter = fixed;
            changed = true;
        }
    }

    changed.then(|| doc.clone().with_front_matter(front_matter))
}

pub fn fix_titles(post: &BlogPost, dry_run: bool) -> Result<PostOutcome, BlogError> {
    let original = match read_post(post)? {
        Ok(c) => c,
        Err(reason) => return Ok(PostOutcome::Skipped(reason)),
    };
    let Ok(doc) = parse(&original) else {
        return Ok(PostOutcome::Skipped(SkipReason::Unparseable));
    };

    match repair_titles(&doc) {
        Some(fixed) => commit(post, &original, &serialize(&fixed), dry_run),
        None => Ok(PostOutcome::Unchanged),
    }
}

/// Result of auto-tagging one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChange {
    pub outcome: PostOutcome,
    /// Tags found in the front matter before the run.
    pub current: Vec<String>,
    /// Sorted union of current and suggested tags.
    pub tags: Vec<String>,
}

impl TagChange {
    fn skipped(reason: SkipReason) -> Self {
        Self { outcome: PostOutcome::Skipped(reason), current: Vec::new(), tags: Vec::new() }
    }
}

/// Compute the merged tag list for a document.
pub fn retag(doc: &ParsedDocument, rules: &TagRules) -> (Vec<String>, Vec<String>) {
    let current = extract_tags(&doc.front_matter);
    let suggested = suggest_tags(rules, &PostContent::from_document(doc));
    let merged = merge_tags(&current, &suggested);
    (current, merged)
}

/// Add suggested tags to a post, keeping every existing one.
pub fn auto_tag(post: &BlogPost, rules: &TagRules, dry_run: bool) -> Result<TagChange, BlogError> {
    let original = match read_post(post)? {
        Ok(c) => c,
        Err(reason) => return Ok(TagChange::skipped(reason)),
    };
    let Ok(doc) = parse(&original) else {
        return Ok(TagChange::skipped(SkipReason::Unparseable));
    };

    let (current, tags) = retag(&doc, rules);
    debug!("{}: current {:?}, merged {:?}", post.folder(), current, tags);

    if tags.is_empty() {
        return Ok(TagChange { outcome: PostOutcome::Skipped(SkipReason::NoTags), current, tags });
    }

    let before: BTreeSet<&str> = current.iter().map(String::as_str).collect();
    let after: BTreeSet<&str> = tags.iter().map(String::as_str).collect();
    if before == after {
        return Ok(TagChange { outcome: PostOutcome::Unchanged, current, tags });
    }

    let front_matter = replace_list(&doc.front_matter, TagKey::Tags, &tags);
    let updated = serialize(&doc.with_front_matter(front_matter));
    let outcome = commit(post, &original, &updated, dry_run)?;
    Ok(TagChange { outcome, current, tags })
}

/// Set a post's tags to a curated list.
pub fn apply_tags<S: AsRef<str>>(
    post: &BlogPost,
    tags: &[S],
    key: TagKey,
    dry_run: bool,
) -> Result<PostOutcome, BlogError> {
    let original = match read_post(post)? {
        Ok(c) => c,
        Err(reason) => return Ok(PostOutcome::Skipped(reason)),
    };
    let Ok(doc) = parse(&original) else {
        return Ok(PostOutcome::Skipped(SkipReason::Unparseable));
    };

    let front_matter = replace_list(&doc.front_matter, key, tags);
    let updated = serialize(&doc.with_front_matter(front_matter));
    commit(post, &original, &updated, dry_run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_post(root: &Path, folder: &str, content: &str) -> BlogPost {
        let dir = root.join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.md"), content).unwrap();
        BlogPost::new(dir)
    }

    fn read(post: &BlogPost) -> String {
        fs::read_to_string(post.index_path()).unwrap()
    }

    #[test]
    fn formatting_writes_only_on_change() {
        let tmp = TempDir::new().unwrap();
        let dirty = write_post(tmp.path(), "2024-01-01-a", "---\nt: x\n---\n\"hi\"\n");
        let clean = write_post(tmp.path(), "2024-01-02-b", "---\nt: x\n---\nhi\n");

        assert_eq!(fix_formatting(&dirty, false).unwrap(), PostOutcome::Updated);
        assert_eq!(read(&dirty), "---\nt: x\n---\nhi\n");
        assert_eq!(fix_formatting(&clean, false).unwrap(), PostOutcome::Unchanged);
    }

    #[test]
    fn formatting_skips_post_without_front_matter() {
        let tmp = TempDir::new().unwrap();
        let original = "\"no delimiters\"\n";
        let post = write_post(tmp.path(), "2024-01-01-a", original);

        assert_eq!(
            fix_formatting(&post, false).unwrap(),
            PostOutcome::Skipped(SkipReason::Unparseable)
        );
        assert_eq!(read(&post), original);
    }

    #[test]
    fn unreadable_post_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("2024-01-01-binary");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.md"), [0xff, 0xfe]).unwrap();

        let err = fix_formatting(&BlogPost::new(dir), false).unwrap_err();
        assert!(matches!(err, BlogError::ReadError(..)), "got {err:?}");
    }

    #[test]
    fn dry_run_leaves_file() {
        let tmp = TempDir::new().unwrap();
        let original = "---\nt: x\n---\n\"hi\"\n";
        let post = write_post(tmp.path(), "2024-01-01-a", original);

        assert_eq!(fix_formatting(&post, true).unwrap(), PostOutcome::WouldUpdate);
        assert_eq!(read(&post), original);
    }

    #[test]
    fn missing_index_is_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("2024-01-01-empty")).unwrap();
        let post = BlogPost::new(tmp.path().join("2024-01-01-empty"));

        assert_eq!(
            fix_titles(&post, false).unwrap(),
            PostOutcome::Skipped(SkipReason::MissingIndex)
        );
    }

    #[test]
    fn titles_repaired() {
        let tmp = TempDir::new().unwrap();
        let post = write_post(
            tmp.path(),
            "2024-01-01-a",
            "---\ntitle: \"A\\\"\"\ndescription: \"B\\\"\"\n---\nbody",
        );

        assert_eq!(fix_titles(&post, false).unwrap(), PostOutcome::Updated);
        assert_eq!(read(&post), "---\ntitle: \"A\"\ndescription: \"B\"\n---\nbody");
        assert_eq!(fix_titles(&post, false).unwrap(), PostOutcome::Unchanged);
    }

    #[test]
    fn unparseable_title_post_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let post = write_post(tmp.path(), "2024-01-01-a", "title: \"A\\\"\"");
        assert_eq!(
            fix_titles(&post, false).unwrap(),
            PostOutcome::Skipped(SkipReason::Unparseable)
        );
    }

    #[test]
    fn auto_tag_keeps_existing_tags() {
        let tmp = TempDir::new().unwrap();
        let post = write_post(
            tmp.path(),
            "2024-01-01-a",
            "---\ntitle: \"Working with pandas\"\ntags: [\"git\"]\n---\nbody\n",
        );
        let rules = TagRules::new().with_keywords("python", &["pandas"]);

        let change = auto_tag(&post, &rules, false).unwrap();
        assert_eq!(change.outcome, PostOutcome::Updated);
        assert_eq!(change.current, vec!["git"]);
        assert_eq!(change.tags, vec!["git", "python"]);
        assert_eq!(
            read(&post),
            "---\ntitle: \"Working with pandas\"\ntags: [\"git\", \"python\"]\n---\nbody\n"
        );

        let again = auto_tag(&post, &rules, false).unwrap();
        assert_eq!(again.outcome, PostOutcome::Unchanged);
    }

    #[test]
    fn auto_tag_without_any_tags_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let post = write_post(tmp.path(), "2024-01-01-a", "---\ntitle: gardening\n---\n");
        let change = auto_tag(&post, &TagRules::new(), false).unwrap();
        assert_eq!(change.outcome, PostOutcome::Skipped(SkipReason::NoTags));
    }

    #[test]
    fn apply_tags_inserts_after_description() {
        let tmp = TempDir::new().unwrap();
        let post = write_post(
            tmp.path(),
            "2024-01-01-a",
            "---\ntitle: x\ndescription: d\ndate: 2024-01-01\n---\nbody",
        );

        assert_eq!(apply_tags(&post, &["a", "b"], TagKey::Topics, false).unwrap(), PostOutcome::Updated);
        assert_eq!(
            read(&post),
            "---\ntitle: x\ndescription: d\ntopics: [\"a\", \"b\"]\ndate: 2024-01-01\n---\nbody"
        );
        assert_eq!(apply_tags(&post, &["a", "b"], TagKey::Topics, false).unwrap(), PostOutcome::Unchanged);
    }

    #[test]
    fn tally_counts() {
        let mut tally = Tally::default();
        tally.record(PostOutcome::Updated);
        tally.record(PostOutcome::Unchanged);
        tally.record(PostOutcome::Skipped(SkipReason::NoTags));
        tally.record(PostOutcome::Skipped(SkipReason::MissingIndex));
        tally.record_error();
        assert_eq!(
            tally,
            Tally { processed: 3, updated: 1, unchanged: 1, skipped: 2, errors: 1 }
        );
    }
}
