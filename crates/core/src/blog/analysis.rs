//! Post summaries exported for manual tag review.

use super::posts::{BlogError, BlogPost};
use crate::frontmatter::{extract_date, extract_scalar, parse};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

const PREVIEW_CHARS: usize = 800;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostInfo {
    pub folder: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub body_preview: String,
    pub full_body: String,
    pub file_path: String,
}

struct BodyPatterns {
    image: Regex,
    link: Regex,
    shortcode: Regex,
}

fn body_patterns() -> &'static BodyPatterns {
    static RE: OnceLock<BodyPatterns> = OnceLock::new();
    RE.get_or_init(|| BodyPatterns {
        image: Regex::new(r"!\[.*?\]\(.*?\)").expect("image pattern is valid"),
        link: Regex::new(r"\[([^\]]+)\]\([^\)]+\)").expect("link pattern is valid"),
        shortcode: Regex::new(r"\{\{<.*?>\}\}").expect("shortcode pattern is valid"),
    })
}

/// Drop images and shortcodes, keep only the text of links.
pub fn plain_body(body: &str) -> String {
    let p = body_patterns();
    let text = p.image.replace_all(body, "");
    let text = p.link.replace_all(&text, "$1");
    p.shortcode.replace_all(&text, "").into_owned()
}

impl PostInfo {
    /// Summarize a post. `Ok(None)` when its front matter is unparseable.
    pub fn extract(post: &BlogPost) -> Result<Option<Self>, BlogError> {
        let content = post.read()?;
        let Ok(doc) = parse(&content) else {
            return Ok(None);
        };

        let full_body = plain_body(doc.body.trim()).trim().to_string();
        let body_preview: String = full_body.chars().take(PREVIEW_CHARS).collect();

        let mut date = extract_date(&doc.front_matter);
        if let Some(d) = post.date().filter(|_| date.is_empty()) {
            date = d.format("%Y-%m-%d").to_string();
        }

        Ok(Some(Self {
            folder: post.folder().to_string(),
            title: extract_scalar(&doc.front_matter, "title"),
            description: extract_scalar(&doc.front_matter, "description"),
            date,
            body_preview: body_preview.trim().to_string(),
            full_body,
            file_path: post.index_path().display().to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn plain_body_strips_markup() {
        let body = "Intro ![alt](img.png) see [the docs](https://x.y) {{< youtube id >}}end";
        assert_eq!(plain_body(body), "Intro  see the docs end");
    }

    #[test]
    fn extract_info() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("2024-05-06-post");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join("index.md"),
            "---\ntitle: \"Hello\"\ndescription: 'World'\n---\n\nSome [link](u) text.\n",
        )
        .unwrap();

        let info = PostInfo::extract(&BlogPost::new(dir)).unwrap().unwrap();
        assert_eq!(info.folder, "2024-05-06-post");
        assert_eq!(info.title, "Hello");
        assert_eq!(info.description, "World");
        assert_eq!(info.date, "2024-05-06");
        assert_eq!(info.full_body, "Some link text.");
        assert_eq!(info.body_preview, "Some link text.");
    }

    #[test]
    fn preview_is_truncated() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("2024-05-06-long");
        fs::create_dir(&dir).unwrap();
        let body = "é".repeat(1000);
        fs::write(dir.join("index.md"), format!("---\ndate: 2024-05-07\n---\n{body}")).unwrap();

        let info = PostInfo::extract(&BlogPost::new(dir)).unwrap().unwrap();
        assert_eq!(info.date, "2024-05-07");
        assert_eq!(info.body_preview.chars().count(), 800);
        assert_eq!(info.full_body.chars().count(), 1000);
    }

    #[test]
    fn unparseable_is_none() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("2024-05-06-bad");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("index.md"), "no front matter").unwrap();
        assert!(PostInfo::extract(&BlogPost::new(dir)).unwrap().is_none());
    }
}
