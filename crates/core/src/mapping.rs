//! Curated tag mappings (`folder -> [tags]`) and their statistics.

use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("failed to read mapping file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse JSON in {0}: {1}")]
    ParseError(String, #[source] serde_json::Error),
}

/// Folder name to ordered tag list, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMapping {
    entries: IndexMap<String, Vec<String>>,
}

impl TagMapping {
    pub fn load(path: &Path) -> Result<Self, MappingError> {
        let s = fs::read_to_string(path)
            .map_err(|e| MappingError::ReadError(path.display().to_string(), e))?;
        let entries = serde_json::from_str(&s)
            .map_err(|e| MappingError::ParseError(path.display().to_string(), e))?;
        Ok(Self { entries })
    }

    pub fn from_entries<I, K, V, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Usage of one tag across the mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
    /// Share of posts carrying the tag, 0-100.
    pub percentage: f64,
}

/// A named bucket of tags with the counts of those present in the mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub name: String,
    pub tags: Vec<TagCount>,
}

/// Aggregate statistics over a [`TagMapping`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagSummary {
    pub total_posts: usize,
    pub unique_tags: usize,
    pub total_assignments: usize,
    pub average_tags_per_post: f64,
    /// Counts in first-seen order.
    #[serde(skip)]
    counts: IndexMap<String, usize>,
}

impl TagSummary {
    pub fn from_mapping(mapping: &TagMapping) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        let mut total_assignments = 0;

        for (_, tags) in mapping.iter() {
            for tag in tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
                total_assignments += 1;
            }
        }

        let total_posts = mapping.len();
        let average_tags_per_post = if total_posts == 0 {
            0.0
        } else {
            total_assignments as f64 / total_posts as f64
        };

        Self {
            total_posts,
            unique_tags: counts.len(),
            total_assignments,
            average_tags_per_post,
            counts,
        }
    }

    fn tag_count(&self, tag: &str, count: usize) -> TagCount {
        let percentage = if self.total_posts == 0 {
            0.0
        } else {
            count as f64 / self.total_posts as f64 * 100.0
        };
        TagCount { tag: tag.to_string(), count, percentage }
    }

    pub fn count(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// The `n` most used tags; ties keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<TagCount> {
        let mut all: Vec<TagCount> =
            self.counts.iter().map(|(tag, &count)| self.tag_count(tag, count)).collect();
        all.sort_by(|a, b| b.count.cmp(&a.count));
        all.truncate(n);
        all
    }

    /// Every tag, alphabetically.
    pub fn alphabetical(&self) -> Vec<TagCount> {
        let mut all: Vec<TagCount> =
            self.counts.iter().map(|(tag, &count)| self.tag_count(tag, count)).collect();
        all.sort_by(|a, b| a.tag.cmp(&b.tag));
        all
    }

    /// Tags of each category that occur in the mapping, most used first.
    pub fn categorize(&self, categories: &[(&str, &[&str])]) -> Vec<CategoryBreakdown> {
        categories
            .iter()
            .map(|(name, tags)| {
                let mut present: Vec<TagCount> = tags
                    .iter()
                    .filter_map(|tag| self.counts.get(*tag).map(|&c| self.tag_count(tag, c)))
                    .collect();
                present.sort_by(|a, b| b.count.cmp(&a.count));
                CategoryBreakdown { name: name.to_string(), tags: present }
            })
            .collect()
    }
}

/// The fixed buckets used by the summary report.
pub fn default_categories() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        ("Languages & Libraries", &["python", "rust", "numpy", "pandas", "scipy", "sympy"]),
        (
            "Topics",
            &[
                "machine-learning",
                "data-science",
                "statistics",
                "bayesian-statistics",
                "linear-algebra",
                "optimization",
                "time-series",
                "data-visualization",
            ],
        ),
        (
            "Tools & Platforms",
            &["excel", "git", "ide", "dev-containers", "cloud", "web-development"],
        ),
        ("Content Type", &["tutorial", "opinion", "tips", "code-challenge", "beginner-friendly"]),
        ("Industry", &["oil-and-gas", "formulaml"]),
        ("AI & Automation", &["ai", "ai-tools", "chatgpt", "automation"]),
        (
            "Other",
            &[
                "career-advice",
                "best-practices",
                "programming",
                "oop",
                "type-hints",
                "units",
                "performance",
                "mobile",
                "personal",
                "announcement",
                "general",
                "history",
                "podcast",
            ],
        ),
    ]
}
