//! Dated post folders under the blog root.

use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use walkdir::WalkDir;

/// Name of the markdown file inside each post folder.
pub const INDEX_FILE: &str = "index.md";

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("blog directory not found: {0}")]
    MissingRoot(String),

    #[error("failed to list blog directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("no index.md in {0}")]
    MissingIndex(String),

    #[error("failed to read {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to write {0}: {1}")]
    WriteError(String, #[source] std::io::Error),
}

fn date_folder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}-").expect("date folder pattern is valid"))
}

/// `2024-03-01-my-post` style folder names; numbered folders like `1_drafts` are not posts.
pub fn is_date_folder(name: &str) -> bool {
    date_folder_re().is_match(name)
}

/// A single post folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    folder: String,
    dir: PathBuf,
}

impl BlogPost {
    pub fn new(dir: PathBuf) -> Self {
        let folder =
            dir.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        Self { folder, dir }
    }

    /// Folder name, used as the post identifier in reports and mappings.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX_FILE)
    }

    pub fn has_index(&self) -> bool {
        self.index_path().is_file()
    }

    /// Publication date encoded in the folder name.
    pub fn date(&self) -> Option<NaiveDate> {
        let prefix = self.folder.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }

    /// Read the full text of `index.md`.
    pub fn read(&self) -> Result<String, BlogError> {
        let path = self.index_path();
        if !path.is_file() {
            return Err(BlogError::MissingIndex(self.folder.clone()));
        }
        fs::read_to_string(&path).map_err(|e| BlogError::ReadError(path.display().to_string(), e))
    }
}

/// Overwrite `path` with `updated` only when it differs from `original`.
///
/// Returns whether the file was written.
pub fn write_if_changed(path: &Path, original: &str, updated: &str) -> Result<bool, BlogError> {
    if original == updated {
        return Ok(false);
    }
    fs::write(path, updated).map_err(|e| BlogError::WriteError(path.display().to_string(), e))?;
    Ok(true)
}

/// The blog root directory.
#[derive(Debug, Clone)]
pub struct BlogDir {
    root: PathBuf,
}

impl BlogDir {
    pub fn open(root: &Path) -> Result<Self, BlogError> {
        if !root.is_dir() {
            return Err(BlogError::MissingRoot(root.display().to_string()));
        }
        Ok(Self { root: root.to_path_buf() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Direct subdirectories of the root, sorted by name.
    pub(crate) fn subdirs(&self) -> Result<Vec<PathBuf>, BlogError> {
        let mut dirs = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry =
                entry.map_err(|e| BlogError::WalkError(self.root.display().to_string(), e))?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }
        Ok(dirs)
    }

    /// All dated post folders, sorted by folder name.
    pub fn posts(&self) -> Result<Vec<BlogPost>, BlogError> {
        let posts = self
            .subdirs()?
            .into_iter()
            .map(BlogPost::new)
            .filter(|p| is_date_folder(p.folder()))
            .collect();
        Ok(posts)
    }

    /// Post folder by name, whether or not it exists on disk.
    pub fn post(&self, folder: &str) -> BlogPost {
        BlogPost::new(self.root.join(folder))
    }
}
