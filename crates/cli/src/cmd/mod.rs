pub mod analyze;
pub mod apply_tags;
pub mod doctor;
pub mod fix_format;
pub mod fix_titles;
pub mod output;
pub mod summary;
pub mod tag;
pub mod thumbnails;

use blogfm_core::blog::{BlogDir, BlogPost};
use blogfm_core::config::{ConfigError, ResolvedConfig};
use blogfm_core::frontmatter::TagKey;
use std::path::{Path, PathBuf};

/// Command-line overrides plus whatever the config file resolved to.
///
/// A broken config is only fatal once a command needs a value the flags
/// did not supply.
pub struct Context {
    pub config_path: Option<PathBuf>,
    pub config: Result<ResolvedConfig, ConfigError>,
    pub blog_dir: Option<PathBuf>,
}

impl Context {
    pub fn new(
        config_path: Option<PathBuf>,
        config: Result<ResolvedConfig, ConfigError>,
        blog_dir: Option<PathBuf>,
    ) -> Self {
        Self { config_path, config, blog_dir }
    }

    fn resolved(&self) -> &ResolvedConfig {
        match &self.config {
            Ok(rc) => rc,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    }

    pub fn blog_root(&self) -> PathBuf {
        match &self.blog_dir {
            Some(p) => p.clone(),
            None => self.resolved().blog_root.clone(),
        }
    }

    /// Open the blog root, exiting when it does not exist.
    pub fn open_blog(&self) -> BlogDir {
        let root = self.blog_root();
        match BlogDir::open(&root) {
            Ok(blog) => blog,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    pub fn mapping_file(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(p) = flag {
            return p.to_path_buf();
        }
        match self.resolved().mapping_file.clone() {
            Some(p) => p,
            None => {
                eprintln!("Error: no mapping file (pass --mapping or set mapping_file)");
                std::process::exit(1);
            }
        }
    }

    /// Rules file from the flag or the profile; `None` means built-in rules.
    pub fn rules_file(&self, flag: Option<&Path>) -> Option<PathBuf> {
        if let Some(p) = flag {
            return Some(p.to_path_buf());
        }
        self.config.as_ref().ok().and_then(|rc| rc.rules_file.clone())
    }

    pub fn tag_key(&self, flag: Option<TagKey>) -> TagKey {
        flag.or_else(|| self.config.as_ref().ok().map(|rc| rc.tag_key)).unwrap_or_default()
    }
}

/// Dated post folders under the root, exiting when the listing fails.
pub fn list_posts(blog: &BlogDir) -> Vec<BlogPost> {
    match blog.posts() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn print_header(title: &str) {
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

pub fn print_rule() {
    println!("{}", "=".repeat(60));
}
