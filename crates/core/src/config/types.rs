use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::frontmatter::TagKey;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Directory holding the `YYYY-MM-DD-slug` post folders.
    pub blog_root: String,
    /// Curated `folder -> [tags]` JSON file used by `apply-tags` and `summary`.
    pub mapping_file: Option<String>,
    /// TOML keyword/pattern tables replacing the built-in tagging rules.
    pub rules_file: Option<String>,
    /// Key written by `apply-tags` (`tags` or `topics`).
    #[serde(default)]
    pub tag_key: TagKey,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub blog_root: PathBuf,
    pub mapping_file: Option<PathBuf>,
    pub rules_file: Option<PathBuf>,
    pub tag_key: TagKey,
    pub logging: LoggingConfig,
}
