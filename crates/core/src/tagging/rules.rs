//! Keyword and pattern tables used for tag suggestion.

use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read rules file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("invalid pattern for tag '{0}': {1}")]
    BadPattern(String, #[source] regex::Error),
}

/// Tag suggested when any keyword occurs in the text.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub tag: String,
    pub keywords: Vec<String>,
}

/// Tag suggested when the (case-insensitive) pattern matches the text.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub tag: String,
    pub pattern: Regex,
}

/// Immutable suggestion tables.
#[derive(Debug, Clone, Default)]
pub struct TagRules {
    keywords: Vec<KeywordRule>,
    patterns: Vec<PatternRule>,
    implies: Vec<(String, Vec<String>)>,
}

/// On-disk form of [`TagRules`].
#[derive(Debug, Deserialize, Default)]
struct RulesFile {
    #[serde(default)]
    keywords: IndexMap<String, Vec<String>>,
    #[serde(default)]
    patterns: IndexMap<String, String>,
    #[serde(default)]
    implies: IndexMap<String, Vec<String>>,
}

impl TagRules {
    /// Empty tables; nothing is ever suggested.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keywords(mut self, tag: &str, keywords: &[&str]) -> Self {
        self.keywords.push(KeywordRule {
            tag: tag.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        });
        self
    }

    /// Add a pattern rule. Patterns always match case-insensitively.
    pub fn with_pattern(mut self, tag: &str, pattern: &str) -> Result<Self, RulesError> {
        self.push_pattern(tag, pattern)?;
        Ok(self)
    }

    fn push_pattern(&mut self, tag: &str, pattern: &str) -> Result<(), RulesError> {
        let regex = Regex::new(&format!("(?i){pattern}"))
            .map_err(|e| RulesError::BadPattern(tag.to_string(), e))?;
        self.patterns.push(PatternRule { tag: tag.to_string(), pattern: regex });
        Ok(())
    }

    /// Whenever `tag` is suggested, also suggest `parents`.
    pub fn with_implication(mut self, tag: &str, parents: &[&str]) -> Self {
        self.implies
            .push((tag.to_string(), parents.iter().map(|p| p.to_string()).collect()));
        self
    }

    pub fn keywords(&self) -> &[KeywordRule] {
        &self.keywords
    }

    pub fn patterns(&self) -> &[PatternRule] {
        &self.patterns
    }

    pub fn implications(&self) -> &[(String, Vec<String>)] {
        &self.implies
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.patterns.is_empty()
    }

    /// Load tables from a TOML file with `[keywords]`, `[patterns]` and
    /// `[implies]` sections. The file replaces the built-in tables.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let s = fs::read_to_string(path)
            .map_err(|e| RulesError::ReadError(path.display().to_string(), e))?;
        Self::parse_rules(&s, &path.display().to_string())
    }

    pub fn from_toml_str(s: &str) -> Result<Self, RulesError> {
        Self::parse_rules(s, "<string>")
    }

    fn parse_rules(s: &str, origin: &str) -> Result<Self, RulesError> {
        let file: RulesFile =
            toml::from_str(s).map_err(|e| RulesError::ParseError(origin.to_string(), e))?;

        let mut rules = Self::new();
        for (tag, keywords) in &file.keywords {
            let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();
            rules = rules.with_keywords(tag, &keywords);
        }
        for (tag, pattern) in &file.patterns {
            rules.push_pattern(tag, pattern)?;
        }
        for (tag, parents) in &file.implies {
            let parents: Vec<&str> = parents.iter().map(String::as_str).collect();
            rules = rules.with_implication(tag, &parents);
        }
        Ok(rules)
    }

    /// Built-in tables for a data science and programming blog.
    pub fn default_rules() -> Self {
        let mut rules = Self::new();
        for (tag, keywords) in DEFAULT_KEYWORDS {
            rules = rules.with_keywords(tag, keywords);
        }
        for (tag, pattern) in DEFAULT_PATTERNS {
            if let Err(e) = rules.push_pattern(tag, pattern) {
                tracing::warn!("skipping built-in pattern: {e}");
            }
        }
        for (tag, parents) in DEFAULT_IMPLIES {
            rules = rules.with_implication(tag, parents);
        }
        rules
    }
}

const DEFAULT_KEYWORDS: &[(&str, &[&str])] = &[
    ("python", &["python", "pythonic", "py", "pip", "conda", "anaconda", "pypi"]),
    (
        "machine learning",
        &[
            "machine learning",
            "ml model",
            "regression",
            "classification",
            "random forest",
            "neural network",
            "training",
            "prediction",
            "supervised",
            "unsupervised",
            "overfitting",
            "underfitting",
        ],
    ),
    ("data science", &["data science", "data analysis", "analytics", "dataset", "data-driven"]),
    ("pandas", &["pandas", "dataframe", "pd.", "series"]),
    ("numpy", &["numpy", "np.", "array"]),
    (
        "statistics",
        &[
            "statistics",
            "statistical",
            "probability",
            "distribution",
            "bayesian",
            "frequentist",
            "hypothesis",
            "p-value",
        ],
    ),
    ("excel", &["excel", "spreadsheet", "xlsx", "workbook"]),
    ("programming", &["programming", "coding", "developer", "software", "code"]),
    (
        "web development",
        &["web app", "flask", "django", "dash", "fastapi", "html", "css", "javascript"],
    ),
    (
        "data visualization",
        &["visualization", "plotting", "chart", "graph", "matplotlib", "seaborn", "plotly", "d3"],
    ),
    (
        "oil and gas",
        &[
            "oil",
            "gas",
            "petroleum",
            "reservoir",
            "drilling",
            "production forecast",
            "well",
            "decline curve",
        ],
    ),
    ("automation", &["automation", "automate", "automated", "scripting"]),
    ("career", &["career", "job", "interview", "resume", "networking"]),
    ("tutorial", &["tutorial", "how to", "guide", "step by step", "walkthrough"]),
    ("rust", &["rust", "rustlang", "cargo"]),
    ("git", &["git", "github", "version control", "commit", "branch", "merge"]),
    ("docker", &["docker", "container", "containerization"]),
    ("sql", &["sql", "database", "query", "sqlite", "postgresql", "mysql"]),
    ("time series", &["time series", "forecasting", "arima", "sarimax", "temporal"]),
    ("best practices", &["best practice", "clean code", "code quality", "refactoring"]),
    ("ai", &["ai", "artificial intelligence", "chatgpt", "gpt", "llm", "claude"]),
    ("testing", &["testing", "test", "pytest", "unittest", "tdd"]),
    ("performance", &["performance", "optimization", "speed", "efficiency", "benchmark"]),
    (
        "beginners",
        &["beginner", "getting started", "introduction", "basics", "fundamentals"],
    ),
    ("linear algebra", &["linear algebra", "matrix", "vector", "eigenvalue"]),
    ("scipy", &["scipy", "scientific computing"]),
    ("cloud", &["cloud", "aws", "azure", "gcp", "deployment"]),
    ("remote work", &["remote work", "work from home", "wfh"]),
    ("jupyter", &["jupyter", "notebook", "ipynb"]),
    ("vscode", &["vscode", "vs code", "visual studio code"]),
    ("pycharm", &["pycharm"]),
    ("linear programming", &["linear programming", "optimization", "objective function"]),
    ("enum", &["enum", "enumeration"]),
    ("type hints", &["type hint", "typing", "annotation"]),
    ("formulas", &["formula", "equation", "mathematical"]),
    ("units", &["units", "measurement", "conversion"]),
    ("dev containers", &["dev container", "devcontainer"]),
    ("chatgpt", &["chatgpt", "gpt-4", "openai"]),
    ("mcp", &["mcp", "model context protocol"]),
];

const DEFAULT_PATTERNS: &[(&str, &str)] = &[
    ("code challenge", r"(code challenge|puzzle|quiz)"),
    ("opinion", r"(i think|in my opinion|my favorite|i believe|i'm falling for)"),
    ("tips", r"(tip|trick|hack|pitfall|mistake)"),
];

const DEFAULT_IMPLIES: &[(&str, &[&str])] = &[
    ("pandas", &["python"]),
    ("numpy", &["python"]),
    ("scipy", &["python"]),
    ("jupyter", &["python"]),
    ("pycharm", &["python"]),
];
