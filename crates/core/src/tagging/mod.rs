//! Content-based tag suggestion.
//!
//! Suggestions come from an explicit [`TagRules`] value: a keyword table
//! matched by substring, a regex table, and parent tags implied by more
//! specific ones. Suggested tags are only ever added to a post's tags.

pub mod rules;
pub mod suggest;

pub use rules::{RulesError, TagRules};
pub use suggest::{PostContent, merge_tags, suggest_tags};
