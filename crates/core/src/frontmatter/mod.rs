//! Front matter splitting, field extraction, rewriting, and serialization.
//!
//! This module provides functionality to:
//! - Split a document into prefix, front matter text, and body
//! - Extract scalar fields and bracketed tag lists from the front matter text
//! - Rewrite the tag list and repair malformed scalar values
//! - Serialize the document back without perturbing untouched bytes

pub mod modifier;
pub mod parser;
pub mod serializer;
pub mod types;

pub use modifier::{format_list, replace_list, rewrite_scalar_suffix};
pub use parser::{extract_date, extract_list, extract_scalar, extract_tags, parse};
pub use serializer::serialize;
pub use types::{DELIMITER, FrontmatterParseError, ParsedDocument, TagKey};
