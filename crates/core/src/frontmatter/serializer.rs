//! Serialization of a split document back to text.

use super::types::{DELIMITER, ParsedDocument};

/// Reassemble a document as `prefix --- front_matter --- body`.
pub fn serialize(doc: &ParsedDocument) -> String {
    let mut out = String::with_capacity(
        doc.prefix.len() + doc.front_matter.len() + doc.body.len() + 2 * DELIMITER.len(),
    );
    out.push_str(&doc.prefix);
    out.push_str(DELIMITER);
    out.push_str(&doc.front_matter);
    out.push_str(DELIMITER);
    out.push_str(&doc.body);
    out
}
