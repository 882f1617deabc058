#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Helpers for the reference form of a parameter (`{"$ref": "..."}`).
//!
//! References are never resolved: identity is decided on the raw token, and
//! component names are only extracted for diagnostics.

use percent_encoding::percent_decode_str;
use serde_json::Value;

/// Returns the `$ref` token of a node if it is in reference form.
pub fn reference_token(value: &Value) -> Option<&str> {
    value.get("$ref").and_then(Value::as_str)
}

/// Whether the node is a reference (carries a string `$ref`).
pub fn is_reference(value: &Value) -> bool {
    reference_token(value).is_some()
}

/// Extracts a component name from a `$ref` if it points to `#/components/{section}/{name}`.
///
/// Returns `None` for external references and pointers into other sections.
pub fn component_name(ref_str: &str, section: &str) -> Option<String> {
    let pointer = ref_str.strip_prefix("#/")?;
    let segments: Vec<&str> = pointer.split('/').collect();

    if segments.len() < 3 {
        return None;
    }
    if segments[0] != "components" || segments[1] != section {
        return None;
    }

    let name = decode_pointer_segment(segments[2]);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}
