#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! Lightweight typed views over the raw JSON tree. The document itself stays a
//! `serde_json::Value` so that every field the pass does not touch is carried
//! through unchanged.

use std::fmt;

/// Field holding the route-scoped and operation-scoped parameter lists.
pub const PARAMETERS: &str = "parameters";

/// Top-level field holding the route map.
pub const PATHS: &str = "paths";

/// Non-standard verb slot folded into `post` by the route normalizer.
pub const SEARCH: &str = "search";

/// The fixed set of standard HTTP verbs an operation may be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `get`
    Get,
    /// `post`
    Post,
    /// `put`
    Put,
    /// `delete`
    Delete,
    /// `patch`
    Patch,
    /// `head`
    Head,
    /// `options`
    Options,
    /// `trace`
    Trace,
}

impl HttpMethod {
    /// All standard verbs, in the order operations are processed.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Trace,
    ];

    /// The lowercase field name used in a Path Item Object.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
            HttpMethod::Trace => "trace",
        }
    }

    /// Parses a Path Item field name. Only exact lowercase names match.
    pub fn from_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == field)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The deduplication key of a parameter.
///
/// Two parameters denote the same logical parameter iff their keys are equal.
/// Schema differences never split an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    /// A `$ref` parameter, keyed on the raw reference token.
    Reference(String),
    /// An inline parameter keyed on its `(in, name)` pair.
    Inline {
        /// The `in` field, or empty when absent.
        location: String,
        /// The `name` field, or empty when absent.
        name: String,
    },
    /// An inline parameter with neither `in` nor `name`.
    ///
    /// Keyed additionally on a structural fingerprint of its schema so that
    /// unrelated malformed entries do not collapse into one another.
    Degenerate {
        /// The `in` field, or empty when absent.
        location: String,
        /// The `name` field, or empty when absent.
        name: String,
        /// Reference token or canonical serialization of the schema.
        fingerprint: String,
    },
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityKey::Reference(token) => write!(f, "ref:{}", token),
            IdentityKey::Inline { location, name } => write!(f, "{}:{}", location, name),
            IdentityKey::Degenerate {
                location,
                name,
                fingerprint,
            } => write!(f, "{}:{}:{}", location, name, fingerprint),
        }
    }
}
