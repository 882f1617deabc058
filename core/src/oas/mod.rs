#![deny(missing_docs)]

//! # OpenAPI Normalization Module
//!
//! - **models**: Typed views over the raw document (verbs, identity keys).
//! - **document**: Loading and writing documents.
//! - **routes**: `search` -> `post` reconciliation per route.
//! - **params**: Parameter identity, preference rule and deduplication.
//! - **normalization**: The document-level pass.

pub mod document;
pub mod models;
pub mod normalization;
pub mod params;
pub mod ref_utils;
pub mod routes;

pub use document::{load_document, parse_document, render_document, write_document, DocumentFormat};
pub use models::{HttpMethod, IdentityKey};
pub use normalization::{count_operation_parameters, process_document};
pub use params::{deduplicate, identity_key, prefer, Decision, Preference, PreferenceRule};
pub use routes::{normalize_search_operation, SearchAction};
