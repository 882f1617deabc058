#![deny(missing_docs)]

//! # OAS Normalize Core
//!
//! Collapses redundant OpenAPI parameter declarations. Route-scoped and
//! operation-scoped parameters are merged per operation and reduced to one
//! canonical entry per identity; the non-standard `search` verb is folded
//! into `post`.

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) document model, I/O and normalization passes.
pub mod oas;

/// Load -> normalize -> write orchestration.
pub mod pipeline;

/// Progress reporting sinks.
pub mod report;

pub use error::{AppError, AppResult};
pub use oas::{
    count_operation_parameters, deduplicate, identity_key, load_document, prefer,
    process_document, write_document, DocumentFormat, HttpMethod, IdentityKey, Preference,
    PreferenceRule,
};
pub use pipeline::{check, run, summarize, NormalizeConfig, NormalizeSummary};
pub use report::{ConsoleReporter, ReportEvent, Reporter};
