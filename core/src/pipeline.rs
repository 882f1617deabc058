#![deny(missing_docs)]

//! # Normalization Pipeline
//!
//! Load -> normalize -> write, with progress sent to a [`Reporter`].
//! Nothing is written unless the whole in-memory pass succeeded.

use crate::error::{AppError, AppResult};
use crate::oas::{count_operation_parameters, load_document, process_document, write_document};
use crate::report::{ReportEvent, Reporter};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Inputs of a normalization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Source document.
    pub input: PathBuf,
    /// Destination document. May equal `input`.
    pub output: PathBuf,
    /// Run the pass and report, but skip writing.
    pub dry_run: bool,
}

impl NormalizeConfig {
    /// Config that reads `input` and writes `output`.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            dry_run: false,
        }
    }
}

/// Before/after statistics of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeSummary {
    /// Operation-level parameters in the source document.
    pub parameters_before: usize,
    /// Operation-level parameters in the normalized document.
    pub parameters_after: usize,
    /// Routes whose `search` became `post`.
    pub searches_renamed: usize,
    /// Routes whose `search` was discarded.
    pub searches_dropped: usize,
}

impl NormalizeSummary {
    /// `after - before`; negative when duplicates were removed.
    pub fn delta(&self) -> i64 {
        self.parameters_after as i64 - self.parameters_before as i64
    }
}

/// Computes statistics for a pass from the original and normalized documents
/// and the route notices it produced.
pub fn summarize(original: &Value, normalized: &Value, events: &[ReportEvent]) -> NormalizeSummary {
    let mut summary = NormalizeSummary {
        parameters_before: count_operation_parameters(original),
        parameters_after: count_operation_parameters(normalized),
        ..NormalizeSummary::default()
    };
    for event in events {
        match event {
            ReportEvent::SearchRenamed { .. } => summary.searches_renamed += 1,
            ReportEvent::SearchDropped { .. } => summary.searches_dropped += 1,
            _ => {}
        }
    }
    summary
}

/// Runs the full pipeline described by `config`.
pub fn run(config: &NormalizeConfig, reporter: &mut dyn Reporter) -> AppResult<NormalizeSummary> {
    reporter.report(ReportEvent::Reading(config.input.clone()));
    let (normalized, summary) = normalize_file(&config.input, reporter)?;

    if config.dry_run {
        reporter.report(ReportEvent::DryRun(config.output.clone()));
    } else {
        reporter.report(ReportEvent::Writing(config.output.clone()));
        write_document(&config.output, &normalized)?;
    }

    reporter.report(ReportEvent::Summary {
        before: summary.parameters_before,
        after: summary.parameters_after,
    });
    Ok(summary)
}

/// Fails unless the document at `input` is already normalized.
///
/// A document is normalized when another pass over it changes nothing.
pub fn check(input: &Path, reporter: &mut dyn Reporter) -> AppResult<NormalizeSummary> {
    reporter.report(ReportEvent::Reading(input.to_path_buf()));
    let original = load_document(input)?;
    let (normalized, summary) = normalize_value(&original, reporter);

    reporter.report(ReportEvent::Summary {
        before: summary.parameters_before,
        after: summary.parameters_after,
    });

    if normalized != original {
        return Err(AppError::General(format!(
            "{:?} is not normalized ({} parameters would become {})",
            input, summary.parameters_before, summary.parameters_after
        )));
    }
    reporter.report(ReportEvent::Normalized(input.to_path_buf()));
    Ok(summary)
}

fn normalize_file(input: &Path, reporter: &mut dyn Reporter) -> AppResult<(Value, NormalizeSummary)> {
    let original = load_document(input)?;
    Ok(normalize_value(&original, reporter))
}

fn normalize_value(original: &Value, reporter: &mut dyn Reporter) -> (Value, NormalizeSummary) {
    let mut events: Vec<ReportEvent> = Vec::new();
    let normalized = process_document(original, &mut events);
    let summary = summarize(original, &normalized, &events);
    for event in events {
        reporter.report(event);
    }
    (normalized, summary)
}
