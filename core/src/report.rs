#![deny(missing_docs)]

//! # Reporting
//!
//! Human-readable progress lines are emitted through a [`Reporter`]
//! collaborator rather than printed directly, so callers choose the sink.

use std::fmt;
use std::path::PathBuf;

/// A single progress or summary notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// The source document is being read.
    Reading(PathBuf),
    /// The transformed document is being written.
    Writing(PathBuf),
    /// A route's `search` operation was moved to `post`.
    SearchRenamed {
        /// The route path.
        route: String,
    },
    /// A route's `search` operation was discarded because `post` exists.
    SearchDropped {
        /// The route path.
        route: String,
    },
    /// Writing was skipped on request.
    DryRun(PathBuf),
    /// The checked document needs no changes.
    Normalized(PathBuf),
    /// Operation-level parameter counts before and after the pass.
    Summary {
        /// Count in the source document.
        before: usize,
        /// Count in the transformed document.
        after: usize,
    },
}

impl fmt::Display for ReportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEvent::Reading(path) => write!(f, "Reading {}", path.display()),
            ReportEvent::Writing(path) => write!(f, "Writing {}", path.display()),
            ReportEvent::SearchRenamed { route } => {
                write!(f, "  {}: renamed 'search' to 'post'", route)
            }
            ReportEvent::SearchDropped { route } => {
                write!(f, "  {}: dropped 'search' ('post' already defined)", route)
            }
            ReportEvent::DryRun(path) => {
                write!(f, "Dry run: not writing {}", path.display())
            }
            ReportEvent::Normalized(path) => write!(f, "{} is normalized", path.display()),
            ReportEvent::Summary { before, after } => {
                let delta = *after as i64 - *before as i64;
                write!(
                    f,
                    "Parameters: {} before, {} after ({:+})",
                    before, after, delta
                )
            }
        }
    }
}

/// Sink for progress notices.
pub trait Reporter {
    /// Records one notice.
    fn report(&mut self, event: ReportEvent);
}

/// Prints every notice to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: ReportEvent) {
        println!("{}", event);
    }
}

/// Collects notices in memory.
impl Reporter for Vec<ReportEvent> {
    fn report(&mut self, event: ReportEvent) {
        self.push(event);
    }
}
