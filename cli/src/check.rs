#![deny(missing_docs)]

//! # Check Command
//!
//! Fails when normalizing the document would change it.

use std::path::PathBuf;

use oas_normalize_core::{check, AppResult, Reporter};

/// Arguments for the check command.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the OpenAPI document to verify.
    #[clap(long, default_value = "openapi.json")]
    pub input: PathBuf,
}

/// Executes the check.
pub fn execute(args: &CheckArgs, reporter: &mut dyn Reporter) -> AppResult<()> {
    check(&args.input, reporter)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas_normalize_core::{AppError, ReportEvent};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_check_passes_on_clean_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("openapi.json");
        fs::write(
            &input,
            r#"{"paths": {"/a": {"get": {"parameters": [{"in": "query", "name": "q"}]}}}}"#,
        )
        .unwrap();

        let mut events: Vec<ReportEvent> = Vec::new();
        execute(&CheckArgs { input: input.clone() }, &mut events).unwrap();
        assert_eq!(events.last(), Some(&ReportEvent::Normalized(input)));
    }

    #[test]
    fn test_check_fails_on_duplicates() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("openapi.json");
        fs::write(
            &input,
            r#"{"paths": {"/a": {"get": {"parameters": [
                {"in": "query", "name": "q"},
                {"in": "query", "name": "q"}
            ]}}}}"#,
        )
        .unwrap();

        let err = execute(&CheckArgs { input }, &mut Vec::<ReportEvent>::new()).unwrap_err();
        assert!(matches!(err, AppError::General(_)));
    }
}
