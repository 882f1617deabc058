#![deny(missing_docs)]

//! # Normalize Command
//!
//! Reads a document, collapses redundant parameter declarations and writes
//! the result.

use std::path::PathBuf;

use oas_normalize_core::{run, AppResult, NormalizeConfig, Reporter};

/// Arguments for the normalize command.
#[derive(clap::Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Path to the source OpenAPI document (JSON, or YAML by extension).
    #[clap(long, default_value = "openapi.json")]
    pub input: PathBuf,

    /// Path for the normalized document. May be the same as `--input`.
    #[clap(long, default_value = "openapi.normalized.json")]
    pub output: PathBuf,

    /// Report what would change without writing the output.
    #[clap(long)]
    pub dry_run: bool,
}

impl From<&NormalizeArgs> for NormalizeConfig {
    fn from(args: &NormalizeArgs) -> Self {
        NormalizeConfig {
            input: args.input.clone(),
            output: args.output.clone(),
            dry_run: args.dry_run,
        }
    }
}

/// Executes the normalization.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `reporter` - Sink for progress lines.
pub fn execute(args: &NormalizeArgs, reporter: &mut dyn Reporter) -> AppResult<()> {
    let summary = run(&NormalizeConfig::from(args), reporter)?;
    tracing::debug!(
        renamed = summary.searches_renamed,
        dropped = summary.searches_dropped,
        delta = summary.delta(),
        "normalization finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas_normalize_core::{load_document, AppError, ReportEvent};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_execute_writes_normalized_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("openapi.json");
        let output = dir.path().join("openapi.normalized.json");

        fs::write(
            &input,
            r#"{
  "paths": {
    "/items": {
      "parameters": [{ "in": "query", "name": "limit" }],
      "get": {
        "parameters": [
          { "in": "query", "name": "limit", "schema": { "type": "integer", "enum": [1, 2] } },
          { "in": "query", "name": "offset" }
        ]
      }
    }
  }
}"#,
        )
        .unwrap();

        let args = NormalizeArgs {
            input: input.clone(),
            output: output.clone(),
            dry_run: false,
        };
        let mut events: Vec<ReportEvent> = Vec::new();
        execute(&args, &mut events).unwrap();

        let doc = load_document(&output).unwrap();
        let params = doc["paths"]["/items"]["get"]["parameters"]
            .as_array()
            .unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0]["schema"]["enum"][1], 2);
        assert_eq!(params[1]["name"], "offset");
    }

    #[test]
    fn test_execute_missing_input() {
        let dir = tempdir().unwrap();
        let args = NormalizeArgs {
            input: dir.path().join("missing.json"),
            output: dir.path().join("out.json"),
            dry_run: false,
        };
        let err = execute(&args, &mut Vec::<ReportEvent>::new()).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
        assert!(!args.output.exists());
    }

    #[test]
    fn test_execute_in_place_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(
            &path,
            "paths:\n  /find:\n    search:\n      operationId: find\n",
        )
        .unwrap();

        let args = NormalizeArgs {
            input: path.clone(),
            output: path.clone(),
            dry_run: false,
        };
        execute(&args, &mut Vec::<ReportEvent>::new()).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc["paths"]["/find"]["post"]["operationId"], "find");
        assert!(doc["paths"]["/find"].get("search").is_none());
    }
}
