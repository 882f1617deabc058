#![deny(missing_docs)]

//! # OpenAPI Document I/O
//!
//! Loads a document into a mutable JSON tree and writes it back. The format
//! follows the file extension: `.yaml` / `.yml` are YAML, anything else JSON.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialization family of a document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON, pretty-printed on output.
    Json,
    /// YAML.
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Parses document text. The root must be a mapping.
pub fn parse_document(content: &str, format: DocumentFormat) -> AppResult<Value> {
    let value: Value = match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI JSON: {}", e)))?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI YAML: {}", e)))?,
    };

    if !value.is_object() {
        return Err(AppError::Parse(
            "OpenAPI document root must be a mapping".into(),
        ));
    }
    Ok(value)
}

/// Reads and parses the document at `path`.
pub fn load_document(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Input(format!("Failed to read {:?}: {}", path, e)))?;
    parse_document(&content, DocumentFormat::from_path(path))
}

/// Serializes a document. JSON uses two-space indentation and ends with a newline.
pub fn render_document(doc: &Value, format: DocumentFormat) -> AppResult<String> {
    match format {
        DocumentFormat::Json => serde_json::to_string_pretty(doc)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| AppError::Write(format!("Failed to serialize JSON: {}", e))),
        DocumentFormat::Yaml => serde_yaml::to_string(doc)
            .map_err(|e| AppError::Write(format!("Failed to serialize YAML: {}", e))),
    }
}

/// Writes `doc` to `path`, replacing any existing file atomically.
///
/// The content goes to a temporary file next to the destination first, so a
/// failure never leaves a truncated artifact behind.
pub fn write_document(path: &Path, doc: &Value) -> AppResult<()> {
    let rendered = render_document(doc, DocumentFormat::from_path(path))?;

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .map_err(|e| AppError::Write(format!("Failed to create output dir {:?}: {}", parent, e)))?;

    let mut tmp = NamedTempFile::new_in(parent)
        .map_err(|e| AppError::Write(format!("Failed to stage {:?}: {}", path, e)))?;
    if let Some(permissions) = output_permissions(path) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| AppError::Write(format!("Failed to stage {:?}: {}", path, e)))?;
    }
    tmp.write_all(rendered.as_bytes())
        .map_err(|e| AppError::Write(format!("Failed to stage {:?}: {}", path, e)))?;
    tmp.persist(path)
        .map_err(|e| AppError::Write(format!("Failed to write {:?}: {}", path, e.error)))?;

    Ok(())
}

/// Permissions the written file should carry: those of the file being
/// replaced, or `0644` for a new file. Temp files start out as `0600`.
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
