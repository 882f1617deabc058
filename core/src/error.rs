//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Every failure is terminal for a run: the CLI reports it and exits non-zero.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// The source document is missing or unreadable.
    #[from(ignore)]
    #[display("Input Error: {_0}")]
    Input(String),

    /// The source document is not valid structured data.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// The destination could not be serialized or written.
    #[from(ignore)]
    #[display("Write Error: {_0}")]
    Write(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_conversion() {
        // Strings must land in General, never in one of the taxonomy variants
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_taxonomy_display() {
        assert_eq!(
            AppError::Input("missing.json".into()).to_string(),
            "Input Error: missing.json"
        );
        assert_eq!(
            AppError::Parse("bad token".into()).to_string(),
            "Parse Error: bad token"
        );
        assert_eq!(
            AppError::Write("read-only".into()).to_string(),
            "Write Error: read-only"
        );
    }
}
