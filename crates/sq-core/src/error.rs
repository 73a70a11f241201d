use std::path::PathBuf;

use crate::validate::ValidationIssue;

/// Alias for `Result<T, ContentError>`.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur while loading quest content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A content file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A content table is not valid JSON or does not match the record shape.
    #[error("cannot parse {origin}: {source}")]
    Parse {
        /// Where the table came from (a file path or "built-in profiles").
        origin: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The content parsed but failed validation.
    #[error("invalid content: {} error(s), first: {}", errors.len(), first_message(errors))]
    Invalid {
        /// The error-level issues found.
        errors: Vec<ValidationIssue>,
    },

    /// The requested profile id does not exist in the catalog.
    #[error("profile not found: \"{0}\"")]
    ProfileNotFound(String),
}

fn first_message(errors: &[ValidationIssue]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}
