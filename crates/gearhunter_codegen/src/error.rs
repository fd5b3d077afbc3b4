//! Error taxonomy shared by every generator.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// A failed generation run.
///
/// Generation is all-or-nothing: every variant aborts the run before the
/// output file is touched, so a failure never leaves a partially
/// generated source behind.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A data, template, or output file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not well-formed JSON.
    #[error("{}: invalid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level value of a data file is not an array.
    #[error("{}: expected a top-level array of records, found {found}", .path.display())]
    MalformedInput { path: PathBuf, found: &'static str },

    /// An element of the top-level array is not an object.
    #[error("{}: record {index} is not an object (found {found})", .path.display())]
    MalformedRecord {
        path: PathBuf,
        index: usize,
        found: &'static str,
    },

    /// A record field is missing or carries the wrong type.
    #[error("{}: record {index}: field `{field}`: expected {expected}, found {found}", .path.display())]
    TypeValidation {
        path: PathBuf,
        index: usize,
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    /// A record reuses a key that must be unique across the data file.
    #[error("{}: record {index}: duplicate {field} {value}", .path.display())]
    DuplicateKey {
        path: PathBuf,
        index: usize,
        field: &'static str,
        value: String,
    },

    /// The template does not contain the marker token.
    #[error("{}: placeholder `{marker}` not found in template", .path.display())]
    PlaceholderNotFound { path: PathBuf, marker: String },

    /// The template contains the marker token more than once.
    #[error("{}: placeholder `{marker}` occurs {count} times, expected exactly one", .path.display())]
    PlaceholderRepeated {
        path: PathBuf,
        marker: String,
        count: usize,
    },
}
