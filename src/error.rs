//! Error types for fixture generation.
//!
//! All fallible operations return `Result<T, FixtureError>` rather than
//! panicking. Usage problems (a base file that does not exist) and data
//! problems (incomplete or malformed base records) are separate variants so
//! the command line can report them differently.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors that can occur while loading a base result or writing fixtures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FixtureError {
    /// The base result file does not exist.
    #[error("base file not found: {}", path.display())]
    BaseNotFound { path: PathBuf },

    /// A required field is absent from the base result.
    ///
    /// `field` names every accepted key, e.g. `"forward (or F)"`.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// Input data is present but invalid (non-positive forward, zero tenor, NaN).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Reading the base file or writing a fixture failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The base record is not valid JSON, or a fixture could not be serialized.
    #[error("malformed json: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
