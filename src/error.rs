//! Error types for the org chart crate.
//!
//! Building and rendering a hierarchy never fails. Errors only arise at the
//! edges: parsing an org-chart document and writing to an output sink.

use std::io;

use thiserror::Error;

/// The main error type for the org chart crate.
///
/// # Example
///
/// ```
/// use org_chart::error::OrgError;
///
/// let error = OrgError::ConfigParseError {
///     origin: "chart.yaml".to_string(),
///     message: "missing field `root`".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Failed to parse org chart 'chart.yaml': missing field `root`"
/// );
/// ```
#[derive(Debug, Error)]
pub enum OrgError {
    /// An org-chart document could not be parsed.
    #[error("Failed to parse org chart '{origin}': {message}")]
    ConfigParseError {
        /// Where the document came from.
        origin: String,
        /// A description of the parse error.
        message: String,
    },

    /// The rendered chart could not be written to its output sink.
    #[error("Failed to write org chart: {0}")]
    Render(#[from] io::Error),
}

/// A type alias for Results that return OrgError.
pub type OrgResult<T> = Result<T, OrgError>;
