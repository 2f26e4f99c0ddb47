//! Error types for workout-core.

use thiserror::Error;

/// Result type alias using PatternError.
pub type Result<T> = std::result::Result<T, PatternError>;

/// Errors raised while building the matcher cascade.
///
/// Parsing itself is total; these only surface when a built-in pattern
/// fails to compile, which is a startup defect.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern for {matcher} matcher: {source}")]
    InvalidPattern {
        matcher: &'static str,
        #[source]
        source: regex::Error,
    },
}
