//! Error types for the pagecut library.

use thiserror::Error;

/// Result type alias for pagecut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// An operation received an argument it cannot work with,
    /// such as a bounding-box union over an empty set.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed per-page input (non-finite rectangle or font size).
    /// The offending page yields an empty result; processing continues.
    #[error("Invalid page input: {0}")]
    Validation(String),

    /// An internal invariant was violated. This indicates a defect in the
    /// analysis itself, never in the input; callers should treat it as fatal.
    #[error("Internal invariant violated: {0}")]
    Invariant(String),

    /// Error serializing the output tree.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("empty set".to_string());
        assert_eq!(err.to_string(), "Invalid argument: empty set");

        let err = Error::Validation("page 3: non-finite rectangle".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid page input: page 3: non-finite rectangle"
        );
    }
}
