//! Error types for evictionsim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in evictionsim.
///
/// The simulation engine itself is total over well-formed input; the only
/// engine-side failure is a zero frame capacity. The remaining variants come
/// from parsing user input and reading trace files.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame capacity must be at least 1.
    ///
    /// Signed so the parser can report the negative count it was given.
    #[error("Invalid frame capacity: {0} (must be at least 1)")]
    InvalidCapacity(i64),

    /// Frame count text is not an integer.
    #[error("Invalid frame count: {0:?}")]
    InvalidFrameCount(String),

    /// A token in a reference string is not a page number.
    ///
    /// `position` is the 0-based index of the token in the sequence.
    #[error("Invalid page reference {token:?} at position {position}")]
    InvalidPageReference { position: usize, token: String },

    /// No eviction policy goes by this name.
    #[error("Unknown eviction policy: {0:?}")]
    UnknownPolicy(String),

    /// I/O error while reading a trace file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(
            format!("{}", err),
            "Invalid frame capacity: 0 (must be at least 1)"
        );

        let err = Error::InvalidPageReference {
            position: 2,
            token: "x".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid page reference \"x\" at position 2");

        let err = Error::InvalidCapacity(-2);
        assert_eq!(
            format!("{}", err),
            "Invalid frame capacity: -2 (must be at least 1)"
        );

        let err = Error::UnknownPolicy("mru".to_string());
        assert_eq!(format!("{}", err), "Unknown eviction policy: \"mru\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io_err);
        assert!(err.source().is_some());
        assert!(Error::InvalidCapacity(0).source().is_none());
    }
}
