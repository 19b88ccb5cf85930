//! Error types for the search engine and the sliding puzzle.

use thiserror::Error;

/// Main error type for the crate.
///
/// Search exhaustion and cancellation are not errors; they are reported through
/// [`crate::solver::SearchOutcome`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action {action} for state {state}")]
    InvalidAction { action: String, state: String },

    #[error("instance is unsolvable: goal unreachable ({inversions} inversions)")]
    UnsolvableInstance { inversions: usize },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error("invalid board: {message}")]
    InvalidBoard { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_board(message: impl Into<String>) -> Self {
        Error::InvalidBoard {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::UnsolvableInstance { inversions: 1 };
        assert!(err.to_string().contains("1 inversions"));

        let err = Error::configuration("unknown heuristic 'foo'");
        assert_eq!(
            err.to_string(),
            "invalid configuration: unknown heuristic 'foo'"
        );
    }
}
