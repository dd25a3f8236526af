//! Error types for board size validation.

use std::fmt;

/// Error type for board sizes the engine refuses to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSizeError {
    /// Input could not be parsed as an unsigned integer
    NotANumber { input: String },
    /// Board size below the smallest meaningful board
    TooSmall { size: usize, min: usize },
    /// Board size whose columns or diagonals do not fit the packed words
    TooLarge { size: usize, max: usize },
}

impl BoardSizeError {
    /// Returns true for errors caused by the bit width of the packed state
    /// rather than by a malformed request.
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        matches!(self, BoardSizeError::TooLarge { .. })
    }
}

impl fmt::Display for BoardSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardSizeError::NotANumber { input } => {
                write!(f, "Board size '{input}' is not a number")
            }
            BoardSizeError::TooSmall { size, min } => {
                write!(f, "Board size {size} is too small (minimum {min})")
            }
            BoardSizeError::TooLarge { size, max } => {
                write!(
                    f,
                    "Board size {size} exceeds the packed bitboard capacity (maximum {max})"
                )
            }
        }
    }
}

impl std::error::Error for BoardSizeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_number_message() {
        let err = BoardSizeError::NotANumber {
            input: "eight".to_string(),
        };
        assert!(err.to_string().contains("'eight'"));
        assert!(!err.is_capacity_error());
    }

    #[test]
    fn test_too_small_message() {
        let err = BoardSizeError::TooSmall { size: 0, min: 1 };
        assert!(err.to_string().contains('0'));
        assert!(err.to_string().contains("minimum 1"));
    }

    #[test]
    fn test_too_large_is_capacity_error() {
        let err = BoardSizeError::TooLarge { size: 40, max: 31 };
        assert!(err.to_string().contains("40"));
        assert!(err.to_string().contains("31"));
        assert!(err.is_capacity_error());
    }

    #[test]
    fn test_error_clone() {
        let err = BoardSizeError::TooLarge { size: 32, max: 31 };
        assert_eq!(err.clone(), err);
    }
}
