use std::fmt;

/// Indicates that an error occurred while editing constraints.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HelperError {
    /// Indicates that a constraint slot index was outside the configured word length.
    PositionOutOfBounds,
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HelperError::PositionOutOfBounds => {
                write!(f, "constraint position is outside the word length")
            }
        }
    }
}

impl std::error::Error for HelperError {}
