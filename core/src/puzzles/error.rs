use thiserror::Error;

use crate::literal::LiteralError;

/// Reasons a puzzle command refuses its arguments.
///
/// The display text is the reply sent back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// An argument could not be parsed as a literal at all.
    #[error("{message}")]
    Literal {
        message: &'static str,
        input: String,
        #[source]
        error: LiteralError,
    },

    /// The argument parsed, but has the wrong shape for this puzzle.
    #[error("{0}")]
    Invalid(&'static str),

    #[error("Unknown puzzle '{0}'")]
    UnknownPuzzle(String),
}

impl PuzzleError {
    pub(super) fn literal(message: &'static str, input: &str, error: LiteralError) -> Self {
        PuzzleError::Literal {
            message,
            input: input.to_string(),
            error,
        }
    }
}
