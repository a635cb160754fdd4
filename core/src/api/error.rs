//! Public error types for the stackbot API.
//!
//! This module defines the error shapes exposed to front ends. Internal
//! errors are converted to these public types at API boundaries.

use core::fmt;

use crate::literal::LiteralError;
use crate::puzzles::PuzzleError;
use crate::stack::StackError;
use crate::syntax::Span;

/// Public error type for all stackbot commands.
#[derive(Debug)]
pub enum Error {
    /// A stack program failed.
    Evaluation {
        diagnostic: Diagnostic,
        source: String,
    },

    /// A command argument could not be read.
    Input {
        diagnostic: Diagnostic,
        source: String,
    },

    /// A puzzle rejected otherwise well-formed arguments.
    Puzzle(String),
}

impl Error {
    pub fn evaluation(err: &StackError, source: &str) -> Self {
        Error::Evaluation {
            diagnostic: err.to_diagnostic(source.len()),
            source: source.to_string(),
        }
    }

    pub fn input(err: &LiteralError, source: &str) -> Self {
        Error::Input {
            diagnostic: err.to_diagnostic(),
            source: source.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Evaluation { diagnostic, .. } => {
                write!(f, "Evaluation failed: {}", diagnostic.message)
            }
            Error::Input { diagnostic, .. } => write!(f, "Invalid input: {}", diagnostic.message),
            Error::Puzzle(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<PuzzleError> for Error {
    fn from(err: PuzzleError) -> Self {
        match err {
            PuzzleError::Literal { input, error, .. } => Error::input(&error, &input),
            other => Error::Puzzle(other.to_string()),
        }
    }
}

/// A diagnostic message with a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Help lines suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "S001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;

        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &self.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}
