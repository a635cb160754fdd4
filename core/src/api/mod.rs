//! Public API types shared by every command.
//!
//! Internal errors (`StackError`, `LiteralError`, `PuzzleError`) are converted
//! to [`Error`] and [`Diagnostic`] at the boundary, so front ends only need to
//! know how to render one shape.

pub mod error;
pub mod options;

pub use error::{Diagnostic, Error, Severity};
pub use options::{EvalOptions, ScanOptions};
