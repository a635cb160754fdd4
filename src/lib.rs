//! Stackbot - command logic for a community chat bot
//!
//! # Overview
//!
//! Stackbot answers a handful of chat commands. None of them depend on a
//! particular chat platform; each takes the text a user typed and produces
//! the reply text:
//!
//! - `stack`: a tiny stack-machine simulator, optionally with an execution trace
//! - puzzles: small exercises over Python-style literal arguments
//! - rickroll detection for the links in a message
//! - quoting a message verbatim and building cheat sheet requests
//!
//! # Quick Start
//!
//! ```
//! use stackbot::{EvalOptions, run_stack};
//!
//! let evaluation = run_stack("3 4 +", &EvalOptions::default()).unwrap();
//! assert_eq!(evaluation.message(), "Final value: 7");
//!
//! let verbose = EvalOptions { verbose: true };
//! let evaluation = run_stack("5 DUP *", &verbose).unwrap();
//! assert_eq!(
//!     evaluation.trace.unwrap(),
//!     vec!["Push 5", "Pop 5, Push 5, Push 5", "Pop 5, Pop 5, Multiply, Push 25"]
//! );
//! ```
//!
//! # Errors
//!
//! Failures carry a [`Diagnostic`] pointing into the input, which
//! [`render_error`] turns into an annotated report:
//!
//! ```
//! use stackbot::{EvalOptions, render_error_to_string_no_color, run_stack};
//!
//! let err = run_stack("1 FOO", &EvalOptions::default()).unwrap_err();
//! let report = render_error_to_string_no_color(&err);
//! assert!(report.contains("Invalid instruction 'FOO'"));
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from stackbot_core
pub use stackbot_core::api::{Diagnostic, Error, EvalOptions, ScanOptions, Severity};

// Re-export command modules
pub use stackbot_core::{links, literal, puzzles, stack, text};
pub use stackbot_core::stack::{Evaluation, Report, StackError};

/// Run a stack program, converting failures to the public [`Error`].
///
/// Use [`stack::evaluate`] directly to get the raw [`StackError`], e.g. to
/// reply with its chat message.
pub fn run_stack(instructions: &str, options: &EvalOptions) -> Result<Evaluation, Error> {
    stack::evaluate_with_options(instructions, options)
        .map_err(|err| Error::evaluation(&err, instructions))
}

/// Run a puzzle command by name, converting failures to the public [`Error`].
pub fn run_puzzle(name: &str, args: &str) -> Result<String, Error> {
    Ok(puzzles::run(name, args)?)
}
