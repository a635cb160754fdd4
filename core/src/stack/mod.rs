//! Stack-machine simulator behind the `stack` command.
//!
//! A program is a whitespace-separated list of tokens run left to right
//! against an integer stack that starts out holding a single `0`:
//!
//! | token        | effect                                            |
//! |--------------|---------------------------------------------------|
//! | digits       | push the number                                   |
//! | `+ - * /`    | pop `a`, pop `b`, push `a op b` (`/` floors)      |
//! | `DUP`        | push a copy of the top value                      |
//! | `POP`        | discard the top value                             |
//!
//! Note the operand order: `a` is the value popped first, so `3 4 -` is
//! `4 - 3`. When every token has run, the top value is popped as the result.
//! Values are arbitrary-precision integers, so nothing overflows.
//!
//! ## Example
//!
//! ```
//! use stackbot_core::stack::{BigInt, Report, evaluate};
//!
//! let result = evaluate("5 DUP *", false);
//! assert_eq!(result.as_ref().map(|e| e.value.to_string()), Ok("25".to_string()));
//! assert_eq!(
//!     Report::from(result),
//!     Report::Ok { value: BigInt::from(25), trace: None }
//! );
//! ```

mod error;
mod eval;
mod instruction;
mod machine;
mod operators;
mod report;


pub use error::StackError;
pub use num_bigint::BigInt;
pub use eval::Evaluator;
pub use instruction::{Instruction, Token, classify, tokenize};
pub use machine::Stack;
pub use report::{Evaluation, Report, message};

use crate::api::EvalOptions;

/// Evaluate a program, optionally recording a trace of every step.
pub fn evaluate(instructions: &str, verbose: bool) -> Result<Evaluation, StackError> {
    evaluate_with_options(instructions, &EvalOptions { verbose })
}

/// Evaluate a program with explicit options.
#[tracing::instrument(level = "debug", skip(options))]
pub fn evaluate_with_options(
    instructions: &str,
    options: &EvalOptions,
) -> Result<Evaluation, StackError> {
    Evaluator::new(options.clone(), instructions).eval()
}
