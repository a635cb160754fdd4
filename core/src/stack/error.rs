//! Errors raised while running a stack program.
//!
//! All three kinds are deterministic and user-triggerable: they describe a
//! problem with the submitted program, never with the host. Each carries the
//! detail a user needs to fix the program, either the offending token or the
//! stack contents at the moment of failure.

use num_bigint::BigInt;
use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::syntax::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// A token that is neither a digit string nor a known instruction.
    #[error("Invalid Instruction: {token}")]
    InvalidInstruction { token: String, span: Span },

    /// An instruction needed more elements than the stack held.
    ///
    /// `span` is `None` when the implicit pop that produces the final value
    /// is the one that failed.
    #[error("IndexError: current stack = {}", list_repr(stack))]
    StackUnderflow {
        stack: Vec<BigInt>,
        span: Option<Span>,
    },

    /// `/` with a zero divisor. The snapshot is taken after both operands
    /// were popped.
    #[error("Division by zero: current stack = {}", list_repr(stack))]
    DivisionByZero { stack: Vec<BigInt>, span: Span },
}

impl StackError {
    /// Location of the instruction that failed, if any.
    pub fn span(&self) -> Option<&Span> {
        match self {
            StackError::InvalidInstruction { span, .. } => Some(span),
            StackError::StackUnderflow { span, .. } => span.as_ref(),
            StackError::DivisionByZero { span, .. } => Some(span),
        }
    }

    /// Stack contents captured when the error was raised.
    pub fn snapshot(&self) -> Option<&[BigInt]> {
        match self {
            StackError::InvalidInstruction { .. } => None,
            StackError::StackUnderflow { stack, .. } | StackError::DivisionByZero { stack, .. } => {
                Some(stack)
            }
        }
    }

    /// Convert to a Diagnostic for the API boundary.
    ///
    /// `source_len` is used to point at the end of the input when the error
    /// has no span of its own.
    pub fn to_diagnostic(&self, source_len: usize) -> Diagnostic {
        let (message, code, help) = match self {
            StackError::InvalidInstruction { token, .. } => (
                format!("Invalid instruction '{}'", token),
                "S001",
                vec!["Use digits, `+`, `-`, `*`, `/`, `DUP` or `POP`".to_string()],
            ),
            StackError::StackUnderflow { stack, span } => {
                let mut help = vec![format!("Stack at failure: {}", list_repr(stack))];
                if span.is_none() {
                    help.push("The program left nothing on the stack to report".to_string());
                }
                (String::from("Not enough values on the stack"), "S002", help)
            }
            StackError::DivisionByZero { stack, .. } => (
                String::from("Division by zero"),
                "S003",
                vec![
                    format!("Stack at failure: {}", list_repr(stack)),
                    "`/` divides the first popped value by the second".to_string(),
                ],
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            span: self
                .span()
                .cloned()
                .unwrap_or_else(|| Span::new(source_len, source_len)),
            help,
            code: Some(code.to_string()),
        }
    }
}

/// `[1, 2, 3]`, the way the chat replies print a stack.
fn list_repr(stack: &[BigInt]) -> String {
    let items: Vec<String> = stack.iter().map(BigInt::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages_match_chat_replies() {
        let err = StackError::InvalidInstruction {
            token: "FOO".to_string(),
            span: Span::new(0, 3),
        };
        assert_eq!(err.to_string(), "Invalid Instruction: FOO");

        let err = StackError::StackUnderflow {
            stack: vec![],
            span: None,
        };
        assert_eq!(err.to_string(), "IndexError: current stack = []");

        let err = StackError::DivisionByZero {
            stack: vec![BigInt::from(0), BigInt::from(3)],
            span: Span::new(4, 5),
        };
        assert_eq!(err.to_string(), "Division by zero: current stack = [0, 3]");

        let err = StackError::DivisionByZero {
            stack: vec![BigInt::from(u64::MAX) * 10],
            span: Span::new(0, 1),
        };
        assert_eq!(
            err.to_string(),
            "Division by zero: current stack = [184467440737095516150]"
        );
    }

    #[test]
    fn test_diagnostic_points_at_end_without_span() {
        let err = StackError::StackUnderflow {
            stack: vec![],
            span: None,
        };
        let diagnostic = err.to_diagnostic(3);
        assert_eq!(diagnostic.span, Span::new(3, 3));
        assert_eq!(diagnostic.code.as_deref(), Some("S002"));
        assert_eq!(diagnostic.help.len(), 2);
    }

    #[test]
    fn test_diagnostic_uses_token_span() {
        let err = StackError::InvalidInstruction {
            token: "FOO".to_string(),
            span: Span::new(4, 7),
        };
        let diagnostic = err.to_diagnostic(7);
        assert_eq!(diagnostic.span, Span::new(4, 7));
        assert_eq!(diagnostic.message, "Invalid instruction 'FOO'");
    }
}
