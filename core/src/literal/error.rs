use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::literal::parser::Rule;
use crate::syntax::Span;

/// Failure to read a literal argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// The input is not a well-formed literal.
    #[error("expected {expected} at offset {}", .span.0.start)]
    Syntax { expected: String, span: Span },

    /// An integer that does not fit in 64 bits.
    #[error("integer literal '{text}' is out of range")]
    OutOfRange { text: String, span: Span },
}

impl LiteralError {
    pub fn span(&self) -> &Span {
        match self {
            LiteralError::Syntax { span, .. } | LiteralError::OutOfRange { span, .. } => span,
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match self {
            LiteralError::Syntax { expected, .. } => (
                format!("Expected {}", expected),
                "L001",
                vec![
                    "Arguments are literals such as `[1, 2, 3]`, `('N', 'E')` or `'text'`"
                        .to_string(),
                ],
            ),
            LiteralError::OutOfRange { text, .. } => (
                format!("Integer literal '{}' does not fit in 64 bits", text),
                "L002",
                vec![],
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            span: self.span().clone(),
            help,
            code: Some(code.to_string()),
        }
    }
}

/// Convert Pest error to a human-readable LiteralError
pub(super) fn convert_pest_error(err: pest::error::Error<Rule>) -> LiteralError {
    use pest::error::{ErrorVariant, InputLocation};

    let span = match err.location {
        InputLocation::Pos(pos) => Span(pos..pos),
        InputLocation::Span((start, end)) => Span(start..end),
    };

    let expected = match err.variant {
        ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => {
            let mut names: Vec<&str> = Vec::new();
            for name in positives.iter().map(rule_name) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
            join_alternatives(&names)
        }
        ErrorVariant::ParsingError { .. } => String::from("end of input"),
        ErrorVariant::CustomError { message } => message,
    };

    LiteralError::Syntax { expected, span }
}

fn rule_name(rule: &Rule) -> &'static str {
    match rule {
        Rule::EOI => "end of input",
        Rule::single_quoted | Rule::double_quoted => "a closing quote",
        _ => "a value",
    }
}

fn join_alternatives(names: &[&str]) -> String {
    match names {
        [] => String::from("a value"),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}
