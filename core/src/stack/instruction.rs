//! Tokenizing and classifying stack-machine instructions.

use core::fmt;

use num_bigint::BigInt;

use crate::syntax::Span;

/// One whitespace-delimited unit of an instruction string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            span: Span::new(start, start + text.len()),
        }
    }
}

/// Split `source` on whitespace, keeping the byte span of every token.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (index, c) in source.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(begin)) => {
                tokens.push(Token::new(&source[begin..index], begin));
                start = None;
            }
            (false, None) => start = Some(index),
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push(Token::new(&source[begin..], begin));
    }

    tokens
}

/// A classified instruction.
///
/// Classification happens once per token, before execution, so the evaluator
/// only ever dispatches on this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction<'a> {
    /// A token made only of ASCII decimal digits, of any length.
    PushLiteral(BigInt),
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `DUP`
    Duplicate,
    /// `POP`
    Pop,
    /// Anything else. Executing it fails the whole program.
    Unrecognized(&'a str),
}

/// Classify a single token.
///
/// Only ASCII digits make a number. Signs, decimal points and digits from
/// other scripts are all unrecognized.
pub fn classify(token: &str) -> Instruction<'_> {
    match token {
        "+" => Instruction::Add,
        "-" => Instruction::Subtract,
        "*" => Instruction::Multiply,
        "/" => Instruction::Divide,
        "DUP" => Instruction::Duplicate,
        "POP" => Instruction::Pop,
        digits if is_literal(digits) => BigInt::parse_bytes(digits.as_bytes(), 10)
            .map_or(Instruction::Unrecognized(digits), Instruction::PushLiteral),
        other => Instruction::Unrecognized(other),
    }
}

fn is_literal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

impl Instruction<'_> {
    /// The verb used in the execution trace for arithmetic instructions.
    pub fn verb(&self) -> Option<&'static str> {
        match self {
            Instruction::Add => Some("Add"),
            Instruction::Subtract => Some("Subtract"),
            Instruction::Multiply => Some("Multiply"),
            Instruction::Divide => Some("Divide"),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::PushLiteral(n) => write!(f, "{n}"),
            Instruction::Add => f.write_str("+"),
            Instruction::Subtract => f.write_str("-"),
            Instruction::Multiply => f.write_str("*"),
            Instruction::Divide => f.write_str("/"),
            Instruction::Duplicate => f.write_str("DUP"),
            Instruction::Pop => f.write_str("POP"),
            Instruction::Unrecognized(token) => f.write_str(token),
        }
    }
}
