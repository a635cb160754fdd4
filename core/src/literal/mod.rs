//! Literal arguments.
//!
//! Several puzzle commands take Python-flavoured literals as arguments, e.g.
//! `[1, 2, 3]` or `('N', 'E', 'E')`. This module parses them into [`Literal`]
//! values with a small pest grammar.
//!
//! ```
//! use stackbot_core::literal::{parse_literal, Literal};
//!
//! let value = parse_literal("[1, 'two', (3.0,)]").unwrap();
//! assert_eq!(value.to_string(), "[1, 'two', (3.0,)]");
//! assert_eq!(parse_literal("(7)").unwrap(), Literal::Int(7));
//! ```

mod error;
pub mod parser;
mod value;


pub use error::LiteralError;
pub use value::Literal;

/// Parse a single literal value.
pub fn parse_literal(source: &str) -> Result<Literal, LiteralError> {
    parser::parse(source)
}
