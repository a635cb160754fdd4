use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::literal::{Literal, LiteralError, error::convert_pest_error};

#[derive(Parser)]
#[grammar = "literal/literal.pest"]
pub struct LiteralParser;

pub fn parse(source: &str) -> Result<Literal, LiteralError> {
    let mut pairs = LiteralParser::parse(Rule::main, source).map_err(convert_pest_error)?;

    // `main` wraps exactly one value followed by EOI.
    let value = pairs
        .next()
        .and_then(|main| main.into_inner().next())
        .ok_or_else(|| LiteralError::Syntax {
            expected: String::from("a value"),
            span: crate::syntax::Span::new(0, source.len()),
        })?;

    build(value)
}

fn build(pair: Pair<Rule>) -> Result<Literal, LiteralError> {
    match pair.as_rule() {
        Rule::int => pair
            .as_str()
            .parse::<i64>()
            .map(Literal::Int)
            .map_err(|_| LiteralError::OutOfRange {
                text: pair.as_str().to_string(),
                span: pair.as_span().into(),
            }),
        Rule::float => pair
            .as_str()
            .parse::<f64>()
            .map(Literal::Float)
            .map_err(|_| LiteralError::Syntax {
                expected: String::from("a number"),
                span: pair.as_span().into(),
            }),
        Rule::string => {
            let raw = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
            Ok(Literal::Str(unescape(raw)))
        }
        Rule::boolean => Ok(Literal::Bool(pair.as_str() == "True")),
        Rule::none => Ok(Literal::None),
        Rule::list => Ok(Literal::List(build_all(pair)?)),
        Rule::tuple => Ok(Literal::Tuple(build_all(pair)?)),
        _ => Err(LiteralError::Syntax {
            expected: String::from("a value"),
            span: pair.as_span().into(),
        }),
    }
}

fn build_all(pair: Pair<Rule>) -> Result<Vec<Literal>, LiteralError> {
    pair.into_inner().map(build).collect()
}

/// Resolve backslash escapes the way Python string literals do. Unknown
/// escapes are kept as written.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\n') => {}
            Some(q @ ('\\' | '\'' | '"')) => out.push(q),
            Some(kind @ ('x' | 'u')) => {
                let width = if kind == 'x' { 2 } else { 4 };
                let digits: String = chars.clone().take(width).collect();
                match decode_hex(&digits, width) {
                    Some(decoded) => {
                        out.push(decoded);
                        for _ in 0..width {
                            chars.next();
                        }
                    }
                    None => {
                        out.push('\\');
                        out.push(kind);
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn decode_hex(digits: &str, width: usize) -> Option<char> {
    if digits.len() != width || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}
