use core::ops::Range;

use logos::Logos;

/// Tokens of a stack program, as seen by the REPL highlighter.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\f\r]+")]
pub enum Token {
    #[regex(r"[0-9]+", priority = 3)]
    Number,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,

    #[token("DUP")]
    #[token("POP")]
    Keyword,

    // Anything else the evaluator will reject
    #[regex(r"[^ \t\n\f\r]+", priority = 1)]
    Invalid,
}

/// Every token of `line` with its byte range.
///
/// Bytes the lexer cannot match are reported as [`Token::Invalid`].
pub fn tokens(line: &str) -> Vec<(Token, Range<usize>)> {
    Token::lexer(line)
        .spanned()
        .map(|(token, span)| (token.unwrap_or(Token::Invalid), span))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(line: &str) -> Vec<Token> {
        tokens(line).into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn test_tokens() {
        assert_eq!(
            kinds("3 4 + DUP POP"),
            vec![
                Token::Number,
                Token::Number,
                Token::Operator,
                Token::Keyword,
                Token::Keyword
            ]
        );
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(kinds("dup"), vec![Token::Invalid]);
        assert_eq!(kinds("12a"), vec![Token::Invalid]);
        assert_eq!(kinds("DUPE"), vec![Token::Invalid]);
        assert_eq!(kinds("-3"), vec![Token::Invalid]);
    }

    #[test]
    fn test_spans() {
        assert_eq!(
            tokens(" 10\t*"),
            vec![(Token::Number, 1..3), (Token::Operator, 4..5)]
        );
    }
}
