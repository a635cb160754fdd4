use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::{Token, tokens};

fn style_of(token: Token) -> Style {
    match token {
        Token::Number => Style::new().fg(Color::Cyan),
        Token::Operator => Style::new().fg(Color::White),
        Token::Keyword => Style::new().fg(Color::Magenta).bold(),
        Token::Invalid => Style::new().fg(Color::Red).underline(),
    }
}

/// Colors stack programs as they are typed, flagging invalid instructions.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token, span) in tokens(line) {
            if span.start > curr_end {
                output.push((Style::new(), line[curr_end..span.start].to_string()));
            }
            output.push((style_of(token), line[span.clone()].to_string()));
            curr_end = span.end;
        }
        if curr_end < line.len() {
            output.push((Style::new(), line[curr_end..].to_string()));
        }

        output
    }
}
