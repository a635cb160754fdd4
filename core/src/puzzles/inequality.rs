//! Step-by-step validation of chained inequalities such as `3 < 7 > 4`.

/// Check each `a op b` link of the chain in turn.
///
/// Returns one line per link examined, each suffixed with `True`, `False`
/// or `INVALID`, then a verdict line. Checking stops at the first link that
/// does not hold. Tokens are separated by single spaces; a chain whose
/// token count is not `3, 5, 7, ...` yields just `INVALID INPUT`.
pub fn correct_inequality(expression: &str) -> Vec<String> {
    let tokens: Vec<&str> = expression.split(' ').collect();
    if tokens.len() < 3 || (tokens.len() - 3) % 2 != 0 {
        return vec![String::from("INVALID INPUT")];
    }

    let mut steps = Vec::new();
    let mut valid = true;

    for link in tokens.windows(3).step_by(2) {
        let (a, op, b) = (link[0], link[1], link[2]);
        let verdict = match (parse_operand(a), op, parse_operand(b)) {
            (Some(a), "<", Some(b)) => a < b,
            (Some(a), ">", Some(b)) => a > b,
            _ => {
                steps.push(format!("{a} {op} {b} - INVALID"));
                valid = false;
                break;
            }
        };
        steps.push(format!(
            "{a} {op} {b} - {}",
            if verdict { "True" } else { "False" }
        ));
        if !verdict {
            valid = false;
            break;
        }
    }

    steps.push(String::from(if valid {
        "VALID EXPRESSION"
    } else {
        "INVALID EXPRESSION"
    }));
    steps
}

// Operands are unsigned digit strings, compared by value.
fn parse_operand(token: &str) -> Option<u128> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_chain() {
        assert_eq!(
            correct_inequality("3 < 7 > 4"),
            vec!["3 < 7 - True", "7 > 4 - True", "VALID EXPRESSION"]
        );
    }

    #[test]
    fn test_stops_at_first_false_link() {
        assert_eq!(
            correct_inequality("3 < 2 < 9"),
            vec!["3 < 2 - False", "INVALID EXPRESSION"]
        );
    }

    #[test]
    fn test_equal_operands_are_false() {
        assert_eq!(
            correct_inequality("5 > 5"),
            vec!["5 > 5 - False", "INVALID EXPRESSION"]
        );
    }

    #[test]
    fn test_invalid_operator() {
        assert_eq!(
            correct_inequality("1 < 2 = 2"),
            vec!["1 < 2 - True", "2 = 2 - INVALID", "INVALID EXPRESSION"]
        );
    }

    #[test]
    fn test_invalid_operand() {
        assert_eq!(
            correct_inequality("x < 2"),
            vec!["x < 2 - INVALID", "INVALID EXPRESSION"]
        );
    }

    #[test]
    fn test_wrong_token_count() {
        assert_eq!(correct_inequality("1 <"), vec!["INVALID INPUT"]);
        assert_eq!(correct_inequality("1 < 2 <"), vec!["INVALID INPUT"]);
        // a double space produces an empty token
        assert_eq!(correct_inequality("1  < 2"), vec!["INVALID INPUT"]);
    }
}
