//! Puzzles about the decimal digits of a number.

use num_bigint::BigUint;

use crate::puzzles::PuzzleError;

/// Product of the decimal digits of `number`.
///
/// Only plain digit strings are accepted. Any number of digits works.
pub fn mystery_function(number: &str) -> Result<BigUint, PuzzleError> {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PuzzleError::Invalid("You must provide a positive integer"));
    }
    if number.contains('0') {
        return Ok(BigUint::ZERO);
    }
    Ok(number.bytes().map(|b| BigUint::from(b - b'0')).product())
}

/// The number formed by sorting the digits in descending order minus the
/// one formed by sorting them in ascending order.
pub fn rearranged_difference(number: &BigUint) -> BigUint {
    let mut digits: Vec<u8> = number.to_string().into_bytes();
    digits.sort_unstable();
    let ascending = digits_value(&digits);
    digits.reverse();
    let descending = digits_value(&digits);
    descending - ascending
}

fn digits_value(digits: &[u8]) -> BigUint {
    digits
        .iter()
        .fold(BigUint::ZERO, |acc, b| acc * 10u8 + BigUint::from(b - b'0'))
}

/// The first decimal digit in `text`, if any.
pub fn left_digit(text: &str) -> Option<u32> {
    text.chars().find_map(|c| c.to_digit(10))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(digits: &str) -> BigUint {
        digits.parse().unwrap()
    }

    #[test]
    fn test_mystery_function() {
        assert_eq!(mystery_function("152"), Ok(big("10")));
        assert_eq!(mystery_function("832"), Ok(big("48")));
        assert_eq!(mystery_function("7"), Ok(big("7")));
        assert_eq!(mystery_function("1023"), Ok(big("0")));
    }

    #[test]
    fn test_mystery_function_rejects_non_digits() {
        assert_eq!(
            mystery_function("-12"),
            Err(PuzzleError::Invalid("You must provide a positive integer"))
        );
        assert!(mystery_function("").is_err());
        assert!(mystery_function("1.5").is_err());
    }

    #[test]
    fn test_mystery_function_many_digits() {
        // 9^40
        assert_eq!(
            mystery_function(&"9".repeat(40)),
            Ok(big("147808829414345923316083210206383297601"))
        );
    }

    #[test]
    fn test_rearranged_difference() {
        assert_eq!(rearranged_difference(&big("972882")), big("760833"));
        assert_eq!(rearranged_difference(&big("3320707")), big("7709823"));
        assert_eq!(rearranged_difference(&big("90010")), big("90981"));
        assert_eq!(rearranged_difference(&big("0")), big("0"));
        assert_eq!(
            rearranged_difference(&big("18446744073709551615")),
            big("98666321108887633311")
        );
        assert_eq!(
            rearranged_difference(&big("123456789012345678901")),
            big("997765432098765432201")
        );
    }

    #[test]
    fn test_left_digit() {
        assert_eq!(left_digit("TrAdE2W1n95!"), Some(2));
        assert_eq!(left_digit("V3r1ta$"), Some(3));
        assert_eq!(left_digit("U//DertHe1nflu3nC3"), Some(1));
        assert_eq!(left_digit("J@v@5cR1PT"), Some(5));
        assert_eq!(left_digit("no digits"), None);
    }
}
