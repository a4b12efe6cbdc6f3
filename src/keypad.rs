//! The telephone keypad letter table.
//!
//! Digits `2` through `9` carry letters; `0` and `1` carry none and pass
//! through the pipeline as literal tokens.

use crate::error::{KeypadError, Result};

/// Letters printed on each keypad key, indexed by digit.
const KEYPAD: [&[char]; 10] = [
    &[],
    &[],
    &['A', 'B', 'C'],
    &['D', 'E', 'F'],
    &['G', 'H', 'I'],
    &['J', 'K', 'L'],
    &['M', 'N', 'O'],
    &['P', 'Q', 'R', 'S'],
    &['T', 'U', 'V'],
    &['W', 'X', 'Y', 'Z'],
];

/// Whether `c` is a literal digit that splits runs and is never expanded.
pub fn is_literal(c: char) -> bool {
    c == '0' || c == '1'
}

/// Letters mapped to `digit`, in table order.
///
/// Returns `None` for literal digits and for anything that is not an ASCII
/// digit, which callers treat as "no combinations".
pub fn letters(digit: char) -> Option<&'static [char]> {
    let index = digit.to_digit(10)? as usize;
    let letters = KEYPAD[index];
    if letters.is_empty() { None } else { Some(letters) }
}

/// Whether `c` is a character accepted by strict input validation.
pub fn is_keypad_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Reject input containing anything other than the digits `0`-`9`.
pub fn validate(digits: &str) -> Result<()> {
    match digits.char_indices().find(|&(_, c)| !is_keypad_digit(c)) {
        Some((pos, c)) => Err(KeypadError::invalid_input(format!(
            "unexpected character {c:?} at position {pos} in {digits:?}"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_table() {
        assert_eq!(letters('2'), Some(&['A', 'B', 'C'][..]));
        assert_eq!(letters('7'), Some(&['P', 'Q', 'R', 'S'][..]));
        assert_eq!(letters('9'), Some(&['W', 'X', 'Y', 'Z'][..]));

        let total: usize = ('2'..='9').filter_map(letters).map(|l| l.len()).sum();
        assert_eq!(total, 26);
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(letters('0'), None);
        assert_eq!(letters('1'), None);
        assert_eq!(letters('a'), None);
        assert_eq!(letters('٣'), None);
        assert!(is_literal('0'));
        assert!(is_literal('1'));
        assert!(!is_literal('2'));
        assert!(!is_keypad_digit('*'));
    }

    #[test]
    fn test_validate() {
        assert!(validate("").is_ok());
        assert!(validate("0123456789").is_ok());

        let err = validate("98a1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: unexpected character 'a' at position 2 in \"98a1\""
        );
    }
}
