//! Natural ("human") string ordering.
//!
//! Strings are split into alternating text and digit runs, always starting
//! and ending with a (possibly empty) text run:
//!
//! ```text
//! "item10"  -> ["item", 10, ""]
//! "v1.2"    -> ["v", 1, ".", 2, ""]
//! ```
//!
//! Digit runs compare by value, so `item2 < item10`. Values are compared as
//! digit strings, which keeps arbitrarily long numbers exact.

use std::cmp::Ordering;

/// One run of a tokenized string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A maximal run without ASCII digits. May be empty.
    Text(&'a str),
    /// A maximal run of ASCII digits.
    Number(&'a str),
}

impl Token<'_> {
    fn rank(&self) -> u8 {
        match self {
            Token::Text(_) => 0,
            Token::Number(_) => 1,
        }
    }
}

impl Ord for Token<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            (Token::Number(a), Token::Number(b)) => compare_digits(a, b),
            // Text sorts before numbers.
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Token<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Splits `s` into alternating text and number tokens.
pub fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = s;
    loop {
        let digits_at = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        tokens.push(Token::Text(&rest[..digits_at]));
        rest = &rest[digits_at..];
        if rest.is_empty() {
            return tokens;
        }
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        tokens.push(Token::Number(&rest[..digits_end]));
        rest = &rest[digits_end..];
    }
}

/// Compares two strings naturally.
pub fn compare(a: &str, b: &str) -> Ordering {
    let left = tokenize(a);
    let right = tokenize(b);
    left.iter().cmp(right.iter())
}

/// Compares two ASCII digit strings by numeric value.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
