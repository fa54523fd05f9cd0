//! Time expression evaluation.
//!
//! A time expression is what the user types into the "time calculation" field:
//! decimal numbers joined by `+`, e.g. `8+2+5` or `0.5 + 1.25`. The grammar is
//! addition only. Anything else is rejected rather than guessed at, including
//! other operators (`8-2`, `8*2`), exponents and `inf`/`nan`.

use thiserror::Error;

/// The only operator the grammar knows.
pub const TERM_DELIMITER: char = '+';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidExpressionError {
    #[error("time expression is empty")]
    Empty,

    #[error("time expression has an empty term at position {position}")]
    EmptyTerm { position: usize },

    #[error("'{term}' is not a decimal number")]
    NotANumber { term: String },

    #[error("time expression does not add up to a finite number")]
    NotFinite,
}

/// Evaluates a time expression into a duration.
///
/// The input is trimmed, split on `+`, and every term is trimmed and parsed as a
/// signed decimal number. The result is the plain sum, without rounding.
///
/// # Errors
///
/// - [`InvalidExpressionError::Empty`] when nothing but whitespace was given.
/// - [`InvalidExpressionError::EmptyTerm`] for a leading, trailing or doubled `+`.
/// - [`InvalidExpressionError::NotANumber`] when a term is not a decimal number.
/// - [`InvalidExpressionError::NotFinite`] when the sum overflows.
///
/// # Examples
///
/// ```
/// use ledger_core::expression::evaluate;
///
/// assert_eq!(evaluate("8+2+5"), Ok(15.0));
/// assert_eq!(evaluate(" 8.5 + 1.5 "), Ok(10.0));
/// assert!(evaluate("8++2").is_err());
/// ```
pub fn evaluate(expr: &str) -> Result<f64, InvalidExpressionError> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err(InvalidExpressionError::Empty);
    }

    let mut total = 0.0_f64;
    for (position, raw) in trimmed.split(TERM_DELIMITER).enumerate() {
        let term = raw.trim();
        if term.is_empty() {
            return Err(InvalidExpressionError::EmptyTerm { position });
        }
        total += parse_term(term)?;
    }

    if !total.is_finite() {
        return Err(InvalidExpressionError::NotFinite);
    }

    Ok(total)
}

fn parse_term(term: &str) -> Result<f64, InvalidExpressionError> {
    let not_a_number = || InvalidExpressionError::NotANumber {
        term: term.to_string(),
    };

    if !is_decimal(term) {
        return Err(not_a_number());
    }
    term.parse::<f64>().map_err(|_| not_a_number())
}

/// `-?` followed by digits with at most one `.`, and at least one digit overall.
fn is_decimal(term: &str) -> bool {
    let unsigned = term.strip_prefix('-').unwrap_or(term);

    let mut seen_digit = false;
    let mut seen_dot = false;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}
