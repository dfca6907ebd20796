use regex::Regex;
use std::sync::LazyLock;

use crate::error::ParseError;
use crate::polynomial::Polynomial;

/// Largest exponent the parser will allocate a sequence for. Input past
/// this is rejected rather than allocating unboundedly.
pub const MAX_DEGREE: usize = 1000;

static EXPONENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"x\^(\d+)").unwrap());
static TERM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[+-]?[^+-]+").unwrap());
static NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+)?)").unwrap());

/// Parse a single-variable polynomial into its coefficient sequence,
/// highest degree first.
///
/// Spaces are stripped and every `-` becomes a signed term boundary, so
/// `"x^3 + 2x^2 - 5x + 6"` splits into `x^3`, `+2x^2`, `-5x`, `+6` and
/// parses to `[1, 2, -5, 6]`. Absent terms stay zero. A duplicated
/// degree is overwritten, not summed; the last occurrence wins.
pub fn parse(text: &str) -> Result<Polynomial, ParseError> {
    let normalized = text.replace(' ', "").replace('-', "+-");
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }

    let degree = polynomial_degree(&normalized)?;
    let mut coefficients = vec![0.0; degree + 1];

    for found in TERM.find_iter(&normalized) {
        let term = found.as_str();
        if term.contains('x') {
            let coefficient = term_coefficient(term)?;
            coefficients[degree - term_degree(term)?] = coefficient;
        } else {
            coefficients[degree] = constant_value(term)?;
        }
    }

    Ok(Polynomial::new(coefficients))
}

/// Degree of the whole polynomial: the maximum explicit exponent, 1 if
/// only a bare `x` occurs, 0 for a pure constant.
fn polynomial_degree(normalized: &str) -> Result<usize, ParseError> {
    let mut max: Option<usize> = None;
    for caps in EXPONENT.captures_iter(normalized) {
        let digits = &caps[1];
        let exponent: usize = digits
            .parse()
            .map_err(|_| ParseError::DegreeTooLarge(digits.to_string()))?;
        if exponent > MAX_DEGREE {
            return Err(ParseError::DegreeTooLarge(digits.to_string()));
        }
        max = Some(max.map_or(exponent, |m| m.max(exponent)));
    }
    Ok(match max {
        Some(degree) => degree,
        None if normalized.contains('x') => 1,
        None => 0,
    })
}

/// Degree of one term: its own `x^n` exponent, or 1 for a bare `x`.
fn term_degree(term: &str) -> Result<usize, ParseError> {
    if !term.contains('^') {
        return Ok(1);
    }
    let caps = EXPONENT
        .captures(term)
        .ok_or_else(|| ParseError::InvalidTerm(term.to_string()))?;
    caps[1]
        .parse()
        .map_err(|_| ParseError::InvalidTerm(term.to_string()))
}

/// Leading signed numeral of a variable term. An empty numeral or a lone
/// sign means an implicit 1 or -1.
fn term_coefficient(term: &str) -> Result<f64, ParseError> {
    let numeral = NUMERAL
        .captures(term)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str());
    match numeral {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => numeral
            .parse()
            .map_err(|_| ParseError::InvalidTerm(term.to_string())),
    }
}

fn constant_value(term: &str) -> Result<f64, ParseError> {
    let value: f64 = term
        .parse()
        .map_err(|_| ParseError::InvalidTerm(term.to_string()))?;
    if !value.is_finite() {
        return Err(ParseError::NonFiniteTerm(term.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coeffs(text: &str) -> Vec<f64> {
        parse(text).unwrap().into_coefficients()
    }

    #[test]
    fn test_cubic_with_all_terms() {
        assert_eq!(coeffs("x^3 + 2x^2 - 5x + 6"), vec![1.0, 2.0, -5.0, 6.0]);
    }

    #[test]
    fn test_spaces_are_irrelevant() {
        assert_eq!(coeffs("x^3+2x^2-5x+6"), coeffs("x ^ 3 + 2 x^2 - 5x + 6"));
    }

    #[test]
    fn test_pure_constant() {
        assert_eq!(coeffs("7"), vec![7.0]);
        assert_eq!(coeffs("-3.5"), vec![-3.5]);
    }

    #[test]
    fn test_bare_variable() {
        assert_eq!(coeffs("x"), vec![1.0, 0.0]);
        assert_eq!(coeffs("-x"), vec![-1.0, 0.0]);
        assert_eq!(coeffs("3x + 1"), vec![3.0, 1.0]);
    }

    #[test]
    fn test_missing_terms_stay_zero() {
        assert_eq!(coeffs("x^3 - 1"), vec![1.0, 0.0, 0.0, -1.0]);
        assert_eq!(coeffs("x^4"), vec![1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unit_coefficients() {
        assert_eq!(coeffs("x^2 - x + 1"), vec![1.0, -1.0, 1.0]);
        assert_eq!(coeffs("+x^2"), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_decimal_coefficients() {
        assert_eq!(coeffs("2.5x + 1"), vec![2.5, 1.0]);
        assert_eq!(coeffs("0.5x^2 - 0.25"), vec![0.5, 0.0, -0.25]);
        assert_eq!(coeffs(".5x"), vec![0.5, 0.0]);
    }

    #[test]
    fn test_term_order_is_free() {
        assert_eq!(coeffs("6 + x"), vec![1.0, 6.0]);
        assert_eq!(coeffs("-5x + x^3 + 6 + 2x^2"), vec![1.0, 2.0, -5.0, 6.0]);
    }

    #[test]
    fn test_duplicate_degree_overwrites_not_sums() {
        // Later occurrence wins; terms of equal degree are never summed.
        assert_eq!(coeffs("x + x"), vec![1.0, 0.0]);
        assert_eq!(coeffs("3 + 4"), vec![4.0]);
        assert_eq!(coeffs("2x^2 + 5x^2"), vec![5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_uninterpretable_term_fails() {
        assert!(matches!(parse("hello"), Err(ParseError::InvalidTerm(_))));
        assert!(matches!(parse("2y + 3"), Err(ParseError::InvalidTerm(_))));
        assert!(matches!(parse("x^"), Err(ParseError::InvalidTerm(_))));
    }

    #[test]
    fn test_non_finite_constant_fails() {
        assert!(matches!(parse("inf"), Err(ParseError::NonFiniteTerm(_))));
        assert!(matches!(parse("x + NaN"), Err(ParseError::NonFiniteTerm(_))));
    }

    #[test]
    fn test_exponent_ceiling() {
        assert!(matches!(parse("x^1001"), Err(ParseError::DegreeTooLarge(_))));
        assert!(matches!(
            parse("x^99999999999999999999"),
            Err(ParseError::DegreeTooLarge(_))
        ));
        assert_eq!(parse("x^1000").unwrap().len(), 1001);
    }

    #[test]
    fn test_double_negative_keeps_adjacent_sign() {
        // Sign rewriting attaches only the sign touching the numeral, so
        // "- -2" collapses to the term "-2" rather than negating it.
        assert_eq!(coeffs("x - -2"), vec![1.0, -2.0]);
    }
}
