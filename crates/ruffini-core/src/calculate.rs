use serde::{Deserialize, Serialize};

use crate::divide::{DivisionStep, divide};
use crate::error::{CalcError, Result};
use crate::format::format_polynomial;
use crate::parse::parse;

/// Wire-ready outcome of a full parse → divide → format pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The input text, echoed back.
    pub polynomial: String,
    pub root: f64,
    /// Parsed dividend, highest degree first.
    pub coefficients: Vec<f64>,
    pub quotient_coefficients: Vec<f64>,
    /// Quotient in canonical notation.
    pub quotient: String,
    pub remainder: f64,
    pub steps: Vec<DivisionStep>,
}

/// Parse `polynomial`, divide it by `(x - root)`, and assemble the
/// result in one pass.
///
/// The root is checked before anything else; a non-finite value never
/// reaches the division. Failures carry no partial state.
pub fn calculate(polynomial: &str, root: f64) -> Result<Calculation> {
    if !root.is_finite() {
        return Err(CalcError::InvalidRoot(root));
    }

    let parsed = parse(polynomial)?;
    let division = divide(&parsed, root);

    Ok(Calculation {
        polynomial: polynomial.to_string(),
        root,
        quotient: format_polynomial(division.quotient.coefficients()),
        quotient_coefficients: division.quotient.into_coefficients(),
        coefficients: parsed.into_coefficients(),
        remainder: division.remainder,
        steps: division.steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_pass() {
        let calc = calculate("x^3 + 2x^2 - 5x + 6", 2.0).unwrap();
        assert_eq!(calc.coefficients, vec![1.0, 2.0, -5.0, 6.0]);
        assert_eq!(calc.quotient_coefficients, vec![1.0, 4.0, 3.0]);
        assert_eq!(calc.quotient, "x^2 + 4x + 3");
        assert_relative_eq!(calc.remainder, 12.0);
        assert_eq!(calc.steps.len(), 4);
        assert_eq!(calc.polynomial, "x^3 + 2x^2 - 5x + 6");
    }

    #[test]
    fn test_parse_failure_propagates() {
        assert!(matches!(calculate("", 1.0), Err(CalcError::Parse(_))));
        assert!(matches!(calculate("hello", 1.0), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_non_finite_root_rejected_first() {
        // Root check precedes parsing, so even a bad polynomial reports
        // the root problem.
        assert!(matches!(
            calculate("x^2 - 4", f64::NAN),
            Err(CalcError::InvalidRoot(_))
        ));
        assert!(matches!(
            calculate("", f64::INFINITY),
            Err(CalcError::InvalidRoot(_))
        ));
    }

    #[test]
    fn test_wire_shape() {
        let calc = calculate("x^2 - 4", 2.0).unwrap();
        let value = serde_json::to_value(&calc).unwrap();
        assert_eq!(value["quotient"], "x + 2");
        assert_eq!(value["remainder"], 0.0);
        assert_eq!(value["steps"][1]["row2"][1], 2.0);
        assert!(value["steps"][0]["row3"].is_array());
    }
}
