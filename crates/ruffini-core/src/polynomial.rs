use std::fmt;

use crate::format::format_polynomial;

/// Dense single-variable polynomial over `f64`.
///
/// Coefficients are stored highest degree first: index 0 is the leading
/// coefficient, the last index the constant term, so a sequence of length
/// `n` represents degree `n - 1`. The sequence is kept verbatim: a
/// structurally leading zero (as a division quotient can produce) is
/// preserved, not trimmed.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Wrap a coefficient sequence, highest degree first.
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// Structural degree: `len - 1`, or `None` for the empty sequence.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficients in descending degree order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coeffs
    }

    /// Evaluate at `x` by Horner's scheme. The empty sequence evaluates to 0.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::new(coeffs)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_polynomial(&self.coeffs))
    }
}
