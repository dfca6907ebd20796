use serde::{Deserialize, Serialize};

use crate::polynomial::Polynomial;

/// One stage of a synthetic division, as the three rows of the worked
/// tableau at that point.
///
/// Wire serialization keeps the `row1`/`row2`/`row3` keys the
/// calculator's web clients consume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DivisionStep {
    /// Stage index; 0 brings down the leading coefficient.
    pub step: usize,
    /// Top row: the dividend's coefficients, repeated on every step.
    #[serde(rename = "row1")]
    pub coefficients: Vec<f64>,
    /// Middle row: all zero except the product dropped into this stage's
    /// column.
    #[serde(rename = "row2")]
    pub carry: Vec<f64>,
    /// Bottom row: accumulated results through this stage's column.
    #[serde(rename = "row3")]
    pub partial: Vec<f64>,
}

/// Outcome of dividing by `(x - root)`: quotient one degree lower than
/// the dividend, the remainder, and the full per-call step trace.
#[derive(Clone, Debug, PartialEq)]
pub struct Division {
    pub quotient: Polynomial,
    pub remainder: f64,
    pub steps: Vec<DivisionStep>,
}

/// Synthetic division of `polynomial` by `(x - root)`.
///
/// Brings down the leading coefficient, then for each later column adds
/// the previous result times `root`. The returned trace holds one step
/// per column, the initial bring-down included, so its length equals the
/// dividend's length. A zero leading quotient coefficient is left as-is.
///
/// # Panics
///
/// Panics if `polynomial` is empty. [`crate::calculate`] never produces
/// an empty sequence; callers constructing sequences by hand must keep
/// length ≥ 1.
pub fn divide(polynomial: &Polynomial, root: f64) -> Division {
    let coefficients = polynomial.coefficients();
    let n = coefficients.len();

    let mut result = Vec::with_capacity(n);
    let mut steps = Vec::with_capacity(n);

    result.push(coefficients[0]);
    steps.push(DivisionStep {
        step: 0,
        coefficients: coefficients.to_vec(),
        carry: vec![0.0; n],
        partial: result.clone(),
    });

    for i in 1..n {
        let product = result[i - 1] * root;
        result.push(coefficients[i] + product);

        let mut carry = vec![0.0; n];
        carry[i] = product;
        steps.push(DivisionStep {
            step: i,
            coefficients: coefficients.to_vec(),
            carry,
            partial: result.clone(),
        });
    }

    let remainder = result[n - 1];
    result.truncate(n - 1);

    Division {
        quotient: Polynomial::new(result),
        remainder,
        steps,
    }
}
