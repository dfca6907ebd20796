//! Property tests for the algebraic laws the engine guarantees.

use proptest::prelude::*;
use ruffini_core::{Polynomial, divide, format_polynomial, parse};

/// Coefficient values mixing integral cases (which exercise the ±1 and
/// decimal-point elisions) with arbitrary decimals.
fn coefficient() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(1.0),
        Just(-1.0),
        (-9i32..10).prop_map(f64::from),
        -100.0..100.0f64,
    ]
}

fn coefficients() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(coefficient(), 1..9)
}

/// Sequences whose leading coefficient is non-zero, so the formatter
/// emits the leading term and the structural degree survives a
/// format → parse round trip.
fn nondegenerate_coefficients() -> impl Strategy<Value = Vec<f64>> {
    (
        coefficient().prop_filter("leading coefficient must be non-zero", |c| *c != 0.0),
        prop::collection::vec(coefficient(), 0..8),
    )
        .prop_map(|(leading, mut rest)| {
            rest.insert(0, leading);
            rest
        })
}

/// Multiply `quotient` back by `(x - root)` and add the remainder.
fn expand(quotient: &[f64], remainder: f64, root: f64) -> Vec<f64> {
    if quotient.is_empty() {
        return vec![remainder];
    }
    let mut expanded = vec![quotient[0]];
    for i in 1..quotient.len() {
        expanded.push(quotient[i] - root * quotient[i - 1]);
    }
    expanded.push(remainder - root * quotient[quotient.len() - 1]);
    expanded
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    /// quotient · (x - root) + remainder re-expands to the dividend.
    /// Roots stay small enough that intermediate magnitudes keep the
    /// floating-point error inside the comparison tolerance.
    #[test]
    fn round_trip_law(coeffs in coefficients(), root in -4.0..4.0f64) {
        let poly = Polynomial::new(coeffs.clone());
        let division = divide(&poly, root);
        let expanded = expand(division.quotient.coefficients(), division.remainder, root);

        prop_assert_eq!(expanded.len(), coeffs.len());
        for (reconstructed, original) in expanded.iter().zip(&coeffs) {
            prop_assert!(
                close(*reconstructed, *original),
                "re-expansion drifted: {} vs {}",
                reconstructed,
                original
            );
        }
    }

    /// One step per column; the first step only brings down.
    #[test]
    fn trace_shape(coeffs in coefficients(), root in -10.0..10.0f64) {
        let division = divide(&Polynomial::new(coeffs.clone()), root);
        prop_assert_eq!(division.steps.len(), coeffs.len());
        prop_assert_eq!(division.steps[0].partial.len(), 1);
        prop_assert_eq!(division.quotient.len(), coeffs.len() - 1);
    }

    /// The remainder is exactly the dividend evaluated at the root.
    #[test]
    fn remainder_is_evaluation(coeffs in coefficients(), root in -10.0..10.0f64) {
        let poly = Polynomial::new(coeffs);
        let division = divide(&poly, root);
        prop_assert!(
            close(division.remainder, poly.eval(root)),
            "remainder {} differs from P({}) = {}",
            division.remainder,
            root,
            poly.eval(root)
        );
    }

    /// Everything the formatter writes, the parser reads back verbatim.
    #[test]
    fn format_parse_round_trip(coeffs in nondegenerate_coefficients()) {
        let text = format_polynomial(&coeffs);
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(
            reparsed.coefficients(),
            coeffs.as_slice(),
            "canonical text {} did not round-trip",
            text
        );
    }
}
