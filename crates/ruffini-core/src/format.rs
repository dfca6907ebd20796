//! Canonical polynomial notation.

/// Render one numeric value as a polynomial numeral: integral values
/// drop the decimal point (`3`, never `3.0`), everything else keeps its
/// shortest decimal expansion.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

fn render_term(coefficient: f64, degree: usize) -> String {
    if degree == 0 {
        return format_number(coefficient);
    }
    let variable = if degree == 1 {
        "x".to_string()
    } else {
        format!("x^{degree}")
    };
    if coefficient == 1.0 {
        variable
    } else if coefficient == -1.0 {
        format!("-{variable}")
    } else {
        format!("{}{variable}", format_number(coefficient))
    }
}

/// Render a coefficient sequence (highest degree first) in canonical
/// notation. An empty sequence and an all-zero sequence both come back
/// as `"0"`.
///
/// Zero coefficients are skipped, `1`/`-1` elide to `x`/`-x` on variable
/// terms, and terms are joined with `" + "` or `" - "` with the sign
/// folded into the separator.
pub fn format_polynomial(coefficients: &[f64]) -> String {
    let mut out = String::new();
    let len = coefficients.len();

    for (i, &coefficient) in coefficients.iter().enumerate() {
        if coefficient == 0.0 {
            continue;
        }
        let term = render_term(coefficient, len - 1 - i);
        if out.is_empty() {
            out.push_str(&term);
        } else if let Some(unsigned) = term.strip_prefix('-') {
            out.push_str(" - ");
            out.push_str(unsigned);
        } else {
            out.push_str(" + ");
            out.push_str(&term);
        }
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}
