//! Canned explanation and help text.
//!
//! Everything here is deterministic templated prose derived from
//! calculation values; none of it feeds back into the math.

use ruffini_core::{CalcError, Calculation, DivisionStep, ParseError, Polynomial, format_number};

/// Render a coefficient list the way the tableau prints numbers.
pub fn join_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format_number(v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prose for one division stage, derived from the recorded rows.
pub fn describe_step(step: &DivisionStep, root: f64) -> String {
    if step.step == 0 {
        return format!(
            "bring down the leading coefficient {}",
            format_number(step.partial[0])
        );
    }
    let i = step.step;
    let previous = step.partial[i - 1];
    let product = step.carry[i];
    let coefficient = step.coefficients[i];
    let total = step.partial[i];
    format!(
        "multiply {} × {} = {}, then add {} + {} = {}",
        format_number(previous),
        format_number(root),
        format_number(product),
        format_number(coefficient),
        format_number(product),
        format_number(total)
    )
}

/// Step-by-step walkthrough of a finished calculation.
pub fn explain_calculation(calc: &Calculation) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Dividing {} by (x - {}):",
        calc.polynomial.trim(),
        format_number(calc.root)
    ));
    lines.push(format!(
        "coefficients, highest degree first: [{}]",
        join_numbers(&calc.coefficients)
    ));
    lines.push(String::new());
    for step in &calc.steps {
        lines.push(format!(
            "  {}. {}",
            step.step + 1,
            describe_step(step, calc.root)
        ));
    }
    lines.push(String::new());
    lines.push(format!("quotient:  {}", calc.quotient));
    lines.push(format!("remainder: {}", format_number(calc.remainder)));
    lines.push(String::new());
    if calc.remainder == 0.0 {
        lines.push(format!(
            "The remainder is zero, so {} is a root and (x - {}) is a factor of the polynomial.",
            format_number(calc.root),
            format_number(calc.root)
        ));
    } else {
        lines.push(format!(
            "The remainder is not zero, so {} is not a root. By the remainder theorem, P({}) = {}.",
            format_number(calc.root),
            format_number(calc.root),
            format_number(calc.remainder)
        ));
    }
    lines.join("\n")
}

/// The worked tableau: coefficients on top, carries in the middle, the
/// result row at the bottom with the remainder set off by a bar.
pub fn tableau(calc: &Calculation) -> String {
    let n = calc.coefficients.len();
    let results = &calc.steps[n - 1].partial;

    let top: Vec<String> = calc.coefficients.iter().map(|&c| format_number(c)).collect();
    let mut middle: Vec<String> = vec![String::new()];
    for step in &calc.steps[1..] {
        middle.push(format_number(step.carry[step.step]));
    }
    let bottom: Vec<String> = results.iter().map(|&c| format_number(c)).collect();

    let width = top
        .iter()
        .chain(middle.iter())
        .chain(bottom.iter())
        .map(String::len)
        .max()
        .unwrap_or(1);
    let root_label = format_number(calc.root);
    let gutter = root_label.len();

    let row = |label: &str, cells: &[String]| {
        let mut line = format!("{label:>gutter$} |");
        for cell in cells {
            line.push_str(&format!(" {cell:>width$}"));
        }
        line
    };

    let mut out = Vec::new();
    out.push(row("", &top));
    out.push(row(&root_label, &middle));
    out.push(format!("{:>gutter$} +{}", "", "-".repeat((width + 1) * n + 2)));

    let mut last = format!("{:>gutter$} |", "");
    for cell in &bottom[..n - 1] {
        last.push_str(&format!(" {cell:>width$}"));
    }
    if n > 1 {
        last.push_str(" |");
    }
    last.push_str(&format!(" {:>width$}", bottom[n - 1]));
    out.push(last);

    out.join("\n")
}

/// One-line description of a parsed polynomial for validation replies.
pub fn describe(poly: &Polynomial) -> String {
    let degree = poly.degree().unwrap_or(0);
    let adjective = match degree {
        1 => " linear",
        2 => " quadratic",
        3 => " cubic",
        4 => " quartic",
        _ => "",
    };
    if degree == 0 {
        "Valid polynomial of degree 0; dividing by any (x - r) leaves the constant itself as remainder."
            .to_string()
    } else {
        format!(
            "Valid{adjective} polynomial of degree {degree}; dividing by (x - r) gives a quotient of degree {}.",
            degree - 1
        )
    }
}

/// Help text for a failed calculation: the error plus format suggestions.
pub fn error_help(error: &CalcError, polynomial: &str) -> String {
    let mut lines = vec![error.to_string(), String::new(), "Suggestions:".to_string()];
    for suggestion in suggestions(polynomial, error) {
        lines.push(format!("  - {suggestion}"));
    }
    lines.join("\n")
}

/// Format suggestions tailored to the rejected input.
pub fn suggestions(polynomial: &str, error: &CalcError) -> Vec<String> {
    let mut out = vec!["write the polynomial in standard form, e.g. x^3 + 2x^2 - 5x + 6".to_string()];
    match error {
        CalcError::InvalidRoot(_) => {
            out.push("the root must be a finite number, e.g. 2, -1 or 0.5".to_string());
        }
        CalcError::Parse(ParseError::Empty) => {
            out.push("type the polynomial before choosing a root".to_string());
        }
        CalcError::Parse(ParseError::DegreeTooLarge(_)) => {
            out.push(format!(
                "keep exponents at or below {}",
                ruffini_core::MAX_DEGREE
            ));
        }
        CalcError::Parse(_) => {
            if !polynomial.contains('x') {
                out.push("use x as the variable, e.g. 2x^2 - 3".to_string());
            } else if !polynomial.contains('^') {
                out.push("write exponents with ^, e.g. x^3 for x cubed".to_string());
            }
            out.push(
                "allowed pieces are decimal numerals, x, ^ exponents and + or - signs".to_string(),
            );
        }
    }
    out
}

// --- canned Q&A -----------------------------------------------------------

const WHAT_IS: &str = "Ruffini's rule (synthetic division) divides a polynomial by a binomial \
of the form (x - r) using only its coefficients. Write the coefficients highest degree first, \
bring the first one down, then repeat for each column: multiply the previous result by r and \
add it to the next coefficient. The last number is the remainder; the others are the quotient's \
coefficients, one degree lower than the dividend.";

const HOW_TO: &str = "Enter the polynomial in standard form, e.g. x^3 + 2x^2 - 5x + 6, and the \
value r from the divisor (x - r). Exponents use ^, terms are joined with + and -, and a missing \
degree simply counts as zero. The calculator returns the quotient, the remainder and every \
intermediate tableau row.";

const MISTAKES: &str = "Common mistakes: forgetting that a missing degree has coefficient zero \
(x^3 + 1 has zero x^2 and x terms), flipping the sign of r (dividing by (x + 2) means r = -2), \
and reading the quotient in the wrong order (it is written highest degree first and has one \
degree less than the dividend).";

const INTERPRET: &str = "A remainder of 0 means r is a root and (x - r) is a factor: the \
polynomial splits as quotient times (x - r). A non-zero remainder equals P(r) by the remainder \
theorem, so the division doubles as an evaluation of the polynomial at r.";

const EXAMPLE: &str = "Dividing x^3 + 2x^2 - 5x + 6 by (x - 2):\n\n  \
  |   1   2  -5   6\n2 |       2   8   6\n  +------------------\n  |   1   4   3 |  12\n\n\
Each middle-row entry is the previous bottom-row entry times 2; each bottom-row entry is its \
column's sum. Quotient: x^2 + 4x + 3, remainder 12.";

const FALLBACK: &str = "Ask about what Ruffini's rule is, how to enter a polynomial, common \
mistakes, how to interpret the result, or ask for a step-by-step example.";

/// Substring-keyed canned answers; the first matching entry wins.
static REPLIES: &[(&[&str], &str)] = &[
    (&["what is", "definition"], WHAT_IS),
    (&["how do i", "how to", "enter", "format"], HOW_TO),
    (&["mistake", "wrong", "error"], MISTAKES),
    (&["interpret", "result", "remainder", "factor"], INTERPRET),
    (&["example", "step by step"], EXAMPLE),
];

/// Answer a free-form question from the lookup table.
pub fn reply(question: &str) -> &'static str {
    let question = question.to_lowercase();
    for (keywords, response) in REPLIES {
        if keywords.iter().any(|k| question.contains(k)) {
            return response;
        }
    }
    FALLBACK
}
