//! Built-in worked examples for the `examples` command and the HTTP API.

/// A ready-made division with a known outcome.
pub struct WorkedExample {
    pub title: &'static str,
    pub polynomial: &'static str,
    pub root: f64,
    pub description: &'static str,
    pub difficulty: &'static str,
}

pub const EXAMPLES: &[WorkedExample] = &[
    WorkedExample {
        title: "Cubic with a remainder",
        polynomial: "x^3 + 2x^2 - 5x + 6",
        root: 2.0,
        description: "The classic walkthrough: quotient x^2 + 4x + 3 with remainder 12.",
        difficulty: "easy",
    },
    WorkedExample {
        title: "Difference of squares",
        polynomial: "x^2 - 4",
        root: 2.0,
        description: "Divides exactly: 2 is a root, so x^2 - 4 = (x - 2)(x + 2).",
        difficulty: "easy",
    },
    WorkedExample {
        title: "Negative root",
        polynomial: "x^3 + x^2 - 2x",
        root: -2.0,
        description: "Dividing by (x + 2) means r = -2; the quotient is x^2 - x.",
        difficulty: "intermediate",
    },
    WorkedExample {
        title: "Missing degrees",
        polynomial: "x^4 - 16",
        root: 2.0,
        description: "The absent cubic, square and linear terms all count as zero coefficients.",
        difficulty: "intermediate",
    },
    WorkedExample {
        title: "Fractional root",
        polynomial: "2x^3 - 3x^2 + 1",
        root: 0.5,
        description: "Dividing at x = 0.5 gives quotient 2x^2 - 2x - 1 and remainder 0.5.",
        difficulty: "advanced",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use ruffini_core::calculate;

    #[test]
    fn test_every_example_calculates() {
        for example in EXAMPLES {
            let calc = calculate(example.polynomial, example.root)
                .unwrap_or_else(|e| panic!("{} failed: {e}", example.title));
            assert_eq!(calc.steps.len(), calc.coefficients.len());
        }
    }

    #[test]
    fn test_described_outcomes_hold() {
        let classic = calculate(EXAMPLES[0].polynomial, EXAMPLES[0].root).unwrap();
        assert_eq!(classic.quotient, "x^2 + 4x + 3");
        assert_eq!(classic.remainder, 12.0);

        let negative = calculate(EXAMPLES[2].polynomial, EXAMPLES[2].root).unwrap();
        assert_eq!(negative.quotient, "x^2 - x");
        assert_eq!(negative.remainder, 0.0);

        let gaps = calculate(EXAMPLES[3].polynomial, EXAMPLES[3].root).unwrap();
        assert_eq!(gaps.coefficients, vec![1.0, 0.0, 0.0, 0.0, -16.0]);
        assert_eq!(gaps.remainder, 0.0);

        let fractional = calculate(EXAMPLES[4].polynomial, EXAMPLES[4].root).unwrap();
        assert_eq!(fractional.quotient, "2x^2 - 2x - 1");
        assert_eq!(fractional.remainder, 0.5);
    }

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<&str> = EXAMPLES.iter().map(|e| e.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), EXAMPLES.len());
    }
}
