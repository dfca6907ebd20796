use std::fmt;

/// Failure to resolve a polynomial string into a coefficient sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Nothing left after stripping whitespace.
    Empty,
    /// A term the numeric reader cannot interpret.
    InvalidTerm(String),
    /// A term that reads as an infinity or NaN.
    NonFiniteTerm(String),
    /// An exponent beyond the supported ceiling.
    DegreeTooLarge(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty polynomial"),
            ParseError::InvalidTerm(term) => write!(f, "cannot interpret term '{term}'"),
            ParseError::NonFiniteTerm(term) => {
                write!(f, "term '{term}' is not a finite number")
            }
            ParseError::DegreeTooLarge(exponent) => {
                write!(
                    f,
                    "degree {exponent} exceeds the supported maximum of {}",
                    crate::parse::MAX_DEGREE
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure of a full calculation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    Parse(ParseError),
    /// The divisor root is an infinity or NaN.
    InvalidRoot(f64),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Parse(e) => write!(f, "{e}"),
            CalcError::InvalidRoot(root) => {
                write!(f, "root {root} is not a finite number")
            }
        }
    }
}

impl std::error::Error for CalcError {}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        CalcError::Parse(e)
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
