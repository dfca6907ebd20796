//! Ruffini synthetic-division engine.
//!
//! Parses single-variable polynomials from free-form text, divides them
//! by a linear binomial `(x - root)` while tracing every tableau stage,
//! and renders coefficient sequences back to canonical notation.
//!
//! Zero I/O: a pure math engine with no opinions about transport or
//! persistence. Every call returns a fresh value; nothing is shared
//! across invocations, so the engine embeds safely in concurrent
//! servers.

pub mod calculate;
pub mod divide;
pub mod error;
pub mod format;
pub mod parse;
pub mod polynomial;

pub use calculate::{Calculation, calculate};
pub use divide::{Division, DivisionStep, divide};
pub use error::{CalcError, ParseError, Result};
pub use format::{format_number, format_polynomial};
pub use parse::{MAX_DEGREE, parse};
pub use polynomial::Polynomial;
