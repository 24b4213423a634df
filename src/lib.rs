//! Evaluator for calculator arithmetic.
//!
//! Expressions hold non-negative decimal numbers, the operators `+ - * /` and parentheses.
//! `*` and `/` bind tighter than `+` and `-`, and operators of equal precedence associate
//! to the left. Values are `f64`; division by zero yields an infinity or NaN rather than
//! an error.
//!
//! ```
//! use safe_calc::{evaluate, evaluate_to_display};
//!
//! assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
//! assert_eq!(evaluate_to_display("1 / 0"), "Infinity");
//! assert_eq!(evaluate_to_display("2 + a"), "Error");
//! ```
#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]


#[cfg(test)]
mod evaluator_test_strategies;

mod error;
mod evaluator;
mod format;
mod parser;

pub use error::Error;
pub use evaluator::{
    Evaluator, EvaluatorBuilder, Strictness, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING,
    evaluate, evaluate_to_display
};
pub use format::{format_value, ERROR_TEXT};
pub use parser::{
    ParserError, ErrorKind, Parser,
    Expr, BinaryOperator,
    is_allowed_char, is_valid_input, validate, parse_to_expr
};
