use std::{fmt::Display, str::FromStr};
use crate::{Error, Expr, Parser, ParserError};
use crate::format::{format_value, ERROR_TEXT};


/// Default limit for parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest nesting limit [`EvaluatorBuilder::build`] accepts.
///
/// Parsing, evaluating and dropping an expression recurse once or twice per level of
/// parentheses, and this many levels fit comfortably in a 2 MiB thread stack.
pub const MAX_DEPTH_CEILING: usize = 512;


/// How the parser treats unbalanced parentheses and leftover input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strictness {
    /// Evaluates the longest complete prefix and ignores the rest.
    ///
    /// The position of a closing parenthesis consumes whatever character is there,
    /// and a missing `)` at the end of input is accepted, so `(2+3` gives 5 and `2+3)*4` gives 5.
    #[default]
    Lenient,

    /// Requires every `(` to be closed and the whole input to be consumed.
    Strict,
}

impl FromStr for Strictness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Strictness::Lenient),
            "strict" => Ok(Strictness::Strict),
            _ => Err(Error::InvalidStrictness(s.into()))
        }
    }
}

impl Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strictness::Lenient => write!(f, "lenient"),
            Strictness::Strict => write!(f, "strict")
        }
    }
}


/// Evaluates calculator expressions with a fixed configuration.
///
/// An `Evaluator` holds no state between calls; the same input always gives the same result,
/// and one instance can be shared freely across threads.
///
/// # Examples
/// ```
/// use safe_calc::{Evaluator, Strictness};
///
/// let evaluator = Evaluator::default();
/// assert_eq!(evaluator.evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluator.evaluate("(2 + 3").unwrap(), 5.0);
///
/// let strict = Evaluator::builder().strictness(Strictness::Strict).build().unwrap();
/// assert!(strict.evaluate("(2 + 3").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EvaluatorBuilder"))]
pub struct Evaluator {
    strictness: Strictness,
    max_depth: usize
}

impl Default for Evaluator {
    fn default() -> Self {
        Self { strictness: Strictness::Lenient, max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl Evaluator {
    /// Returns a builder starting from the default configuration.
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Configured strictness.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Configured parenthesis nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses `input` into an [`Expr`] without evaluating it.
    ///
    /// # Errors
    /// Returns a [`ParserError`] as described on [`Parser::new`] and [`Parser::parse`].
    pub fn parse(&self, input: &str) -> Result<Expr, ParserError> {
        Parser::with_evaluator(input, self)?.parse()
    }

    /// Parses and evaluates `input`.
    ///
    /// Division by zero is not an error and yields an infinity or NaN.
    ///
    /// # Errors
    /// Returns a [`ParserError`] as described on [`Parser::new`] and [`Parser::parse`].
    ///
    /// # Examples
    /// ```
    /// use safe_calc::{Evaluator, ErrorKind};
    ///
    /// let evaluator = Evaluator::default();
    /// assert_eq!(evaluator.evaluate("10 / 2 / 5").unwrap(), 1.0);
    /// assert_eq!(evaluator.evaluate("1 / 0").unwrap(), f64::INFINITY);
    /// assert_eq!(evaluator.evaluate("2 +").unwrap_err().kind(), ErrorKind::InvalidNumber);
    /// ```
    pub fn evaluate(&self, input: &str) -> Result<f64, ParserError> {
        match self.parse(input) {
            Ok(expr) => {
                tracing::trace!(%expr, "parsed expression");
                let value = expr.evaluate();
                tracing::debug!(input, value, "evaluated expression");
                Ok(value)
            },
            Err(err) => {
                tracing::debug!(input, error = %err, "rejected expression");
                Err(err)
            }
        }
    }

    /// Evaluates `input` and renders the outcome as calculator display text.
    ///
    /// Failures of any kind render as [`ERROR_TEXT`].
    ///
    /// # Examples
    /// ```
    /// use safe_calc::Evaluator;
    ///
    /// let evaluator = Evaluator::default();
    /// assert_eq!(evaluator.evaluate_to_display("0.1 + 0.2"), "0.30000000000000004");
    /// assert_eq!(evaluator.evaluate_to_display("1 / 0"), "Infinity");
    /// assert_eq!(evaluator.evaluate_to_display("2 + a"), "Error");
    /// ```
    pub fn evaluate_to_display(&self, input: &str) -> String {
        self.evaluate(input)
            .map_or_else(|_| ERROR_TEXT.to_string(), format_value)
    }
}

impl TryFrom<EvaluatorBuilder> for Evaluator {
    type Error = Error;

    fn try_from(builder: EvaluatorBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}


/// Builder for [`Evaluator`].
///
/// Start with [`Evaluator::builder()`], adjust settings, then call
/// [`EvaluatorBuilder::build()`] to get a `Result<Evaluator, Error>`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluatorBuilder {
    strictness: Strictness,
    max_depth: usize
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluatorBuilder {
    fn new() -> Self {
        Self {
            strictness: Strictness::Lenient,
            max_depth: DEFAULT_MAX_DEPTH
        }
    }

    /// Sets how malformed structure is treated.
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Shorthand for `strictness(Strictness::Strict)`.
    pub fn strict(mut self) -> Self {
        self.strictness = Strictness::Strict;
        self
    }

    /// Shorthand for `strictness(Strictness::Lenient)`.
    pub fn lenient(mut self) -> Self {
        self.strictness = Strictness::Lenient;
        self
    }

    /// Sets how deep parentheses may nest, between 1 and [`MAX_DEPTH_CEILING`].
    ///
    /// Operators do not count, so a sum of any length is accepted under any limit.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    /// Returns `Err(Error::ZeroValue)` if the depth limit is 0, and
    /// `Err(Error::DepthTooLarge)` if it is above [`MAX_DEPTH_CEILING`].
    ///
    /// # Examples
    /// ```
    /// use safe_calc::{Evaluator, Error};
    ///
    /// assert!(Evaluator::builder().max_depth(16).build().is_ok());
    /// assert_eq!(Evaluator::builder().max_depth(0).build(), Err(Error::ZeroValue));
    /// assert_eq!(Evaluator::builder().max_depth(usize::MAX).build(), Err(Error::DepthTooLarge(usize::MAX)));
    /// ```
    pub fn build(self) -> Result<Evaluator, Error> {
        if self.max_depth == 0 {
            return Err(Error::ZeroValue);
        }

        if self.max_depth > MAX_DEPTH_CEILING {
            return Err(Error::DepthTooLarge(self.max_depth));
        }

        Ok(Evaluator {
            strictness: self.strictness,
            max_depth: self.max_depth
        })
    }
}


/// Parses and evaluates `input` with the default [`Evaluator`].
///
/// # Errors
/// Returns a [`ParserError`] if the input is invalid; see [`Parser::new`] and [`Parser::parse`].
///
/// # Examples
/// ```
/// use safe_calc::{evaluate, ErrorKind};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("").unwrap_err().kind(), ErrorKind::InvalidCharacter);
/// ```
pub fn evaluate(input: &str) -> Result<f64, ParserError> {
    Evaluator::default().evaluate(input)
}

/// Evaluates `input` with the default [`Evaluator`] and renders the result as display text.
///
/// # Examples
/// ```
/// use safe_calc::evaluate_to_display;
///
/// assert_eq!(evaluate_to_display("(2 + 3) * 4"), "20");
/// assert_eq!(evaluate_to_display("2 +"), "Error");
/// ```
pub fn evaluate_to_display(input: &str) -> String {
    Evaluator::default().evaluate_to_display(input)
}
