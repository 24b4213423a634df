use crate::{Evaluator, Strictness};
use crate::parser::error::*;
use crate::parser::{Lexer, Token, Expr, BinaryOperator};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precedence {
    Sum,
    Product,
}

impl Precedence {
    fn of_token(token: &Token) -> Option<(Self, BinaryOperator)> {
        match token {
            Token::Plus => Some((Precedence::Sum, BinaryOperator::Add)),
            Token::Minus => Some((Precedence::Sum, BinaryOperator::Subtract)),
            Token::Multiply => Some((Precedence::Product, BinaryOperator::Multiply)),
            Token::Divide => Some((Precedence::Product, BinaryOperator::Divide)),
            _ => None
        }
    }
}


/// A recursive-descent parser for calculator expressions.
///
/// Grammar, with `*` and `/` binding tighter than `+` and `-`, all left associative:
///
/// ```text
/// expression := term { ('+' | '-') term }
/// term       := factor { ('*' | '/') factor }
/// factor     := '(' expression ')' | number
/// number     := [0-9.]+
/// ```
///
/// Whitespace is removed before scanning, so `1 2` reads as `12`.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    strictness: Strictness,
    max_depth: usize,
    nesting: usize,
}

impl Parser {
    /// Creates a `Parser` with the default [`Evaluator`] settings.
    ///
    /// # Errors
    /// The whole input is validated up front. Returns [`ParserError::Empty`] for an empty
    /// string and [`ParserError::InvalidCharacter`], wrapped with its position, when the input
    /// holds anything other than digits, `.`, `+ - * /`, parentheses and whitespace.
    ///
    /// # Examples
    /// ```
    /// use safe_calc::{Parser, ParserError};
    ///
    /// assert!(Parser::new("(2 + 3) * 4").is_ok());
    ///
    /// let err = Parser::new("2 + x").unwrap_err();
    /// assert_eq!(err.err(), &ParserError::InvalidCharacter('x'));
    /// assert_eq!(err.pos(), Some(&4));
    /// ```
    pub fn new(input: &str) -> Result<Self> {
        Self::with_evaluator(input, &Evaluator::default())
    }

    /// Creates a `Parser` using the strictness and depth limit of `evaluator`.
    ///
    /// # Errors
    /// Same as [`Parser::new`].
    pub fn with_evaluator(input: &str, evaluator: &Evaluator) -> Result<Self> {
        Ok(Self {
            lexer: Lexer::new(input)?,
            strictness: evaluator.strictness(),
            max_depth: evaluator.max_depth(),
            nesting: 0,
        })
    }

    /// Parses the entire input into an [`Expr`].
    ///
    /// In lenient mode anything left after a complete expression is ignored, and the slot
    /// where a closing parenthesis belongs consumes whatever character is there.
    /// Strict mode rejects both.
    ///
    /// # Errors
    /// Returns [`ParserError::InvalidNumber`] or [`ParserError::MalformedNumber`] where a
    /// number is missing or unreadable, [`ParserError::NestingTooDeep`] past the depth limit,
    /// and in strict mode [`ParserError::UnclosedParenthesis`] or [`ParserError::TrailingInput`].
    /// Every error is wrapped with [`ParserError::AtPosition`].
    ///
    /// # Examples
    /// ```
    /// use safe_calc::{Parser, ParserError};
    ///
    /// let mut parser = Parser::new("1 + 2 * 3").unwrap();
    /// let expr = parser.parse().unwrap();
    /// assert_eq!(format!("{expr}"), "(1 + (2 * 3))");
    ///
    /// let mut invalid_parser = Parser::new("1 +").unwrap();
    /// let err = invalid_parser.parse().unwrap_err();
    /// assert!(matches!(err.err(), ParserError::InvalidNumber));
    /// ```
    pub fn parse(&mut self) -> Result<Expr> {
        let result = self.parse_expression().and_then(|expr| self.finish(expr));
        result.map_err(|err| err.at_pos(self.lexer.position()))
    }

    fn finish(&mut self, expr: Expr) -> Result<Expr> {
        match (self.strictness, self.lexer.current()) {
            (Strictness::Strict, Some(ch)) => Err(ParserError::TrailingInput(ch)),
            (Strictness::Lenient, Some(_)) => {
                tracing::debug!(position = self.lexer.position(), "ignoring trailing input");
                Ok(expr)
            },
            (_, None) => Ok(expr)
        }
    }

    fn parse_expression(&mut self) -> Result<Expr> {
        let first = self.parse_term()?;
        let mut rest = Vec::new();

        while let Some(op) = self.next_operator(Precedence::Sum) {
            rest.push((op, self.parse_term()?));
        }

        Ok(Expr::chain(first, rest))
    }

    fn parse_term(&mut self) -> Result<Expr> {
        let first = self.parse_factor()?;
        let mut rest = Vec::new();

        while let Some(op) = self.next_operator(Precedence::Product) {
            rest.push((op, self.parse_factor()?));
        }

        Ok(Expr::chain(first, rest))
    }

    fn parse_factor(&mut self) -> Result<Expr> {
        match self.lexer.peek() {
            Token::LeftParenthesis => self.parse_group(),
            Token::Number => Ok(Expr::Literal(self.lexer.read_number()?)),
            Token::Invalid(ch) => Err(ParserError::InvalidCharacter(ch)),
            _ => Err(ParserError::InvalidNumber)
        }
    }

    /// Only parentheses recurse; operator runs are collected into one chain per level.
    fn parse_group(&mut self) -> Result<Expr> {
        if self.nesting >= self.max_depth {
            return Err(ParserError::NestingTooDeep(self.max_depth));
        }

        self.nesting += 1;
        self.lexer.advance();

        let inner = self.parse_expression()?;
        self.close_group()?;

        self.nesting -= 1;
        Ok(inner)
    }

    fn close_group(&mut self) -> Result<()> {
        match (self.strictness, self.lexer.peek()) {
            (_, Token::RightParenthesis) => {
                self.lexer.advance();
                Ok(())
            },
            (Strictness::Lenient, token) => {
                tracing::trace!(?token, position = self.lexer.position(), "closing group without ')'");
                self.lexer.advance();
                Ok(())
            },
            (Strictness::Strict, _) => Err(ParserError::UnclosedParenthesis)
        }
    }

    /// Consumes the operator under the cursor if it belongs to `precedence`.
    fn next_operator(&mut self, precedence: Precedence) -> Option<BinaryOperator> {
        match Precedence::of_token(&self.lexer.peek()) {
            Some((found, op)) if found == precedence => {
                self.lexer.advance();
                Some(op)
            },
            _ => None
        }
    }

}


/// Parses an expression string directly into an [`Expr`] with the default settings.
/// This is a convenience function that creates a [`Parser`] and calls its `parse` method.
///
/// # Errors
/// Returns a `ParserError` if the input is invalid; see [`Parser::new`] and [`Parser::parse`].
///
/// # Examples
/// ```
/// use safe_calc::parse_to_expr;
///
/// let expr = parse_to_expr("10 / 2 / 5").unwrap();
/// assert_eq!(expr.to_string(), "(10 / 2 / 5)");
/// assert_eq!(expr.evaluate(), 1.0);
/// ```
pub fn parse_to_expr(input: &str) -> Result<Expr> {
    let mut parser = Parser::new(input)?;
    parser.parse()
}
