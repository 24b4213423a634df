#[cfg(test)]
mod str_test_strategies;

mod error;
mod lexer;
mod expr;
mod parse;

pub use error::{ParserError, ErrorKind};
pub(crate) use lexer::{Lexer, Token};
pub use lexer::{is_allowed_char, is_valid_input, validate};
pub use expr::{Expr, BinaryOperator};
pub use parse::{Parser, parse_to_expr};
