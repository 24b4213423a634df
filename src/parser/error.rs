#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    #[error("At position {0} - {1}")]
    AtPosition(usize, Box<ParserError>),

    #[error("Invalid character: {0:?}")]
    InvalidCharacter(char),

    #[error("Input string is empty")]
    Empty,

    #[error("Invalid number: expected a digit")]
    InvalidNumber,

    /// A run of digits and decimal points that `f64` rejects, such as `1.2.3`.
    #[error("Malformed number {literal:?}: {source}")]
    MalformedNumber {
        literal: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Only raised in strict mode.
    #[error("Parenthesis was not closed")]
    UnclosedParenthesis,

    /// Only raised in strict mode.
    #[error("Unexpected trailing input: {0:?}")]
    TrailingInput(char),

    #[error("Parentheses nest deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Broad classes of [`ParserError`], independent of position and detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty input or a character outside the allowed set.
    InvalidCharacter,
    InvalidNumber,
    /// Unbalanced parentheses or trailing input.
    MalformedStructure,
    NestingTooDeep,
}

impl ParserError {
    pub fn err(&self) -> &Self {
        match self {
            ParserError::AtPosition(_, err) => err.as_ref(),
            other => other
        }
    }

    pub fn pos(&self) -> Option<&usize> {
        match self {
            ParserError::AtPosition(position, _) => Some(position),
            _ => None
        }
    }

    /// Wraps the error with a position, unless it already carries one.
    pub fn at_pos(self, position: usize) -> Self {
        match self {
            ParserError::AtPosition(_, _) => self,
            other => ParserError::AtPosition(position, Box::new(other))
        }
    }

    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self.err() {
            ParserError::Empty | ParserError::InvalidCharacter(_) => ErrorKind::InvalidCharacter,
            ParserError::InvalidNumber | ParserError::MalformedNumber { .. } => ErrorKind::InvalidNumber,
            ParserError::UnclosedParenthesis | ParserError::TrailingInput(_) => ErrorKind::MalformedStructure,
            ParserError::NestingTooDeep(_) => ErrorKind::NestingTooDeep,
            ParserError::AtPosition(_, inner) => inner.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
