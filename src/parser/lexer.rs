use crate::parser::error::*;


/// Classification of the character under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// A digit or decimal point, the start of a numeral.
    Number,
    Plus,
    Minus,
    Multiply,
    Divide,
    LeftParenthesis,
    RightParenthesis,
    /// A character outside the allowed set. Never seen after validation.
    Invalid(char),
    Eof,
}

impl Token {
    fn of_char(ch: char) -> Self {
        match ch {
            '0'..='9' | '.' => Token::Number,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Multiply,
            '/' => Token::Divide,
            '(' => Token::LeftParenthesis,
            ')' => Token::RightParenthesis,
            other => Token::Invalid(other),
        }
    }
}


/// Whitespace as the ECMAScript `\s` class defines it.
///
/// Unlike [`char::is_whitespace`] this includes U+FEFF and excludes U+0085.
fn is_whitespace(ch: char) -> bool {
    matches!(ch,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
        | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
        | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Returns `true` for the characters an expression may contain.
///
/// # Examples
/// ```
/// use safe_calc::is_allowed_char;
///
/// assert!(is_allowed_char('7'));
/// assert!(is_allowed_char('\u{FEFF}'));
/// assert!(!is_allowed_char('\u{85}'));
/// ```
pub fn is_allowed_char(ch: char) -> bool {
    matches!(ch, '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')') || is_whitespace(ch)
}

/// Returns `true` if `input` is non-empty and contains only allowed characters.
///
/// # Examples
/// ```
/// use safe_calc::is_valid_input;
///
/// assert!(is_valid_input("(2 + 3) * 4"));
/// assert!(!is_valid_input("2 + a"));
/// assert!(!is_valid_input(""));
/// ```
pub fn is_valid_input(input: &str) -> bool {
    validate(input).is_ok()
}

/// Checks the whole input against the allowed character set.
///
/// # Errors
/// Returns [`ParserError::Empty`] for an empty string, or
/// [`ParserError::InvalidCharacter`] wrapped with the offset of the first disallowed character.
pub fn validate(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(ParserError::Empty);
    }

    match input.chars().enumerate().find(|(_, ch)| !is_allowed_char(*ch)) {
        Some((position, ch)) => Err(ParserError::InvalidCharacter(ch).at_pos(position)),
        None => Ok(())
    }
}


/// Cursor over the whitespace-stripped input.
///
/// Each entry keeps the char offset it had in the original string, so errors
/// can point at what the caller typed.
#[derive(Debug)]
pub(crate) struct Lexer {
    input: Vec<(usize, char)>,
    end: usize,
    cursor: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Result<Self> {
        validate(input)?;

        Ok(Self {
            input: input.chars().enumerate().filter(|(_, ch)| !is_whitespace(*ch)).collect(),
            end: input.chars().count(),
            cursor: 0,
        })
    }

    pub fn peek(&self) -> Token {
        self.current().map_or(Token::Eof, Token::of_char)
    }

    pub fn current(&self) -> Option<char> {
        self.input.get(self.cursor).map(|(_, ch)| *ch)
    }

    /// Consumes the current character, if any.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.cursor += 1;
        Some(ch)
    }

    /// Offset in the original input of the current character, or its length at the end.
    pub fn position(&self) -> usize {
        self.input.get(self.cursor).map_or(self.end, |(position, _)| *position)
    }

    /// Consumes the longest run of digits and decimal points and converts it.
    pub fn read_number(&mut self) -> Result<f64> {
        let start = self.position();
        let mut literal = String::new();

        while let Some(ch) = self.current().filter(|ch| ch.is_ascii_digit() || *ch == '.') {
            literal.push(ch);
            self.cursor += 1;
        }

        if literal.is_empty() {
            return Err(ParserError::InvalidNumber.at_pos(start));
        }

        literal
            .parse::<f64>()
            .map_err(|source| ParserError::MalformedNumber { literal, source }.at_pos(start))
    }
}
