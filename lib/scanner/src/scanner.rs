use cursor::{Col, Cursor, Line};
use log::trace;

pub mod token;
pub use token::{Token, TokenKind, Tokens};
use Token::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error (l. {line}, c. {col}): {error}")]
pub struct ScanError {
    pub error: ScanErrorType,
    pub line: Line,
    pub col: Col,
}

impl ScanError {
    fn new(error: ScanErrorType, at: &Cursor) -> Self {
        Self { error, line: at.line(), col: at.col() }
    }

    /// The character that stopped the scan.
    pub fn character(&self) -> char {
        match self.error {
            ScanErrorType::UnexpectedCharacter(c) => c,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

pub fn tokenize(source: &str) -> Result<Tokens> {
    Scanner::new(source).scan_tokens()
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Tokens,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), tokens: Tokens::new() }
    }

    /// Scans the whole source. Stops at the first character that cannot start a token.
    pub fn scan_tokens(mut self) -> Result<Tokens> {
        loop {
            let start = self.cursor.clone();
            let Some(c) = self.cursor.next() else {
                break;
            };

            let token = match c {
                ' ' | '\t' | '\n' | '\r' => continue,

                ';' => Semicolon,
                '=' => Equals,
                '+' => Plus,
                '-' => Minus,
                '*' => Multiply,
                '/' => Divide,
                '.' => Period,
                '(' => LeftParen,
                ')' => RightParen,
                '[' => LeftBracket,
                ']' => RightBracket,
                '{' => LeftBrace,
                '}' => RightBrace,

                d if d.is_ascii_digit() => self.number(&start),
                a if a.is_ascii_alphabetic() => self.identifier(&start),
                '"' => self.string(),

                c => {
                    return Err(ScanError::new(ScanErrorType::UnexpectedCharacter(c), &start));
                }
            };

            trace!("Scanned {} at {}:{}", token, start.line(), start.col());
            self.tokens.push(token);
        }

        Ok(self.tokens)
    }

    fn number(&mut self, start: &Cursor<'a>) -> Token {
        let mut seen_dot = false;
        self.cursor.advance_while(|c| match c {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        });

        // Digits with at most one dot, which includes "7.", always parse.
        Number(start.slice_until(&self.cursor).parse().expect("digit run is a valid float"))
    }

    fn identifier(&mut self, start: &Cursor<'a>) -> Token {
        self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

        match start.slice_until(&self.cursor) {
            "var" => Var,
            name => Identifier(name.to_string()),
        }
    }

    // No escapes; an unterminated string runs to the end of the input.
    fn string(&mut self) -> Token {
        let contents = self.cursor.clone();
        self.cursor.advance_while(|c| c != '"');
        let value = contents.slice_until(&self.cursor).to_string();

        self.cursor.next(); // closing quote
        Str(value)
    }
}
