use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
};

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, strum_macros::EnumDiscriminants)]
#[strum_discriminants(name(TokenKind), derive(Hash))]
#[cfg_attr(test, strum_discriminants(derive(strum_macros::EnumIter)))]
pub enum Token {
    // Keywords.
    Var,

    // Single-character tokens.
    Equals,
    Plus,
    Minus,
    Multiply,
    Divide,
    Period,
    Semicolon,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,

    // Literals.
    Identifier(String),
    Number(f64),
    Str(String),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.into()
    }
}

impl TokenKind {
    /// Upper-case name used by the token dump and in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Var => "VAR",
            TokenKind::Equals => "EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Period => "PERIOD",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LeftParen => "LEFT PARENS",
            TokenKind::RightParen => "RIGHT PARENS",
            TokenKind::LeftBracket => "OPENING BRACKET",
            TokenKind::RightBracket => "CLOSING BRACKET",
            TokenKind::LeftBrace => "OPENING BRACE",
            TokenKind::RightBrace => "CLOSING BRACE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Str => "STRING",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{} {name}", self.kind()),
            Token::Number(value) => write!(f, "{} {value:.6}", self.kind()),
            Token::Str(value) => write!(f, "{} {value}", self.kind()),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// Ordered output of the scanner. Only grows while scanning; the parser reads
/// it by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.0.push(token)
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.0
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl Deref for Tokens {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Tokens {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn kind_names_are_upper_case() {
        for kind in TokenKind::iter() {
            assert_eq!(kind.name(), kind.name().to_uppercase());
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn token_display() {
        assert_eq!(Token::Var.to_string(), "VAR");
        assert_eq!(Token::LeftParen.to_string(), "LEFT PARENS");
        assert_eq!(Token::RightBrace.to_string(), "CLOSING BRACE");
        assert_eq!(Token::Identifier("x".to_string()).to_string(), "IDENTIFIER x");
        assert_eq!(Token::Number(0.0).to_string(), "NUMBER 0.000000");
        assert_eq!(Token::Number(3.25).to_string(), "NUMBER 3.250000");
        assert_eq!(Token::Str("hi there".to_string()).to_string(), "STRING hi there");
    }

    #[test]
    fn tokens_display_one_per_line() {
        let tokens: Tokens = vec![
            Token::Var,
            Token::Identifier("x".to_string()),
            Token::Equals,
            Token::Number(0.0),
            Token::Semicolon,
        ]
        .into();

        assert_eq!(
            tokens.to_string(),
            "VAR\nIDENTIFIER x\nEQUALS\nNUMBER 0.000000\nSEMICOLON"
        );
        assert_eq!(Tokens::new().to_string(), "");
    }

    #[test]
    fn kind_of_payload_tokens() {
        assert_eq!(Token::Identifier("a".to_string()).kind(), TokenKind::Identifier);
        assert_eq!(Token::Number(1.0).kind(), TokenKind::Number);
        assert_eq!(Token::Str(String::new()).kind(), TokenKind::Str);
        assert_eq!(Token::Divide.kind(), TokenKind::Divide);
    }
}
