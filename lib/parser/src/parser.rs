mod expr;
mod stmt;

use std::fmt::{self, Display, Formatter};

use log::{debug, warn};
use scanner::{Token, TokenKind, Tokens};

pub use expr::{BinaryOperator, Expr};
pub use stmt::{Program, Stmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    Expression,
}

impl Display for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{kind}"),
            Expected::Expression => write!(f, "expression"),
        }
    }
}

/// Deepest expression nesting, counting parentheses and operands absorbed by a
/// tighter-binding operator.
pub const MAX_NESTING: usize = 256;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    /// `found` is `None` at end of input.
    #[error("Expected {expected}, found {}", describe(.found))]
    Mismatch { expected: Expected, found: Option<Token> },
    #[error("Expression nested deeper than {} levels", MAX_NESTING)]
    TooDeep,
}

/// `position` is the index of the offending token.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error (token {position}): {error}")]
pub struct ParseError {
    pub error: ParseErrorType,
    pub position: usize,
}

impl ParseError {
    pub fn mismatch(expected: Expected, found: Option<Token>, position: usize) -> Self {
        Self { error: ParseErrorType::Mismatch { expected, found }, position }
    }
}

fn describe(found: &Option<Token>) -> String {
    found.as_ref().map_or_else(|| "end of input".to_string(), Token::to_string)
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Everything parsed before the first error, and that error if there was one.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub program: Program,
    pub error: Option<ParseError>,
}

impl Parsed {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<Program> {
        match self.error {
            None => Ok(self.program),
            Some(error) => Err(error),
        }
    }
}

pub fn parse(tokens: &Tokens) -> Parsed {
    Parser::new(tokens).parse()
}

#[derive(Debug)]
pub struct Parser<'t> {
    tokens: &'t Tokens,
    current: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t Tokens) -> Self {
        Self { tokens, current: 0, depth: 0 }
    }

    /// Parses statements until the tokens run out or one of them is malformed.
    /// There is no recovery: everything after a malformed statement is dropped.
    pub fn parse(mut self) -> Parsed {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            match self.statement() {
                Ok(stmt) => {
                    debug!("Parsed statement {:?}", stmt);
                    statements.push(stmt);
                }
                Err(error) => {
                    warn!("{error}");
                    return Parsed { program: Program::new(statements), error: Some(error) };
                }
            }
        }

        Parsed { program: Program::new(statements), error: None }
    }

    fn statement(&mut self) -> Result<Stmt> {
        if self.check(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.expression_statement()
        }
    }

    fn var_declaration(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::Var)?;
        let name = self.identifier()?;
        self.expect(TokenKind::Equals)?;
        let value = self.expression()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Stmt::VariableDeclaration { name, value })
    }

    fn expression_statement(&mut self) -> Result<Stmt> {
        let expr = self.expression()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Stmt::Expression(expr))
    }

    fn expression(&mut self) -> Result<Expr> {
        let left = self.primary()?;
        self.binary(left, 0)
    }

    // Precedence climbing. After reading the right operand, a following operator
    // that binds tighter than the current one takes that operand as its left side.
    fn binary(&mut self, mut left: Expr, min_precedence: u8) -> Result<Expr> {
        while let Some(operator) = self.peek_operator() {
            if operator.precedence() < min_precedence {
                break;
            }
            self.advance();

            let mut right = self.primary()?;
            if let Some(next) =
                self.peek_operator().filter(|next| next.precedence() > operator.precedence())
            {
                right = self.nested(|parser| parser.binary(right, next.precedence()))?;
            }

            left = Expr::binary(operator, left, right);
        }

        Ok(left)
    }

    fn primary(&mut self) -> Result<Expr> {
        match self.peek() {
            Some(Token::Number(value)) => {
                self.advance();
                Ok(Expr::Number(*value))
            }
            Some(Token::Identifier(name)) => {
                self.advance();
                Ok(Expr::Identifier(name.clone()))
            }
            Some(Token::LeftParen) => self.nested(|parser| {
                parser.advance();
                let expr = parser.expression()?;
                parser.expect(TokenKind::RightParen)?;
                Ok(expr)
            }),
            _ => Err(self.error(Expected::Expression)),
        }
    }

    fn identifier(&mut self) -> Result<String> {
        match self.peek() {
            Some(Token::Identifier(name)) => {
                self.advance();
                Ok(name.clone())
            }
            _ => Err(self.error(Expected::Token(TokenKind::Identifier))),
        }
    }
}

// Helpers
impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Token> {
        let tokens: &'t Tokens = self.tokens;
        tokens.get(self.current)
    }

    fn peek_operator(&self) -> Option<BinaryOperator> {
        self.peek().and_then(BinaryOperator::from_token)
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek();
        if token.is_some() {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().map(Token::kind) == Some(kind)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'t Token> {
        match self.peek() {
            Some(token) if token.kind() == kind => {
                self.current += 1;
                Ok(token)
            }
            _ => Err(self.error(Expected::Token(kind))),
        }
    }

    fn error(&self, expected: Expected) -> ParseError {
        ParseError::mismatch(expected, self.peek().cloned(), self.current)
    }

    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError { error: ParseErrorType::TooDeep, position: self.current });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }
}
