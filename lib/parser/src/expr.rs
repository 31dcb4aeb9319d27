use std::fmt::{self, Display, Formatter};

use scanner::Token;

use crate::stmt::write_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BinaryOperator {
    #[display(fmt = "PLUS")]
    Plus,
    #[display(fmt = "MINUS")]
    Minus,
    #[display(fmt = "MULTIPLY")]
    Multiply,
    #[display(fmt = "DIVIDE")]
    Divide,
}

impl BinaryOperator {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Plus),
            Token::Minus => Some(Self::Minus),
            Token::Multiply => Some(Self::Multiply),
            Token::Divide => Some(Self::Divide),
            _ => None,
        }
    }

    /// Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary { operator: BinaryOperator, left: Box<Expr>, right: Box<Expr> },
    Identifier(String),
    Number(f64),
}

impl Expr {
    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary { operator, left: Box::new(left), right: Box::new(right) }
    }

    pub(crate) fn dump(&self, f: &mut Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            Expr::Binary { operator, left, right } => {
                write_line(f, indent, format_args!("BINARY_OP: {operator}"))?;
                left.dump(f, indent + 1)?;
                right.dump(f, indent + 1)
            }
            Expr::Identifier(name) => write_line(f, indent, format_args!("IDENTIFIER: {name}")),
            Expr::Number(value) => write_line(f, indent, format_args!("NUMBER: {value:.6}")),
        }
    }
}

/// Parenthesized prefix form, e.g. `(+ 2 (* 3 4))`.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { operator, left, right } => {
                write!(f, "({} {} {})", operator.symbol(), left, right)
            }
            Expr::Identifier(name) => write!(f, "{name}"),
            Expr::Number(value) => write!(f, "{value}"),
        }
    }
}
