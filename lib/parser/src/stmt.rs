use std::fmt::{self, Arguments, Display, Formatter};

use crate::Expr;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VariableDeclaration { name: String, value: Expr },
    Expression(Expr),
}

impl Stmt {
    fn dump(&self, f: &mut Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            Stmt::VariableDeclaration { name, value } => {
                write_line(f, indent, format_args!("VAR_DECL: {name}"))?;
                value.dump(f, indent + 1)
            }
            Stmt::Expression(expr) => expr.dump(f, indent),
        }
    }
}

/// Root of the tree. Statements are in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}

/// Indented dump, one node per line, children one level deeper.
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PROGRAM")?;
        self.statements.iter().try_for_each(|stmt| stmt.dump(f, 1))
    }
}

pub(crate) fn write_line(f: &mut Formatter<'_>, indent: usize, line: Arguments<'_>) -> fmt::Result {
    write!(f, "\n{:width$}{line}", "", width = indent * 2)
}
