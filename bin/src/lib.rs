use std::io::Write;

use parser::{ParseError, Program};
use scanner::ScanError;

#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Scans and parses `source`, writing the token dump and the syntax tree to `output`.
///
/// A scan error stops before anything is written. A parse error still writes
/// the statements parsed before it.
pub fn run_source(source: &str, output: &mut impl Write) -> Result<Program, RunError> {
    let tokens = scanner::tokenize(source)?;
    log::debug!("Scanned {} tokens", tokens.len());

    writeln!(output, "=== TOKENS ===")?;
    writeln!(output, "{tokens}")?;
    writeln!(output)?;

    let parsed = parser::parse(&tokens);

    writeln!(output, "=== AST ===")?;
    writeln!(output, "{}", parsed.program)?;

    Ok(parsed.into_result()?)
}
