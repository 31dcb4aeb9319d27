use std::{io::stdout, path::PathBuf};

use anyhow::Context;
use clap::Parser;

/// Print the tokens and the syntax tree of a source file.
#[derive(clap::Parser)]
struct Args {
    #[arg(default_value = "demos/vars.js")]
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Error opening file '{}'", args.file.display()))?;

    varlang::run_source(&source, &mut stdout())?;
    Ok(())
}
