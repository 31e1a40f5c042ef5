//! Subcommand handlers.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use polyterm_poly::Polynomial;
use tracing::debug;

use crate::cli::{Command, OutputArgs};

/// Runs a subcommand and returns what should be printed.
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Show { file, output } => Ok(render(&load(file)?, *output)),
        Command::Add { a, b, output } => {
            let (a, b) = load_pair(a, b)?;
            Ok(render(&a.add(&b), *output))
        }
        Command::Multiply { a, b, output } => {
            let (a, b) = load_pair(a, b)?;
            Ok(render(&a.multiply(&b), *output))
        }
        Command::Eval { file, points } => {
            let p = load(file)?;
            Ok(points
                .iter()
                .map(|&x| format!("p({x:?}) = {:?}\n", p.evaluate(x)))
                .collect())
        }
    }
}

/// Reads a polynomial from a file, or from stdin for `-`.
pub fn load(path: &Path) -> Result<Polynomial> {
    let poly: Polynomial = if is_stdin(path) {
        Polynomial::read_from(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        Polynomial::read_from(BufReader::new(file))
    }
    .with_context(|| format!("cannot read polynomial from {}", path.display()))?;

    debug!(path = %path.display(), terms = poly.len(), "loaded polynomial");
    Ok(poly)
}

fn load_pair(a: &Path, b: &Path) -> Result<(Polynomial, Polynomial)> {
    if is_stdin(a) && is_stdin(b) {
        bail!("only one operand can be read from stdin");
    }
    Ok((load(a)?, load(b)?))
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn render(p: &Polynomial, output: OutputArgs) -> String {
    if output.lines {
        p.to_text()
    } else {
        format!("{p}\n")
    }
}
