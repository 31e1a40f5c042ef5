//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Polynomial arithmetic on term-list files
#[derive(Parser, Debug)]
#[command(name = "polyterm", version)]
pub struct Cli {
    /// Log parsing and arithmetic details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a polynomial
    Show {
        /// Term-list file (`-` for stdin)
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the sum of two polynomials
    Add {
        /// First operand
        a: PathBuf,
        /// Second operand
        b: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the product of two polynomials
    #[command(alias = "mul")]
    Multiply {
        /// First operand
        a: PathBuf,
        /// Second operand
        b: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Evaluate a polynomial at one or more points
    Eval {
        /// Term-list file (`-` for stdin)
        file: PathBuf,

        /// Values of x
        #[arg(required = true, allow_negative_numbers = true)]
        points: Vec<f64>,
    },
}

/// How results are printed.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print `<coefficient> <degree>` lines instead of an expression
    #[arg(long)]
    pub lines: bool,
}
