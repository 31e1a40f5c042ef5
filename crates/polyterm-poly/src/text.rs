//! The line-based term-list format.
//!
//! Each line holds one term as two whitespace-separated tokens:
//!
//! ```text
//! <coefficient> <degree>
//! ```
//!
//! Writers emit terms in descending degree order, which is also the order
//! readers expect. Readers do not check that order; terms are canonicalized
//! on the way in, so the polynomial is well-formed either way.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::coefficient::Coefficient;
use crate::error::{ParseError, ReadError};
use crate::polynomial::Polynomial;
use crate::term::Term;

/// Parses one `<coefficient> <degree>` line.
///
/// `line_no` is 1-based and only used for error reporting. Tokens after the
/// degree are ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] if either token is missing or malformed.
pub fn parse_term<F: Coefficient>(line: &str, line_no: usize) -> Result<Term<F>, ParseError> {
    let mut tokens = line.split_whitespace();

    let coeff_token = tokens
        .next()
        .ok_or(ParseError::MissingCoefficient { line: line_no })?;
    let degree_token = tokens
        .next()
        .ok_or(ParseError::MissingDegree { line: line_no })?;

    let coeff = coeff_token
        .parse::<F>()
        .map_err(|_| ParseError::InvalidCoefficient {
            line: line_no,
            token: coeff_token.to_owned(),
        })?;
    let degree = degree_token
        .parse::<u64>()
        .map_err(|source| ParseError::InvalidDegree {
            line: line_no,
            token: degree_token.to_owned(),
            source,
        })?;

    if tokens.next().is_some() {
        warn!(line = line_no, "ignoring tokens after degree");
    }

    Ok(Term::new(coeff, degree))
}

impl<F: Coefficient> Polynomial<F> {
    /// Parses a polynomial from term lines.
    ///
    /// Parsing stops at the first bad line. No lines gives the zero
    /// polynomial.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first malformed line.
    pub fn parse_lines<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| parse_term(line.as_ref(), i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(terms = terms.len(), "parsed polynomial");
        Ok(Self::from_terms(terms))
    }

    /// Reads a polynomial from a buffered reader until end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] if the reader fails and
    /// [`ReadError::Parse`] if a line is malformed.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, ReadError> {
        let mut terms = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            terms.push(parse_term(&line, i + 1)?);
        }

        debug!(terms = terms.len(), "read polynomial");
        Ok(Self::from_terms(terms))
    }

    /// Writes the polynomial as term lines, highest degree first.
    ///
    /// The zero polynomial writes nothing.
    ///
    /// # Errors
    ///
    /// Propagates any error from the writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for term in self.terms_descending() {
            writeln!(writer, "{} {}", term.coeff(), term.degree())?;
        }
        Ok(())
    }

    /// Renders the polynomial as term lines, highest degree first.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.terms_descending()
            .map(|t| format!("{} {}\n", t.coeff(), t.degree()))
            .collect()
    }
}

impl<F: Coefficient> FromStr for Polynomial<F> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lines(s.lines())
    }
}
