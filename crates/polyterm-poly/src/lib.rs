//! # polyterm-poly
//!
//! Sparse univariate polynomials with real coefficients.
//!
//! This crate provides:
//! - Immutable `(coefficient, degree)` terms
//! - Polynomials stored as a degree-sorted term vector
//! - Merge-based addition and term-by-term multiplication
//! - Evaluation at a point
//! - A line-based `<coefficient> <degree>` text format and display rendering
//!
//! ## Example
//!
//! ```
//! use polyterm_poly::Polynomial;
//!
//! let p: Polynomial = "4 5\n-2 3\n2 1\n3 0".parse().unwrap();
//! assert_eq!(p.to_string(), "4.0x^5 + -2.0x^3 + 2.0x + 3.0");
//! assert_eq!(p.evaluate(1.0), 7.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coefficient;
pub mod error;
pub mod polynomial;
pub mod term;
pub mod text;

#[cfg(test)]
mod proptests;

pub use coefficient::Coefficient;
pub use error::{ParseError, ReadError};
pub use polynomial::Polynomial;
pub use term::Term;
