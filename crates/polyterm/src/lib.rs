//! # Polyterm
//!
//! Single-variable polynomials with real coefficients.
//!
//! ## Features
//!
//! - **Sparse Terms**: only non-zero `(coefficient, degree)` pairs are stored
//! - **Arithmetic**: merge-based addition, term-wise multiplication, evaluation
//! - **Text Format**: one `<coefficient> <degree>` term per line, plus
//!   display rendering such as `4.0x^5 + -2.0x^3 + 2.0x + 3.0`
//!
//! ## Quick Start
//!
//! ```rust
//! use polyterm::prelude::*;
//!
//! let a: Polynomial = "2 1".parse().unwrap();
//! let b: Polynomial = "3 1".parse().unwrap();
//! assert_eq!(a.multiply(&b).to_string(), "6.0x^2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyterm_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyterm_poly::{Coefficient, ParseError, Polynomial, ReadError, Term};
}
