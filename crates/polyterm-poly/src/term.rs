//! Polynomial terms.
//!
//! A term is an immutable `coefficient * x^degree` pair. Equality is exact
//! on both fields; no tolerance is applied to coefficients.

use std::fmt;

use crate::coefficient::{pow, Coefficient};

/// A single term `coeff * x^degree`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Term<F = f64> {
    coeff: F,
    degree: u64,
}

impl<F: Coefficient> Term<F> {
    /// Creates a term with the given coefficient and degree.
    #[must_use]
    pub const fn new(coeff: F, degree: u64) -> Self {
        Self { coeff, degree }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> F {
        self.coeff
    }

    /// Returns the degree.
    #[must_use]
    pub fn degree(&self) -> u64 {
        self.degree
    }

    /// Returns true if the coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Multiplies two terms (multiplies coefficients, adds degrees).
    ///
    /// The degree sum saturates at `u64::MAX`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            coeff: self.coeff * other.coeff,
            degree: self.degree.saturating_add(other.degree),
        }
    }

    /// Evaluates the term at `x`.
    #[must_use]
    pub fn eval(&self, x: F) -> F {
        self.coeff * pow(x, self.degree)
    }
}

impl<F: Coefficient> fmt::Display for Term<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the fractional part of integral floats ("4.0").
        match self.degree {
            0 => write!(f, "{:?}", self.coeff),
            1 => write!(f, "{:?}x", self.coeff),
            d => write!(f, "{:?}x^{d}", self.coeff),
        }
    }
}
