//! Sparse univariate polynomials.
//!
//! A polynomial is stored as a vector of non-zero terms with unique
//! degrees, sorted by ascending degree. Every constructor and every
//! arithmetic operation maintains that invariant, so two polynomials with
//! the same terms always have the same representation.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

use tracing::trace;

use crate::coefficient::Coefficient;
use crate::term::Term;

/// A sparse univariate polynomial.
///
/// Operations never mutate their operands; each returns a new polynomial
/// that owns its own terms.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<F = f64> {
    /// Non-zero terms in ascending degree order.
    terms: Vec<Term<F>>,
}

impl<F: Coefficient> Polynomial<F> {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the single-term polynomial `coeff * x^degree`.
    #[must_use]
    pub fn monomial(coeff: F, degree: u64) -> Self {
        Self::from_term(Term::new(coeff, degree))
    }

    /// Creates a polynomial from one term.
    #[must_use]
    pub fn from_term(term: Term<F>) -> Self {
        if term.is_zero() {
            Self::zero()
        } else {
            Self { terms: vec![term] }
        }
    }

    /// Creates a polynomial from terms in any order.
    ///
    /// Terms are sorted by degree, like terms are combined and terms whose
    /// coefficients sum to zero are dropped.
    #[must_use]
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term<F>>,
    {
        let mut terms: Vec<_> = terms.into_iter().collect();
        terms.sort_by_key(Term::degree);

        let mut combined: Vec<Term<F>> = Vec::with_capacity(terms.len());
        for term in terms {
            match combined.last_mut() {
                Some(last) if last.degree() == term.degree() => {
                    *last = Term::new(last.coeff() + term.coeff(), term.degree());
                }
                _ => combined.push(term),
            }
        }
        combined.retain(|t| !t.is_zero());

        Self { terms: combined }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms in ascending degree order.
    #[must_use]
    pub fn terms(&self) -> &[Term<F>] {
        &self.terms
    }

    /// Iterates over the terms from the highest degree down.
    pub fn terms_descending(&self) -> impl Iterator<Item = &Term<F>> + '_ {
        self.terms.iter().rev()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u64> {
        self.terms.last().map(Term::degree)
    }

    /// Returns the highest-degree term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term<F>> {
        self.terms.last()
    }

    /// Returns the coefficient of `x^degree` (zero if absent).
    #[must_use]
    pub fn coeff(&self, degree: u64) -> F {
        self.terms
            .binary_search_by_key(&degree, Term::degree)
            .map_or_else(|_| F::zero(), |i| self.terms[i].coeff())
    }

    /// Adds two polynomials.
    ///
    /// Merges both term vectors in one pass. A degree whose coefficients
    /// cancel to exactly zero is left out and the merge carries on.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (a, b) = (&self.terms, &other.terms);
        let mut terms = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].degree().cmp(&b[j].degree()) {
                Ordering::Less => {
                    terms.push(a[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    terms.push(b[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    let coeff = a[i].coeff() + b[j].coeff();
                    if !coeff.is_zero() {
                        terms.push(Term::new(coeff, a[i].degree()));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        terms.extend_from_slice(&a[i..]);
        terms.extend_from_slice(&b[j..]);

        Self { terms }
    }

    /// Multiplies two polynomials.
    ///
    /// Each pairwise term product is folded into the running result with
    /// [`Polynomial::add`].
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::zero();

        for lhs in &self.terms {
            for rhs in &other.terms {
                let product = lhs.mul(rhs);
                trace!(%lhs, %rhs, %product, "partial product");
                result = result.add(&Self::from_term(product));
            }
        }

        result
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Term values are summed in ascending degree order.
    #[must_use]
    pub fn evaluate(&self, x: F) -> F {
        self.terms
            .iter()
            .fold(F::zero(), |acc, term| acc + term.eval(x))
    }
}

impl<F: Coefficient> Default for Polynomial<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Coefficient> From<Term<F>> for Polynomial<F> {
    fn from(term: Term<F>) -> Self {
        Self::from_term(term)
    }
}

impl<F: Coefficient> FromIterator<Term<F>> for Polynomial<F> {
    fn from_iter<I: IntoIterator<Item = Term<F>>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<F: Coefficient> Add for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Polynomial<F> {
        Polynomial::add(self, rhs)
    }
}

impl<F: Coefficient> Mul for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, rhs: Self) -> Polynomial<F> {
        self.multiply(rhs)
    }
}

impl<F: Coefficient> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, term) in self.terms_descending().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }

        Ok(())
    }
}
