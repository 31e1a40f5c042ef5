//! Coefficient types.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::Float;

/// A real coefficient type.
///
/// Implemented for every floating-point type that can be parsed from and
/// rendered to text, which in practice means `f32` and `f64`.
pub trait Coefficient: Float + Debug + Display + FromStr {}

impl<T: Float + Debug + Display + FromStr> Coefficient for T {}

/// Computes `x^n` as `x * x^(n-1)`, one multiplication per step.
///
/// `x^0` is one for every `x`, including zero. Rounding matches the
/// recursive definition exactly.
#[must_use]
pub fn pow<F: Coefficient>(x: F, n: u64) -> F {
    let mut result = F::one();
    for _ in 0..n {
        result = x * result;
    }
    result
}
