//! Property-based tests for polynomial arithmetic.
//!
//! Coefficients and evaluation points are small integers, so every sum and
//! product below stays exactly representable in `f64`.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;
    use crate::term::Term;

    // Strategy for generating small integral coefficients (zero included)
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-10i32..=10i32).prop_map(f64::from)
    }

    // Strategy for generating sparse polynomials (degree 0-8, up to 6 terms)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((small_coeff(), 0u64..=8), 0..=6)
            .prop_map(|terms| {
                terms
                    .into_iter()
                    .map(|(c, d)| Term::new(c, d))
                    .collect::<Polynomial>()
            })
    }

    fn small_x() -> impl Strategy<Value = f64> {
        (-3i32..=3i32).prop_map(f64::from)
    }

    fn is_canonical(p: &Polynomial) -> bool {
        p.terms().iter().all(|t| t.coeff() != 0.0)
            && p.terms().windows(2).all(|w| w[0].degree() < w[1].degree())
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_add_matches_coefficientwise_sum(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert!(is_canonical(&sum));
            for degree in 0..=8 {
                prop_assert_eq!(sum.coeff(degree), a.coeff(degree) + b.coeff(degree));
            }
        }

        #[test]
        fn poly_add_drops_cancelled_degrees(a in small_poly()) {
            let neg: Polynomial = a
                .terms()
                .iter()
                .map(|t| Term::new(-t.coeff(), t.degree()))
                .collect();
            prop_assert!(a.add(&neg).is_zero());
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.multiply(&b.add(&c));
            let right = a.multiply(&b).add(&a.multiply(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_canonical(a in small_poly(), b in small_poly()) {
            prop_assert!(is_canonical(&a.multiply(&b)));
        }

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            // Integral coefficients have no zero divisors
            let product = a.multiply(&b);
            match (a.degree(), b.degree()) {
                (Some(da), Some(db)) => prop_assert_eq!(product.degree(), Some(da + db)),
                _ => prop_assert!(product.is_zero()),
            }
        }

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_x()) {
            // (a + b)(x) = a(x) + b(x)
            prop_assert_eq!(a.add(&b).evaluate(x), a.evaluate(x) + b.evaluate(x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_x()) {
            // (a * b)(x) = a(x) * b(x)
            prop_assert_eq!(a.multiply(&b).evaluate(x), a.evaluate(x) * b.evaluate(x));
        }

        #[test]
        fn poly_text_roundtrip(a in small_poly()) {
            let back: Polynomial = a.to_text().parse().unwrap();
            prop_assert_eq!(back, a);
        }

        #[test]
        fn poly_display_lists_descending_degrees(a in small_poly()) {
            let rendered = a.to_string();
            if a.is_zero() {
                prop_assert_eq!(rendered, "0");
            } else {
                prop_assert_eq!(rendered.split(" + ").count(), a.len());
            }
        }
    }
}
