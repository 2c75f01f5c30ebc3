//! Property-based tests for factorization over Q.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::rational::factor_over_q;
    use spectra_poly::algorithms::squarefree::is_squarefree;
    use spectra_poly::dense::DensePoly;
    use spectra_rings::rationals::Q;
    use spectra_rings::traits::Ring;

    fn small_factor() -> impl Strategy<Value = DensePoly<Q>> {
        prop_oneof![
            // linear with a small rational root
            (-4i64..=4, 1i64..=3).prop_map(|(n, d)| DensePoly::x_minus(Q::new(n, d))),
            // monic quadratic
            (-3i64..=3, -3i64..=3).prop_map(|(b, c)| {
                DensePoly::new(vec![Q::from_integer(c), Q::from_integer(b), Q::from_integer(1)])
            }),
        ]
    }

    fn product_poly() -> impl Strategy<Value = DensePoly<Q>> {
        (proptest::collection::vec(small_factor(), 1..=3), 1i64..=5).prop_map(|(fs, lead)| {
            fs.iter()
                .fold(DensePoly::constant(Q::from_integer(lead)), |acc, f| acc.mul(f))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn factorization_reconstructs(f in product_poly()) {
            let result = factor_over_q(&f).unwrap();
            prop_assert_eq!(result.expand(), f.clone());
            prop_assert_eq!(result.degree(), f.degree());
        }

        #[test]
        fn factors_are_monic_squarefree_and_sorted(f in product_poly()) {
            let result = factor_over_q(&f).unwrap();
            for (g, m) in &result.factors {
                prop_assert!(g.is_monic());
                prop_assert!(is_squarefree(g));
                prop_assert!(*m >= 1);
            }
            for pair in result.factors.windows(2) {
                let (a, b) = (&pair[0].0, &pair[1].0);
                prop_assert!(a != b);
                prop_assert!(
                    (a.degree(), a.coeffs()) <= (b.degree(), b.coeffs())
                );
            }
        }

        #[test]
        fn linear_factors_are_roots(f in product_poly()) {
            let result = factor_over_q(&f).unwrap();
            for (root, _) in result.rational_roots() {
                prop_assert!(f.eval(&root).is_zero());
            }
        }
    }
}
