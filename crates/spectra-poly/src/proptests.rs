//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::gcd::poly_gcd;
    use crate::algorithms::squarefree::squarefree_decomposition;
    use crate::dense::DensePoly;
    use spectra_rings::rationals::Q;

    // Small integer coefficients keep the rational arithmetic cheap
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-20i64..20i64).prop_map(Q::from_integer)
    }

    // Degree 0-4
    fn small_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(DensePoly::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = DensePoly<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Products of up to three linear factors with small integer roots
    fn split_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(-3i64..=3, 1..=4).prop_map(|roots| {
            roots.into_iter().fold(DensePoly::one(), |acc, r| {
                acc.mul(&DensePoly::x_minus(Q::from_integer(r)))
            })
        })
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let lhs = a.mul(&b.add(&c));
            let rhs = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn poly_eval_is_homomorphism(a in small_poly(), b in small_poly(), x in small_coeff()) {
            let lhs = a.mul(&b).eval(&x);
            let rhs = a.eval(&x) * b.eval(&x);
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn div_rem_reconstructs(a in small_poly(), b in nonzero_poly()) {
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = poly_gcd(&a, &b);
            prop_assert!(g.divides(&a));
            prop_assert!(g.divides(&b));
            prop_assert!(g.is_monic());
        }

        #[test]
        fn squarefree_reconstructs(f in split_poly()) {
            let decomp = squarefree_decomposition(&f);
            prop_assert_eq!(decomp.to_polynomial(), f);
            for sf in &decomp.factors {
                prop_assert!(sf.factor.is_monic());
                prop_assert!(crate::algorithms::squarefree::is_squarefree(&sf.factor));
            }
        }
    }
}
