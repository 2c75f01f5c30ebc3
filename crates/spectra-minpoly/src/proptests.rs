//! Property-based tests for the minimal polynomial search.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::{EnumerationOrder, SearchConfig};
    use crate::search::minimal_polynomial_with;
    use crate::substitute::substitute;
    use spectra_linalg::{characteristic_polynomial, DenseMatrix};
    use spectra_poly::dense::DensePoly;
    use spectra_rings::rationals::Q;

    fn small_matrix(n: usize) -> impl Strategy<Value = DenseMatrix<Q>> {
        proptest::collection::vec(proptest::collection::vec(-3i64..=3, n), n).prop_map(|rows| {
            DenseMatrix::from_rows(
                rows.into_iter()
                    .map(|r| r.into_iter().map(Q::from_integer).collect())
                    .collect(),
            )
        })
    }

    // Upper triangular with diagonal in {-1, 0, 1}: repeated eigenvalues and
    // nontrivial Jordan blocks are common.
    fn defective_matrix() -> impl Strategy<Value = DenseMatrix<Q>> {
        (1usize..=4).prop_flat_map(|n| {
            (
                proptest::collection::vec(-1i64..=1, n),
                proptest::collection::vec(0i64..=1, n * n),
            )
                .prop_map(move |(diag, upper)| {
                    let mut m = DenseMatrix::zeros(n, n);
                    for i in 0..n {
                        m[(i, i)] = Q::from_integer(diag[i]);
                        for j in i + 1..n {
                            m[(i, j)] = Q::from_integer(upper[i * n + j]);
                        }
                    }
                    m
                })
        })
    }

    fn any_matrix() -> impl Strategy<Value = DenseMatrix<Q>> {
        prop_oneof![(1usize..=3).prop_flat_map(small_matrix), defective_matrix()]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn zero_power_is_identity(a in any_matrix()) {
            let result = substitute(&a, &[DensePoly::x()], &[0]).unwrap();
            prop_assert_eq!(result, DenseMatrix::identity(a.num_rows()));
        }

        #[test]
        fn minpoly_annihilates_and_divides(a in any_matrix()) {
            let m = minimal_polynomial_with(&a, &SearchConfig::default()).unwrap();
            let factors = m.characteristic.irreducibles();

            prop_assert!(substitute(&a, &factors, &m.exponents).unwrap().is_zero());
            prop_assert!(m.polynomial.divides(&characteristic_polynomial(&a).unwrap()));
            prop_assert!(m.polynomial.is_monic());
            for (e, full) in m.exponents.iter().zip(m.characteristic.multiplicities()) {
                prop_assert!(*e >= 1 && *e <= full);
            }
        }

        #[test]
        fn lowering_any_exponent_fails(a in any_matrix()) {
            let m = minimal_polynomial_with(&a, &SearchConfig::default()).unwrap();
            let factors = m.characteristic.irreducibles();

            for i in 0..m.exponents.len() {
                let mut lower = m.exponents.clone();
                lower[i] -= 1;
                prop_assert!(!substitute(&a, &factors, &lower).unwrap().is_zero());
            }
        }

        #[test]
        fn orders_agree_on_annihilation(a in any_matrix()) {
            let degree = minimal_polynomial_with(&a, &SearchConfig::default()).unwrap();
            let config = SearchConfig::default().with_order(EnumerationOrder::RoundRobinByNorm);
            let round_robin = minimal_polynomial_with(&a, &config).unwrap();
            let factors = round_robin.characteristic.irreducibles();

            prop_assert!(substitute(&a, &factors, &round_robin.exponents).unwrap().is_zero());
            prop_assert!(degree.polynomial.divides(&round_robin.polynomial));
            prop_assert!(degree.degree() <= round_robin.degree());
        }
    }
}
