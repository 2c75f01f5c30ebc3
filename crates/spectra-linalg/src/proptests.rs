//! Property-based tests for characteristic polynomials and Jordan forms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::charpoly::characteristic_polynomial;
    use crate::dense_matrix::DenseMatrix;
    use crate::jordan::jordan_form;
    use spectra_rings::rationals::Q;

    fn small_matrix(n: usize) -> impl Strategy<Value = DenseMatrix<Q>> {
        proptest::collection::vec(proptest::collection::vec(-4i64..=4, n), n).prop_map(|rows| {
            DenseMatrix::from_rows(
                rows.into_iter()
                    .map(|r| r.into_iter().map(Q::from_integer).collect())
                    .collect(),
            )
        })
    }

    // Upper triangular with a few repeated diagonal values, so the spectrum
    // is rational and often defective.
    fn triangular_matrix() -> impl Strategy<Value = DenseMatrix<Q>> {
        (1usize..=4).prop_flat_map(|n| {
            (
                proptest::collection::vec(-1i64..=1, n),
                proptest::collection::vec(-2i64..=2, n * n),
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

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn charpoly_is_monic_with_trace(a in (1usize..=4).prop_flat_map(small_matrix)) {
            let p = characteristic_polynomial(&a).unwrap();
            let n = a.num_rows();
            prop_assert_eq!(p.degree(), n);
            prop_assert!(p.is_monic());
            prop_assert_eq!(p.coeff(n - 1), -a.trace());
        }

        #[test]
        fn charpoly_is_similarity_invariant(a in small_matrix(3)) {
            // unimodular change of basis
            let s = DenseMatrix::from_rows(vec![
                vec![Q::from_integer(1), Q::from_integer(2), Q::from_integer(0)],
                vec![Q::from_integer(0), Q::from_integer(1), Q::from_integer(-1)],
                vec![Q::from_integer(1), Q::from_integer(0), Q::from_integer(1)],
            ]);
            let s_inv = s.inverse().unwrap();
            let b = s_inv.mm(&a).mm(&s);
            prop_assert_eq!(characteristic_polynomial(&a).unwrap(), characteristic_polynomial(&b).unwrap());
        }

        #[test]
        fn jordan_form_conjugates(a in triangular_matrix()) {
            let jd = jordan_form(&a).unwrap();
            prop_assert_eq!(a.mm(&jd.p), jd.p.mm(&jd.j));
            prop_assert!(jd.p.inverse().is_some());
        }
    }
}
