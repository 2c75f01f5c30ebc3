//! Integration tests for spectra-minpoly.

#[cfg(test)]
mod integration_tests {
    use std::time::Duration;

    use crate::candidates::enumerate_candidates_weighted;
    use crate::config::{CancelToken, EnumerationOrder, SearchConfig};
    use crate::error::{Mismatch, MinPolyError};
    use crate::search::{minimal_polynomial, minimal_polynomial_with, minimal_polynomials};
    use crate::substitute::substitute;
    use spectra_linalg::{characteristic_polynomial, jordan_form, parse_matrix, DenseMatrix};
    use spectra_poly::dense::DensePoly;
    use spectra_rings::rationals::Q;
    use spectra_rings::traits::Ring;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    #[test]
    fn test_defective_triangular() {
        let a = parse_matrix("[1 2 3; 0 1 5; 0 0 -2]").unwrap();
        let m = minimal_polynomial_with(&a, &SearchConfig::default()).unwrap();

        assert_eq!(m.to_string(), "(x - 1)^2(x + 2)");
        assert_eq!(m.polynomial, poly(&[2, -3, 0, 1]));
        assert_eq!(m.characteristic.to_string(), "(x - 1)^2(x + 2)");
        // (1,1) is tried first and fails
        assert_eq!(m.tested, 2);
    }

    #[test]
    fn test_identity() {
        let a: DenseMatrix<Q> = DenseMatrix::identity(3);
        assert_eq!(minimal_polynomial(&a).unwrap(), poly(&[-1, 1]));
    }

    #[test]
    fn test_single_jordan_block() {
        let a = parse_matrix("[1 1; 0 1]").unwrap();
        assert_eq!(minimal_polynomial(&a).unwrap(), poly(&[1, -2, 1]));
    }

    #[test]
    fn test_irreducible_quadratic_factor() {
        // two quarter-turn rotation blocks
        let a = parse_matrix("[0 -1 0 0; 1 0 0 0; 0 0 0 -1; 0 0 1 0]").unwrap();
        let m = minimal_polynomial_with(&a, &SearchConfig::default()).unwrap();
        assert_eq!(m.to_string(), "(x^2 + 1)");
        assert_eq!(m.characteristic.to_string(), "(x^2 + 1)^2");
    }

    #[test]
    fn test_singular_matrices() {
        let cases: [(&str, &[i64]); 6] = [
            ("[0 1; 0 0]", &[0, 0, 1]),
            ("[0 0; 0 0]", &[0, 1]),
            ("[0]", &[0, 1]),
            ("[1 1; 1 1]", &[0, -2, 1]),
            ("[1 2; 2 4]", &[0, -5, 1]),
            ("[2 0 0; 0 0 0; 0 0 0]", &[0, -2, 1]),
        ];

        for (text, expected) in cases {
            let a = parse_matrix(text).unwrap();
            assert_eq!(minimal_polynomial(&a).unwrap(), poly(expected), "{text}");
        }

        let nilpotent = parse_matrix("[0 1; 0 0]").unwrap();
        let m = minimal_polynomial_with(&nilpotent, &SearchConfig::default()).unwrap();
        assert_eq!(m.to_string(), "(x)^2");
    }

    #[test]
    fn test_non_square_is_rejected() {
        let a = parse_matrix("[1 2 3; 4 5 6]").unwrap();
        assert_eq!(
            minimal_polynomial(&a),
            Err(MinPolyError::DimensionMismatch(Mismatch::NotSquare {
                rows: 2,
                cols: 3
            }))
        );
        assert_eq!(
            minimal_polynomial(&DenseMatrix::zeros(0, 0)),
            Err(MinPolyError::DimensionMismatch(Mismatch::Empty))
        );
    }

    #[test]
    fn test_mismatched_lengths() {
        let a = parse_matrix("[1 2; 3 4]").unwrap();
        assert_eq!(
            substitute(&a, &[poly(&[-1, 1])], &[1, 2]),
            Err(MinPolyError::DimensionMismatch(Mismatch::LengthMismatch {
                factors: 1,
                powers: 2
            }))
        );
    }

    #[test]
    fn test_characteristic_factors_annihilate() {
        let a = parse_matrix("[2 -1 0 3; 1 0 4 1; 0 5 -2 2; 1 1 1 1]").unwrap();
        let m = minimal_polynomial_with(&a, &SearchConfig::default()).unwrap();

        let factors = m.characteristic.irreducibles();
        let full = m.characteristic.multiplicities();
        assert!(substitute(&a, &factors, &full).unwrap().is_zero());
        assert!(substitute(&a, &factors, &m.exponents).unwrap().is_zero());
    }

    #[test]
    fn test_minpoly_divides_charpoly() {
        let a = parse_matrix("[3 1 0 0; 0 3 0 0; 0 0 3 0; 0 0 0 -1]").unwrap();
        let m = minimal_polynomial_with(&a, &SearchConfig::default()).unwrap();
        let charpoly = characteristic_polynomial(&a).unwrap();

        assert!(m.polynomial.divides(&charpoly));
        assert!(m.polynomial.is_monic());
        assert_eq!(m.degree(), 3);
    }

    #[test]
    fn test_no_earlier_candidate_annihilates() {
        let a = parse_matrix("[2 1 0 0 0; 0 2 1 0 0; 0 0 2 0 0; 0 0 0 -1 1; 0 0 0 0 -1]").unwrap();
        let m = minimal_polynomial_with(&a, &SearchConfig::default()).unwrap();
        let factors = m.characteristic.irreducibles();
        let degrees: Vec<usize> = factors.iter().map(DensePoly::degree).collect();

        let earlier = enumerate_candidates_weighted(
            &m.characteristic.multiplicities(),
            &degrees,
            EnumerationOrder::TotalDegree,
        )
        .unwrap()
        .take(m.tested - 1);

        for exponents in earlier {
            assert!(!substitute(&a, &factors, &exponents).unwrap().is_zero());
        }
        // (x - 2)^3 (x + 1)^2
        assert_eq!(m.exponents.as_slice(), &[3, 2]);
    }

    #[test]
    fn test_jordan_index_matches_exponent() {
        let a = parse_matrix("[4 1 0 0 0; 0 4 0 0 0; 0 0 4 0 0; 0 0 0 1 1; 0 0 0 0 1]").unwrap();
        let m = minimal_polynomial_with(&a, &SearchConfig::default()).unwrap();
        let jd = jordan_form(&a).unwrap();

        for ((factor, exponent), root) in m
            .factored
            .factors
            .iter()
            .zip(m.factored.rational_roots().map(|(r, _)| r))
        {
            assert_eq!(factor.degree(), 1);
            assert_eq!(jd.index_of(&root), *exponent as usize);
        }
    }

    #[test]
    fn test_budget_limits() {
        let a = parse_matrix("[1 2 3; 0 1 5; 0 0 -2]").unwrap();

        let capped = SearchConfig::default().with_max_candidates(1);
        assert!(matches!(
            minimal_polynomial_with(&a, &capped),
            Err(MinPolyError::SearchTimedOut { tested: 1, .. })
        ));

        let timed = SearchConfig::default().with_timeout(Duration::ZERO);
        assert!(matches!(
            minimal_polynomial_with(&a, &timed),
            Err(MinPolyError::SearchTimedOut { tested: 0, .. })
        ));

        let token = CancelToken::new();
        token.cancel();
        let cancelled = SearchConfig::default().with_cancel_token(token);
        assert!(matches!(
            minimal_polynomial_with(&a, &cancelled),
            Err(MinPolyError::SearchTimedOut { tested: 0, .. })
        ));
    }

    #[test]
    fn test_round_robin_annihilates() {
        let a = parse_matrix("[2 1 0 0; 0 2 0 0; 0 0 2 0; 0 0 0 5]").unwrap();
        let config = SearchConfig::default().with_order(EnumerationOrder::RoundRobinByNorm);
        let rr = minimal_polynomial_with(&a, &config).unwrap();
        let minimal = minimal_polynomial(&a).unwrap();

        let factors = rr.characteristic.irreducibles();
        assert!(substitute(&a, &factors, &rr.exponents).unwrap().is_zero());
        assert!(minimal.divides(&rr.polynomial));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let matrices: Vec<DenseMatrix<Q>> = [
            "[1 2 3; 0 1 5; 0 0 -2]",
            "[1 1; 0 1]",
            "[0 -1; 1 0]",
            "[1 2 3; 4 5 6]",
            "[7]",
        ]
        .iter()
        .map(|s| parse_matrix(s).unwrap())
        .collect();

        let config = SearchConfig::default();
        let batch = minimal_polynomials(&matrices, &config);
        assert_eq!(batch.len(), matrices.len());

        for (a, result) in matrices.iter().zip(batch) {
            assert_eq!(result, minimal_polynomial_with(a, &config));
        }
    }

    #[test]
    fn test_rational_entries() {
        let a = parse_matrix("[1/2 1; 0 1/2]").unwrap();
        let m = minimal_polynomial(&a).unwrap();
        assert_eq!(m, DensePoly::x_minus(Q::new(1, 2)).pow(2));
        assert!(m.leading_coeff().is_one());
    }
}
