//! Characteristic polynomial.

use spectra_poly::dense::DensePoly;
use spectra_rings::traits::Field;

use crate::dense_matrix::DenseMatrix;
use crate::error::MatrixError;

/// Computes `det(xI - A)` with the Faddeev-LeVerrier recurrence.
///
/// ```text
/// M_0 = 0,  c_n = 1
/// M_k = A·M_{k-1} + c_{n-k+1}·I
/// c_{n-k} = -tr(A·M_k) / k
/// ```
///
/// Exact over any field of characteristic zero. The result is monic of
/// degree n.
pub fn characteristic_polynomial<F: Field>(
    a: &DenseMatrix<F>,
) -> Result<DensePoly<F>, MatrixError> {
    let n = a.ensure_square()?;

    let mut coeffs = vec![F::zero(); n + 1];
    coeffs[n] = F::one();

    let mut m = DenseMatrix::zeros(n, n);
    for k in 1..=n {
        m = &a.mm(&m) + &DenseMatrix::scalar(n, coeffs[n - k + 1].clone());
        let k_inv = F::from_i64(k as i64)
            .inv()
            .unwrap_or_else(F::zero);
        coeffs[n - k] = -(a.mm(&m).trace() * k_inv);
    }

    Ok(DensePoly::new(coeffs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectra_rings::rationals::Q;
    use spectra_rings::traits::Ring;

    fn q(rows: &[&[i64]]) -> DenseMatrix<Q> {
        DenseMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&n| Q::from_integer(n)).collect())
                .collect(),
        )
    }

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    #[test]
    fn test_triangular() {
        // (x - 1)^2 (x + 2) = x^3 - 3x + 2
        let a = q(&[&[1, 2, 3], &[0, 1, 5], &[0, 0, -2]]);
        assert_eq!(characteristic_polynomial(&a).unwrap(), poly(&[2, -3, 0, 1]));
    }

    #[test]
    fn test_two_by_two() {
        // x^2 - tr x + det
        let a = q(&[&[1, 2], &[3, 4]]);
        assert_eq!(characteristic_polynomial(&a).unwrap(), poly(&[-2, -5, 1]));
    }

    #[test]
    fn test_one_by_one() {
        assert_eq!(characteristic_polynomial(&q(&[&[7]])).unwrap(), poly(&[-7, 1]));
    }

    #[test]
    fn test_rational_entries() {
        let a = DenseMatrix::from_rows(vec![
            vec![Q::new(1, 2), Q::zero()],
            vec![Q::one(), Q::new(-1, 3)],
        ]);
        let expected = DensePoly::x_minus(Q::new(1, 2)).mul(&DensePoly::x_minus(Q::new(-1, 3)));
        assert_eq!(characteristic_polynomial(&a).unwrap(), expected);
    }

    #[test]
    fn test_rejects_non_square() {
        let a = q(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(
            characteristic_polynomial(&a),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }
}
