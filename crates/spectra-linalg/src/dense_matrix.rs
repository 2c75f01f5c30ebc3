//! Dense matrices over an exact ring.
//!
//! Every operation returns a new matrix; inputs are never mutated.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use spectra_rings::traits::{Field, Ring};

use crate::error::MatrixError;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        match Self::try_from_rows(rows) {
            Ok(m) => m,
            Err(MatrixError::Empty) => Self::zeros(0, 0),
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a matrix from a 2D vector, rejecting empty or ragged input.
    pub fn try_from_rows(rows: Vec<Vec<R>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(MatrixError::Empty);
        }

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(MatrixError::RaggedRow {
                row,
                expected: num_cols,
                found: r.len(),
            });
        }

        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix whose columns are the given vectors.
    ///
    /// # Panics
    ///
    /// Panics if the columns have different lengths.
    #[must_use]
    pub fn from_columns(columns: &[Vec<R>]) -> Self {
        let num_cols = columns.len();
        let num_rows = columns.first().map_or(0, Vec::len);
        let mut m = Self::zeros(num_rows, num_cols);
        for (col, values) in columns.iter().enumerate() {
            m.set_col(col, values);
        }
        m
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::scalar(n, R::one())
    }

    /// Creates `c * I_n`.
    #[must_use]
    pub fn scalar(n: usize, c: R) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = c.clone();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Checks that the matrix is square and non-empty.
    pub fn ensure_square(&self) -> Result<usize, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            });
        }
        if self.num_rows == 0 {
            return Err(MatrixError::Empty);
        }
        Ok(self.num_rows)
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Ring::is_zero)
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[R]> + '_ {
        (0..self.num_rows).map(move |row| self.row(row))
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Sets a column from a slice.
    pub fn set_col(&mut self, col: usize, values: &[R]) {
        assert_eq!(values.len(), self.num_rows);
        for (row, val) in values.iter().enumerate() {
            self[(row, col)] = val.clone();
        }
    }

    /// Sum of the diagonal entries.
    #[must_use]
    pub fn trace(&self) -> R {
        (0..self.num_rows.min(self.num_cols)).fold(R::zero(), |acc, i| acc + self[(i, i)].clone())
    }

    /// Matrix-vector multiply: y = A * x.
    #[must_use]
    pub fn mv(&self, x: &[R]) -> Vec<R> {
        assert_eq!(x.len(), self.num_cols);
        (0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x.iter())
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect()
    }

    /// Matrix-matrix multiply: C = A * B.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for k in 0..self.num_cols {
                let a = &self[(i, k)];
                if a.is_zero() {
                    continue;
                }
                for j in 0..other.num_cols {
                    result[(i, j)] = result[(i, j)].clone() + a.clone() * other[(k, j)].clone();
                }
            }
        }
        result
    }

    /// Raises a square matrix to a power by repeated squaring; `A^0 = I`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        assert!(self.is_square());
        let mut result = Self::identity(self.num_rows);
        let mut base = self.clone();
        let mut exp = exp;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mm(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mm(&base);
            }
        }

        result
    }

    /// Returns `A - c * I`.
    #[must_use]
    pub fn shift(&self, c: &R) -> Self {
        assert!(self.is_square());
        let mut m = self.clone();
        for i in 0..self.num_rows {
            m[(i, i)] = m[(i, i)].clone() - c.clone();
        }
        m
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        Self {
            data: self.data.iter().map(|v| v.clone() * scalar.clone()).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }
}

impl<F: Field> DenseMatrix<F> {
    /// Gaussian elimination.
    ///
    /// Returns (row-echelon form with unit pivots, rank).
    #[must_use]
    pub fn row_echelon(&self) -> (Self, usize) {
        let mut m = self.clone();
        let mut pivot_row = 0;
        let mut pivot_col = 0;

        while pivot_row < m.num_rows && pivot_col < m.num_cols {
            let Some(found) = (pivot_row..m.num_rows).find(|&row| !m[(row, pivot_col)].is_zero())
            else {
                pivot_col += 1;
                continue;
            };

            m.swap_rows(pivot_row, found);

            let pivot_val = m[(pivot_row, pivot_col)].clone();
            if let Some(inv) = pivot_val.inv() {
                m.scale_row(pivot_row, &inv);
            }

            for row in pivot_row + 1..m.num_rows {
                if !m[(row, pivot_col)].is_zero() {
                    let factor = -m[(row, pivot_col)].clone();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }

            pivot_row += 1;
            pivot_col += 1;
        }

        (m, pivot_row)
    }

    /// Reduced row echelon form (Gauss-Jordan elimination).
    ///
    /// Returns (RREF, pivot columns).
    #[must_use]
    pub fn rref(&self) -> (Self, Vec<usize>) {
        let (mut m, rank) = self.row_echelon();
        let mut pivots = Vec::with_capacity(rank);

        for pivot_row in 0..rank {
            if let Some(col) = (0..m.num_cols).find(|&col| !m[(pivot_row, col)].is_zero()) {
                pivots.push(col);
            }
        }

        for (pivot_row, &pivot_col) in pivots.iter().enumerate().rev() {
            for row in 0..pivot_row {
                if !m[(row, pivot_col)].is_zero() {
                    let factor = -m[(row, pivot_col)].clone();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }
        }

        (m, pivots)
    }

    /// Rank over the field.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.row_echelon().1
    }

    /// Computes a null space basis.
    ///
    /// One vector per free column, with that coordinate set to 1.
    #[must_use]
    pub fn null_space(&self) -> Vec<Vec<F>> {
        let (rref, pivots) = self.rref();

        (0..self.num_cols)
            .filter(|col| !pivots.contains(col))
            .map(|free| {
                let mut v = vec![F::zero(); self.num_cols];
                v[free] = F::one();
                for (pivot_row, &pivot_col) in pivots.iter().enumerate() {
                    v[pivot_col] = -rref[(pivot_row, free)].clone();
                }
                v
            })
            .collect()
    }

    /// Solves the linear system Ax = b.
    ///
    /// Returns one solution (free variables set to zero), or `None` if the
    /// system is inconsistent.
    #[must_use]
    pub fn solve(&self, b: &[F]) -> Option<Vec<F>> {
        assert_eq!(b.len(), self.num_rows);

        let mut aug = Self::zeros(self.num_rows, self.num_cols + 1);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                aug[(i, j)] = self[(i, j)].clone();
            }
            aug[(i, self.num_cols)] = b[i].clone();
        }

        let (rref, pivots) = aug.rref();
        if pivots.last() == Some(&self.num_cols) {
            return None;
        }

        let mut x = vec![F::zero(); self.num_cols];
        for (row, &col) in pivots.iter().enumerate() {
            x[col] = rref[(row, self.num_cols)].clone();
        }
        Some(x)
    }

    /// Computes the determinant of a square matrix.
    #[must_use]
    pub fn det(&self) -> F {
        assert!(self.is_square());
        let n = self.num_rows;

        let mut m = self.clone();
        let mut det = F::one();

        for col in 0..n {
            let Some(pivot_row) = (col..n).find(|&row| !m[(row, col)].is_zero()) else {
                return F::zero();
            };

            if pivot_row != col {
                m.swap_rows(col, pivot_row);
                det = -det;
            }

            let pivot = m[(col, col)].clone();
            det = det * pivot.clone();

            if let Some(inv) = pivot.inv() {
                for row in col + 1..n {
                    if !m[(row, col)].is_zero() {
                        let factor = -(m[(row, col)].clone() * inv.clone());
                        m.add_scaled_row(row, col, &factor);
                    }
                }
            }
        }

        det
    }

    /// Computes the inverse of a square matrix, if it exists.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        assert!(self.is_square());
        let n = self.num_rows;

        // Augmented matrix [A | I]
        let mut aug = Self::zeros(n, 2 * n);
        for i in 0..n {
            for j in 0..n {
                aug[(i, j)] = self[(i, j)].clone();
            }
            aug[(i, n + i)] = F::one();
        }

        let (rref, pivots) = aug.rref();
        if pivots.len() < n || pivots[n - 1] >= n {
            return None;
        }

        let mut inv = Self::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                inv[(i, j)] = rref[(i, n + j)].clone();
            }
        }

        Some(inv)
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<R: Ring> Add for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn add(self, other: Self) -> DenseMatrix<R> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<R: Ring> Sub for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn sub(self, other: Self) -> DenseMatrix<R> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

/// Right-aligned columns, one bracketed row per line.
impl<R: fmt::Display> fmt::Display for DenseMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(ToString::to_string).collect();
        let widths: Vec<usize> = (0..self.num_cols)
            .map(|col| {
                (0..self.num_rows)
                    .map(|row| cells[row * self.num_cols + col].len())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for row in 0..self.num_rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (col, width) in widths.iter().enumerate() {
                if col > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", cells[row * self.num_cols + col])?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}
