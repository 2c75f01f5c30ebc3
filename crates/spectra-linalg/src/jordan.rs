//! Jordan structure and Jordan normal form over Q.
//!
//! For an eigenvalue λ with `N = A - λI` and `r_k = rank(N^k)`, the number
//! of Jordan blocks of size at least `k` is `r_{k-1} - r_k`. The transform
//! `P` is assembled from Jordan chains `N^{k-1}v, ..., Nv, v`, so the
//! columns of each chain start with an eigenvector.

use log::debug;
use spectra_factor::{factor_over_q, Factorization};
use spectra_rings::rationals::Q;
use spectra_rings::traits::Ring;

use crate::charpoly::characteristic_polynomial;
use crate::dense_matrix::DenseMatrix;
use crate::error::MatrixError;

/// A single Jordan block `J_size(eigenvalue)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JordanBlock {
    /// Diagonal entry.
    pub eigenvalue: Q,
    /// Block dimension.
    pub size: usize,
}

/// `P^-1 A P = J`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JordanDecomposition {
    /// Columns are Jordan chains.
    pub p: DenseMatrix<Q>,
    /// Block diagonal Jordan matrix.
    pub j: DenseMatrix<Q>,
    /// Blocks in the order they appear on the diagonal of `J`.
    pub blocks: Vec<JordanBlock>,
}

impl JordanDecomposition {
    /// Size of the largest block for `eigenvalue`, 0 if it is not one.
    #[must_use]
    pub fn index_of(&self, eigenvalue: &Q) -> usize {
        self.blocks
            .iter()
            .filter(|b| &b.eigenvalue == eigenvalue)
            .map(|b| b.size)
            .max()
            .unwrap_or(0)
    }
}

/// Block sizes per rational eigenvalue, ascending eigenvalue then
/// descending size.
///
/// Eigenvalues that are not rational are skipped; use [`jordan_form`] to
/// require a split characteristic polynomial.
pub fn jordan_structure(a: &DenseMatrix<Q>) -> Result<Vec<JordanBlock>, MatrixError> {
    let charpoly = characteristic_polynomial(a)?;
    let factorization = factor_over_q(&charpoly)?;
    Ok(jordan_structure_from(a, &factorization))
}

/// [`jordan_structure`] with an already factored characteristic polynomial.
pub fn jordan_structure_from(a: &DenseMatrix<Q>, charpoly: &Factorization) -> Vec<JordanBlock> {
    let mut eigenvalues: Vec<(Q, u32)> = charpoly.rational_roots().collect();
    eigenvalues.sort();

    eigenvalues
        .into_iter()
        .flat_map(|(eigenvalue, multiplicity)| {
            block_sizes(a, &eigenvalue, multiplicity as usize)
                .into_iter()
                .map(move |size| JordanBlock {
                    eigenvalue: eigenvalue.clone(),
                    size,
                })
        })
        .collect()
}

/// Computes `P` and `J` with `P^-1 A P = J`.
///
/// Fails with [`MatrixError::NonRationalSpectrum`] unless the
/// characteristic polynomial splits over Q.
pub fn jordan_form(a: &DenseMatrix<Q>) -> Result<JordanDecomposition, MatrixError> {
    let charpoly = characteristic_polynomial(a)?;
    let factorization = factor_over_q(&charpoly)?;
    jordan_form_from(a, &factorization)
}

/// [`jordan_form`] with an already factored characteristic polynomial.
pub fn jordan_form_from(
    a: &DenseMatrix<Q>,
    charpoly: &Factorization,
) -> Result<JordanDecomposition, MatrixError> {
    let n = a.ensure_square()?;
    if let Some((factor, _)) = charpoly.factors.iter().find(|(f, _)| f.degree() > 1) {
        return Err(MatrixError::NonRationalSpectrum {
            factor: factor.to_string(),
        });
    }

    let mut eigenvalues: Vec<(Q, u32)> = charpoly.rational_roots().collect();
    eigenvalues.sort();

    let mut columns: Vec<Vec<Q>> = Vec::with_capacity(n);
    let mut blocks = Vec::new();

    for (eigenvalue, multiplicity) in eigenvalues {
        let nilpotent = a.shift(&eigenvalue);
        let sizes = block_sizes(a, &eigenvalue, multiplicity as usize);

        for top in chain_tops(&nilpotent, &sizes) {
            let size = top.size;
            let mut chain = vec![top.vector];
            for _ in 1..size {
                let next = nilpotent.mv(&chain[chain.len() - 1]);
                chain.push(next);
            }
            chain.reverse();
            columns.extend(chain);
            blocks.push(JordanBlock {
                eigenvalue: eigenvalue.clone(),
                size,
            });
        }
    }

    let p = DenseMatrix::from_columns(&columns);
    let j = jordan_matrix(&blocks);
    debug!("jordan form with {} blocks", blocks.len());

    Ok(JordanDecomposition { p, j, blocks })
}

/// Assembles the block diagonal matrix for the given blocks.
#[must_use]
pub fn jordan_matrix(blocks: &[JordanBlock]) -> DenseMatrix<Q> {
    let n = blocks.iter().map(|b| b.size).sum();
    let mut j = DenseMatrix::zeros(n, n);
    let mut offset = 0;

    for block in blocks {
        for i in 0..block.size {
            j[(offset + i, offset + i)] = block.eigenvalue.clone();
            if i + 1 < block.size {
                j[(offset + i, offset + i + 1)] = Q::one();
            }
        }
        offset += block.size;
    }

    j
}

// Block sizes for one eigenvalue, descending.
fn block_sizes(a: &DenseMatrix<Q>, eigenvalue: &Q, multiplicity: usize) -> Vec<usize> {
    let n = a.num_rows();
    let nilpotent = a.shift(eigenvalue);

    // ranks[k] = rank(N^k)
    let mut ranks = vec![n];
    let mut power = DenseMatrix::identity(n);
    while ranks.last().is_some_and(|&r| r > n - multiplicity) {
        power = power.mm(&nilpotent);
        ranks.push(power.rank());
    }
    ranks.push(n - multiplicity);

    let at_least = |k: usize| ranks[k - 1] - ranks[k];
    let mut sizes = Vec::new();
    for k in (1..ranks.len() - 1).rev() {
        let exactly = at_least(k) - at_least(k + 1);
        sizes.extend(std::iter::repeat(k).take(exactly));
    }
    sizes
}

struct ChainTop {
    vector: Vec<Q>,
    size: usize,
}

// Picks chain generators level by level, largest blocks first. A generator
// of a size-k chain must lie in ker N^k and be independent of ker N^(k-1)
// together with everything already placed at level k.
fn chain_tops(nilpotent: &DenseMatrix<Q>, sizes: &[usize]) -> Vec<ChainTop> {
    let mut tops: Vec<ChainTop> = Vec::new();
    let Some(&largest) = sizes.first() else {
        return tops;
    };

    for level in (1..=largest).rev() {
        let wanted = sizes.iter().filter(|&&s| s == level).count();
        if wanted == 0 {
            continue;
        }

        let kernel = nilpotent.pow(level as u32).null_space();
        let mut span: Vec<Vec<Q>> = nilpotent.pow(level as u32 - 1).null_space();
        for top in &tops {
            span.push(nilpotent.pow((top.size - level) as u32).mv(&top.vector));
        }
        let mut span_rank = rank_of(&span);

        let mut found = 0;
        for candidate in kernel {
            if found == wanted {
                break;
            }
            span.push(candidate.clone());
            let extended = rank_of(&span);
            if extended > span_rank {
                span_rank = extended;
                tops.push(ChainTop {
                    vector: candidate,
                    size: level,
                });
                found += 1;
            } else {
                span.pop();
            }
        }
    }

    tops
}

fn rank_of(vectors: &[Vec<Q>]) -> usize {
    if vectors.is_empty() {
        return 0;
    }
    DenseMatrix::from_rows(vectors.to_vec()).rank()
}
