//! Candidate exponent tuples for the minimal polynomial search.

use smallvec::{smallvec, SmallVec};

use crate::config::EnumerationOrder;
use crate::error::Mismatch;

/// One exponent per irreducible factor.
pub type ExponentTuple = SmallVec<[u32; 4]>;

/// Iterator over candidate exponent tuples in a fixed order.
///
/// The total-degree order is generated lazily from a single odometer; the
/// round-robin order is materialised because it has to be sorted.
#[derive(Clone, Debug)]
pub struct Candidates {
    inner: Inner,
    total: usize,
    remaining: usize,
}

#[derive(Clone, Debug)]
enum Inner {
    TotalDegree(DegreeWalk),
    RoundRobin(std::vec::IntoIter<ExponentTuple>),
}

#[derive(Clone, Debug)]
struct DegreeWalk {
    bounds: ExponentTuple,
    weights: SmallVec<[usize; 4]>,
    level: usize,
    max_level: usize,
    // Next tuple to inspect at the current level.
    odometer: Option<ExponentTuple>,
}

impl DegreeWalk {
    fn new(bounds: &[u32], weights: &[usize]) -> Self {
        let min_level = weights.iter().sum();
        let max_level = bounds
            .iter()
            .zip(weights)
            .map(|(&m, &w)| m as usize * w)
            .sum();

        Self {
            bounds: bounds.iter().copied().collect(),
            weights: weights.iter().copied().collect(),
            level: min_level,
            max_level,
            odometer: Some(smallvec![1; bounds.len()]),
        }
    }

    fn weight(&self, tuple: &[u32]) -> usize {
        tuple
            .iter()
            .zip(&self.weights)
            .map(|(&e, &w)| e as usize * w)
            .sum()
    }

    // Rightmost position moves fastest; None once the first position wraps.
    fn advance(&self, tuple: &ExponentTuple) -> Option<ExponentTuple> {
        let mut next = tuple.clone();
        for i in (0..next.len()).rev() {
            if next[i] < self.bounds[i] {
                next[i] += 1;
                return Some(next);
            }
            next[i] = 1;
        }
        None
    }
}

impl Iterator for DegreeWalk {
    type Item = ExponentTuple;

    fn next(&mut self) -> Option<ExponentTuple> {
        while self.level <= self.max_level {
            match self.odometer.take() {
                Some(tuple) => {
                    self.odometer = self.advance(&tuple);
                    if self.weight(&tuple) == self.level {
                        return Some(tuple);
                    }
                }
                None => {
                    self.level += 1;
                    self.odometer = Some(smallvec![1; self.bounds.len()]);
                }
            }
        }
        None
    }
}

impl Candidates {
    /// Number of tuples this iterator yields in total.
    ///
    /// Saturates at `usize::MAX`.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }
}

impl Iterator for Candidates {
    type Item = ExponentTuple;

    fn next(&mut self) -> Option<ExponentTuple> {
        if self.remaining == 0 {
            return None;
        }
        let next = match &mut self.inner {
            Inner::TotalDegree(walk) => walk.next(),
            Inner::RoundRobin(iter) => iter.next(),
        };
        if next.is_some() {
            self.remaining -= 1;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Candidates {}

/// Enumerates tuples in `[1, m₁] × ... × [1, m_k]` with every factor of
/// degree one.
///
/// An empty multiplicity list yields the single empty tuple; a zero
/// multiplicity yields nothing.
#[must_use]
pub fn enumerate_candidates(multiplicities: &[u32], order: EnumerationOrder) -> Candidates {
    let weights: SmallVec<[usize; 4]> = smallvec![1; multiplicities.len()];
    build(multiplicities, &weights, order)
}

/// Enumerates tuples ordered by `Σ eᵢ·degrees[i]` under
/// [`EnumerationOrder::TotalDegree`].
///
/// The round-robin order ignores the degrees.
pub fn enumerate_candidates_weighted(
    multiplicities: &[u32],
    degrees: &[usize],
    order: EnumerationOrder,
) -> Result<Candidates, Mismatch> {
    if multiplicities.len() != degrees.len() {
        return Err(Mismatch::LengthMismatch {
            factors: degrees.len(),
            powers: multiplicities.len(),
        });
    }
    Ok(build(multiplicities, degrees, order))
}

fn build(multiplicities: &[u32], weights: &[usize], order: EnumerationOrder) -> Candidates {
    let total = multiplicities
        .iter()
        .try_fold(1usize, |acc, &m| acc.checked_mul(m as usize))
        .unwrap_or(usize::MAX);

    let inner = match order {
        EnumerationOrder::TotalDegree => Inner::TotalDegree(DegreeWalk::new(multiplicities, weights)),
        EnumerationOrder::RoundRobinByNorm => {
            Inner::RoundRobin(round_robin(multiplicities, total).into_iter())
        }
    };

    Candidates {
        inner,
        total,
        remaining: total,
    }
}

fn round_robin(multiplicities: &[u32], total: usize) -> Vec<ExponentTuple> {
    let mut tuples: Vec<ExponentTuple> = (0..total)
        .map(|i| {
            multiplicities
                .iter()
                .map(|&m| (i % m as usize) as u32 + 1)
                .collect()
        })
        .collect();

    tuples.sort_by_key(|t| t.iter().map(|&e| u64::from(e) * u64::from(e)).sum::<u64>());
    tuples
}
