//! Search configuration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use spectra_factor::FactorConfig;

/// Order in which candidate exponent tuples are tried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EnumerationOrder {
    /// Every tuple in `[1, m₁] × ... × [1, m_k]` by ascending degree of the
    /// candidate polynomial, ties broken lexicographically. The first hit is
    /// the minimal polynomial.
    #[default]
    TotalDegree,
    /// Tuple `i` has components `(i mod m_j) + 1`, stably sorted by squared
    /// Euclidean norm. Duplicates are kept and some tuples are never
    /// produced, so the first hit annihilates but need not be minimal.
    RoundRobinByNorm,
}

/// Shared flag for cancelling a running search from another thread.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configuration for [`MinPolySearch`](crate::MinPolySearch).
///
/// The default tries every candidate in total-degree order with no limits.
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// Candidate order.
    pub order: EnumerationOrder,
    /// Wall-clock limit for one search.
    pub timeout: Option<Duration>,
    /// Maximum number of candidates to test.
    pub max_candidates: Option<usize>,
    /// External cancellation.
    pub cancel: Option<CancelToken>,
    /// Factorization settings for the characteristic polynomial.
    pub factor: FactorConfig,
}

impl SearchConfig {
    /// Sets the candidate order.
    #[must_use]
    pub fn with_order(mut self, order: EnumerationOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the wall-clock limit.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the candidate limit.
    #[must_use]
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = Some(max);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Sets the factorization settings.
    #[must_use]
    pub fn with_factor_config(mut self, factor: FactorConfig) -> Self {
        self.factor = factor;
        self
    }
}
