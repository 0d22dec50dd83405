//! Error-rate estimation over a revealed sample of the raw key.
//!
//! Alice and Bob reveal a random subset of their sifted bits and count the
//! disagreements. The estimated rate is the eavesdropping detector: ~0% on a
//! clean channel, ~25% under full intercept-resend. Revealed positions are
//! not removed from the raw key here; a deployed protocol would discard
//! them after comparison.

use rand::seq::index;
use rand::Rng;
use serde::Serialize;

use crate::sifting::RawKey;

/// How much of the raw key to reveal for error estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleSpec {
    /// Reveal a fraction of the raw key, at least one position.
    Fraction(f64),
    /// Reveal a fixed number of positions.
    Count(usize),
}

impl SampleSpec {
    /// Resolve to a concrete sample size for a raw key of length `n`.
    ///
    /// Fractions round to the nearest count but reveal at least one
    /// position; either form is clamped to the key length. A zero-length
    /// key resolves to zero.
    pub fn resolve(self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let k = match self {
            SampleSpec::Fraction(f) => (n as f64 * f).round() as usize,
            SampleSpec::Count(c) => c,
        };
        k.clamp(1, n)
    }
}

/// One revealed-sample error estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QberSample {
    /// Number of revealed positions.
    pub sample_size: usize,
    /// Revealed positions where the two raw keys disagreed.
    pub mismatches: usize,
    /// Estimated error rate, `mismatches / sample_size` (0.0 for an empty key).
    pub rate: f64,
}

/// Reveal a random sample of the raw key and estimate the error rate.
///
/// Indices are drawn uniformly without replacement, so no position is
/// compared twice. An empty raw key yields the defined zero estimate.
pub fn estimate_qber<R: Rng>(key: &RawKey, spec: SampleSpec, rng: &mut R) -> QberSample {
    let n = key.len();
    let k = spec.resolve(n);
    if k == 0 {
        return QberSample {
            sample_size: 0,
            mismatches: 0,
            rate: 0.0,
        };
    }

    let mismatches = index::sample(rng, n, k)
        .into_iter()
        .filter(|&i| key.alice[i] != key.bob[i])
        .count();

    QberSample {
        sample_size: k,
        mismatches,
        rate: mismatches as f64 / k as f64,
    }
}
