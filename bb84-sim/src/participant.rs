//! Per-party sequence state.
//!
//! Every sequence produced in one run has the same length N, and position
//! `i` refers to the same photon across all parties. Each party exclusively
//! owns what it generated or measured; sifting and estimation borrow these
//! sequences and build independent outputs.

use rand::Rng;

use crate::basis::{random_bases, random_bits, Basis};
use crate::measurement::{measure_sequence, Measurement, MismatchPolicy};

/// A prepared transmission: the sender's bits and encoding bases.
///
/// Alice's state, and also the replacement transmission Eve re-prepares
/// after intercepting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preparation {
    pub bits: Vec<bool>,
    pub bases: Vec<Basis>,
}

impl Preparation {
    /// Generate a fresh transmission of `n` random bits in random bases.
    ///
    /// Bits are drawn before bases; seeded runs rely on this order.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let bits = random_bits(n, rng);
        let bases = random_bases(n, rng);
        Self { bits, bases }
    }

    /// Number of photons in the transmission.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

/// A receiver's basis choices and the outcomes they produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reception {
    pub bases: Vec<Basis>,
    pub outcomes: Vec<Measurement>,
}

impl Reception {
    /// Measure an incoming transmission in the given bases.
    pub fn measure<R: Rng>(
        transmission: &Preparation,
        bases: Vec<Basis>,
        noise_flip_prob: f64,
        policy: MismatchPolicy,
        rng: &mut R,
    ) -> Self {
        let outcomes = measure_sequence(
            &transmission.bits,
            &transmission.bases,
            &bases,
            noise_flip_prob,
            policy,
            rng,
        );
        Self { bases, outcomes }
    }
}
