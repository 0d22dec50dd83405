//! Bit and basis generation for the quantum channel.
//!
//! BB84 encodes each bit in one of two conjugate bases. Measuring in the
//! preparation basis recovers the bit exactly; measuring in the other basis
//! projects onto an incompatible state pair and yields a uniformly random
//! outcome. Equality is the only operation the protocol needs on bases.

use rand::Rng;

/// Photon encoding/measurement basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// Rectilinear basis (|0>, |1>).
    Rectilinear,
    /// Diagonal basis (|+>, |->).
    Diagonal,
}

impl Basis {
    /// Draw a basis uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen() {
            Basis::Diagonal
        } else {
            Basis::Rectilinear
        }
    }

    /// Single-character label used in the text artifacts ('R' / 'D').
    pub fn symbol(self) -> char {
        match self {
            Basis::Rectilinear => 'R',
            Basis::Diagonal => 'D',
        }
    }
}

/// Generate `n` uniformly random bits.
pub fn random_bits<R: Rng>(n: usize, rng: &mut R) -> Vec<bool> {
    (0..n).map(|_| rng.gen()).collect()
}

/// Generate `n` uniformly random basis choices.
pub fn random_bases<R: Rng>(n: usize, rng: &mut R) -> Vec<Basis> {
    (0..n).map(|_| Basis::random(rng)).collect()
}
