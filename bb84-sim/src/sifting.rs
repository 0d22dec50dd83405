//! Basis reconciliation: extracting the raw key from matched positions.
//!
//! Over the public channel Alice and Bob compare basis choices position by
//! position and keep the bits where they agree. The filter is stable: kept
//! positions preserve their original order, and the kept indices let the
//! rest of the pipeline refer back to the transmission.

use crate::basis::Basis;
use crate::measurement::Measurement;

/// The sifted raw key shared by Alice and Bob.
///
/// All three vectors have the same length; `kept_indices` is strictly
/// increasing and refers to positions in the original transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKey {
    pub alice: Vec<bool>,
    pub bob: Vec<bool>,
    pub kept_indices: Vec<usize>,
}

impl RawKey {
    /// Number of sifted positions.
    pub fn len(&self) -> usize {
        self.alice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alice.is_empty()
    }
}

/// Keep every position where the bases agree and the receiver recorded a
/// conclusive outcome.
///
/// An empty result is a valid terminal state, not an error. Panics if the
/// four sequences are not aligned.
pub fn sift(
    alice_bits: &[bool],
    outcomes: &[Measurement],
    alice_bases: &[Basis],
    receiver_bases: &[Basis],
) -> RawKey {
    let n = alice_bits.len();
    assert_eq!(n, outcomes.len(), "outcomes must cover every photon");
    assert_eq!(n, alice_bases.len(), "sender bases must cover every photon");
    assert_eq!(
        n,
        receiver_bases.len(),
        "receiver bases must cover every photon"
    );

    let mut alice = Vec::new();
    let mut bob = Vec::new();
    let mut kept_indices = Vec::new();
    for i in 0..n {
        if alice_bases[i] != receiver_bases[i] {
            continue;
        }
        if let Measurement::Bit(b) = outcomes[i] {
            alice.push(alice_bits[i]);
            bob.push(b);
            kept_indices.push(i);
        }
    }

    RawKey {
        alice,
        bob,
        kept_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::Basis::{Diagonal as D, Rectilinear as R};

    fn conclusive(bits: &[bool]) -> Vec<Measurement> {
        bits.iter().map(|&b| Measurement::Bit(b)).collect()
    }

    #[test]
    fn keeps_exactly_the_agreeing_positions() {
        // The ten-position textbook exchange: bases agree at 0,2,4,5,8,9.
        let alice_bits = [false, true, true, false, true, false, false, true, true, false];
        let alice_bases = [R, D, R, R, D, D, R, D, R, D];
        let bob_bases = [R, R, R, D, D, D, D, D, R, D];
        let outcomes = conclusive(&alice_bits);

        let key = sift(&alice_bits, &outcomes, &alice_bases, &bob_bases);

        assert_eq!(key.kept_indices, vec![0, 2, 4, 5, 8, 9]);
        assert_eq!(key.len(), 6);
        assert_eq!(key.alice, vec![false, true, true, false, true, false]);
        assert_eq!(key.alice, key.bob);
    }

    #[test]
    fn inconclusive_outcomes_are_dropped_even_on_agreement() {
        let alice_bits = [true, true];
        let bases = [R, R];
        let outcomes = [Measurement::Bit(true), Measurement::Inconclusive];

        let key = sift(&alice_bits, &outcomes, &bases, &bases);

        assert_eq!(key.kept_indices, vec![0]);
        assert_eq!(key.bob, vec![true]);
    }

    #[test]
    fn disjoint_bases_yield_an_empty_key() {
        let alice_bits = [true, false, true];
        let alice_bases = [R, R, R];
        let bob_bases = [D, D, D];
        let outcomes = conclusive(&[true, false, true]);

        let key = sift(&alice_bits, &outcomes, &alice_bases, &bob_bases);

        assert!(key.is_empty());
        assert_eq!(key.len(), 0);
    }

    #[test]
    fn kept_indices_are_strictly_increasing() {
        let n = 64;
        let alice_bits = vec![true; n];
        let alice_bases: Vec<Basis> = (0..n).map(|i| if i % 3 == 0 { R } else { D }).collect();
        let bob_bases: Vec<Basis> = (0..n).map(|i| if i % 2 == 0 { R } else { D }).collect();
        let outcomes = conclusive(&alice_bits);

        let key = sift(&alice_bits, &outcomes, &alice_bases, &bob_bases);

        assert!(key.kept_indices.windows(2).all(|w| w[0] < w[1]));
        for &i in &key.kept_indices {
            assert_eq!(alice_bases[i], bob_bases[i]);
        }
    }

    #[test]
    #[should_panic(expected = "receiver bases must cover every photon")]
    fn misaligned_sequences_fail_fast() {
        let outcomes = conclusive(&[true]);
        sift(&[true], &outcomes, &[R], &[]);
    }
}
