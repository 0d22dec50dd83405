//! Probabilistic measurement model for single photons.
//!
//! Matching bases recover the prepared bit, optionally flipped by classical
//! channel noise. Mismatched bases project onto an incompatible basis: the
//! outcome carries no information about the prepared bit. Two policies cover
//! the two roles that branch takes in the protocol — an honest receiver
//! records no conclusive value, while a party that must always hold *some*
//! bit (Eve, or Bob receiving Eve's re-prepared photon) records a fresh
//! random one.

use rand::Rng;

use crate::basis::Basis;

/// Outcome of measuring one photon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// A definite outcome.
    Bit(bool),
    /// No conclusive outcome recorded (bases disagreed).
    Inconclusive,
}

impl Measurement {
    /// The measured bit, if the outcome was conclusive.
    pub fn bit(self) -> Option<bool> {
        match self {
            Measurement::Bit(b) => Some(b),
            Measurement::Inconclusive => None,
        }
    }

    /// Whether a definite bit was recorded.
    pub fn is_conclusive(self) -> bool {
        matches!(self, Measurement::Bit(_))
    }
}

/// What to record when the receiver's basis disagrees with the sender's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Record no outcome.
    Inconclusive,
    /// Record a fresh uniformly random bit.
    RandomBit,
}

/// Measure one photon prepared as (`sender_bit`, `sender_basis`) in
/// `receiver_basis`.
///
/// `noise_flip_prob` is the probability that a matched-basis outcome is
/// flipped by channel noise, drawn independently per photon. The caller
/// keeps it inside [0, 1].
pub fn measure<R: Rng>(
    sender_bit: bool,
    sender_basis: Basis,
    receiver_basis: Basis,
    noise_flip_prob: f64,
    policy: MismatchPolicy,
    rng: &mut R,
) -> Measurement {
    if sender_basis == receiver_basis {
        let flipped = rng.gen::<f64>() < noise_flip_prob;
        Measurement::Bit(sender_bit ^ flipped)
    } else {
        match policy {
            MismatchPolicy::Inconclusive => Measurement::Inconclusive,
            MismatchPolicy::RandomBit => Measurement::Bit(rng.gen()),
        }
    }
}

/// Measure a whole transmission position by position.
///
/// Panics if the sequences are not aligned.
pub fn measure_sequence<R: Rng>(
    sender_bits: &[bool],
    sender_bases: &[Basis],
    receiver_bases: &[Basis],
    noise_flip_prob: f64,
    policy: MismatchPolicy,
    rng: &mut R,
) -> Vec<Measurement> {
    assert_eq!(
        sender_bits.len(),
        sender_bases.len(),
        "sender bits and bases must be aligned"
    );
    assert_eq!(
        sender_bits.len(),
        receiver_bases.len(),
        "receiver bases must cover every photon"
    );

    (0..sender_bits.len())
        .map(|i| {
            measure(
                sender_bits[i],
                sender_bases[i],
                receiver_bases[i],
                noise_flip_prob,
                policy,
                rng,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn matched_basis_recovers_the_bit() {
        let mut rng = StdRng::seed_from_u64(1);
        for &bit in &[false, true] {
            for &basis in &[Basis::Rectilinear, Basis::Diagonal] {
                for &policy in &[MismatchPolicy::Inconclusive, MismatchPolicy::RandomBit] {
                    let m = measure(bit, basis, basis, 0.0, policy, &mut rng);
                    assert_eq!(m, Measurement::Bit(bit));
                }
            }
        }
    }

    #[test]
    fn certain_noise_always_flips() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let m = measure(
                true,
                Basis::Diagonal,
                Basis::Diagonal,
                1.0,
                MismatchPolicy::Inconclusive,
                &mut rng,
            );
            assert_eq!(m, Measurement::Bit(false));
        }
    }

    #[test]
    fn mismatch_with_discard_policy_is_inconclusive() {
        let mut rng = StdRng::seed_from_u64(3);
        let m = measure(
            true,
            Basis::Rectilinear,
            Basis::Diagonal,
            0.0,
            MismatchPolicy::Inconclusive,
            &mut rng,
        );
        assert_eq!(m, Measurement::Inconclusive);
        assert!(!m.is_conclusive());
        assert_eq!(m.bit(), None);
    }

    #[test]
    fn mismatch_with_random_policy_is_decorrelated() {
        // The sender bit is fixed; over many draws the outcome must land on
        // both values roughly half the time.
        let mut rng = StdRng::seed_from_u64(4);
        let trials = 10_000;
        let ones = (0..trials)
            .filter(|_| {
                measure(
                    true,
                    Basis::Rectilinear,
                    Basis::Diagonal,
                    0.0,
                    MismatchPolicy::RandomBit,
                    &mut rng,
                ) == Measurement::Bit(true)
            })
            .count();
        assert!(
            (4_000..6_000).contains(&ones),
            "random outcome should be uniform, got {}/{} ones",
            ones,
            trials
        );
    }

    #[test]
    fn sequence_measurement_is_positionwise() {
        let mut rng = StdRng::seed_from_u64(5);
        let bits = vec![true, false, true];
        let bases = vec![Basis::Rectilinear, Basis::Diagonal, Basis::Rectilinear];
        // Receiver agrees at 0 and 2, disagrees at 1.
        let receiver = vec![Basis::Rectilinear, Basis::Rectilinear, Basis::Rectilinear];
        let outcomes = measure_sequence(
            &bits,
            &bases,
            &receiver,
            0.0,
            MismatchPolicy::Inconclusive,
            &mut rng,
        );
        assert_eq!(outcomes[0], Measurement::Bit(true));
        assert_eq!(outcomes[1], Measurement::Inconclusive);
        assert_eq!(outcomes[2], Measurement::Bit(true));
    }

    #[test]
    #[should_panic(expected = "receiver bases must cover every photon")]
    fn misaligned_sequences_fail_fast() {
        let mut rng = StdRng::seed_from_u64(6);
        measure_sequence(
            &[true, false],
            &[Basis::Rectilinear, Basis::Diagonal],
            &[Basis::Rectilinear],
            0.0,
            MismatchPolicy::Inconclusive,
            &mut rng,
        );
    }
}
