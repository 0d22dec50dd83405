//! Intercept-resend eavesdropping.
//!
//! Eve measures every photon in a basis of her own and immediately forwards
//! a replacement prepared in that same basis with the bit she measured. She
//! cannot recover Alice's basis, so wherever she guessed wrong both her
//! measured bit and the basis she forwards in are decorrelated from Alice's
//! state. That interference is what drives the error rate on the sifted key
//! up to ~25%: Eve guesses wrong half the time, and half of those wrong
//! guesses survive into the positions where Alice and Bob happen to agree.

use rand::Rng;

use crate::basis::Basis;
use crate::measurement::{measure_sequence, Measurement, MismatchPolicy};
use crate::participant::Preparation;

/// Intercept a transmission and re-prepare it in `eve_bases`.
///
/// The returned transmission carries Eve's measured bits encoded in her own
/// bases (its `bases` are exactly `eve_bases`); it is what reaches Bob
/// instead of Alice's photons.
pub fn intercept_resend<R: Rng>(
    transmission: &Preparation,
    eve_bases: Vec<Basis>,
    rng: &mut R,
) -> Preparation {
    // Projecting on the wrong basis still yields some definite outcome, so
    // Eve records a random bit rather than discarding the photon.
    let outcomes = measure_sequence(
        &transmission.bits,
        &transmission.bases,
        &eve_bases,
        0.0,
        MismatchPolicy::RandomBit,
        rng,
    );
    let bits = outcomes
        .into_iter()
        .map(|m| match m {
            Measurement::Bit(b) => b,
            Measurement::Inconclusive => unreachable!(),
        })
        .collect();
    Preparation {
        bits,
        bases: eve_bases,
    }
}
