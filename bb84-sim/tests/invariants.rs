//! Structural invariants checked over arbitrary inputs.

use bb84_sim::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn sifted_key_vectors_always_agree_in_length(
        bits in prop::collection::vec(any::<bool>(), 0..256),
        seed in any::<u64>(),
    ) {
        let n = bits.len();
        let mut rng = StdRng::seed_from_u64(seed);
        let alice_bases = random_bases(n, &mut rng);
        let bob_bases = random_bases(n, &mut rng);
        let outcomes = measure_sequence(
            &bits,
            &alice_bases,
            &bob_bases,
            0.0,
            MismatchPolicy::Inconclusive,
            &mut rng,
        );
        let key = sift(&bits, &outcomes, &alice_bases, &bob_bases);

        prop_assert_eq!(key.alice.len(), key.bob.len());
        prop_assert_eq!(key.alice.len(), key.kept_indices.len());
        prop_assert!(key.len() <= n);
        prop_assert!(key.kept_indices.windows(2).all(|w| w[0] < w[1]));
        for &i in &key.kept_indices {
            prop_assert_eq!(alice_bases[i], bob_bases[i]);
        }
    }

    #[test]
    fn estimator_respects_the_sample_bounds(
        n in 0usize..256,
        fraction in 0.001f64..1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        // Keys built to disagree everywhere: each sampled position is a
        // mismatch, so a repeated index would break the equality below.
        let key = RawKey {
            alice: vec![false; n],
            bob: vec![true; n],
            kept_indices: (0..n).collect(),
        };
        let sample = estimate_qber(&key, SampleSpec::Fraction(fraction), &mut rng);

        prop_assert!(sample.sample_size <= n);
        prop_assert_eq!(sample.mismatches, sample.sample_size);
        if n > 0 {
            prop_assert!(sample.sample_size >= 1);
            prop_assert_eq!(sample.rate, 1.0);
        } else {
            prop_assert_eq!(sample.rate, 0.0);
        }
    }
}
