//! Honest-channel BB84 run: no eavesdropper, no noise.
//!
//! With a clean channel the sifted keys agree exactly, so the revealed
//! sample shows a 0% error rate. Roughly half the positions survive sifting
//! (the probability both parties picked the same basis).

use bb84_sim::prelude::*;

fn main() {
    let config = SimConfig {
        n_bits: 32,
        seed: Some(42),
        ..SimConfig::default()
    };
    let outcome = run_simulation(&config).unwrap();

    println!("═══ BB84 honest channel (N = {}, seed = 42) ═══", config.n_bits);
    println!();
    println!("Alice bits:   {}", format_bits(&outcome.alice.bits));
    println!("Alice bases:  {}", format_bases(&outcome.alice.bases));
    println!("Bob bases:    {}", format_bases(&outcome.bob.bases));
    println!("Bob outcomes: {}", format_outcomes(&outcome.bob.outcomes));
    println!("              (· = basis mismatch, nothing conclusive recorded)");
    println!();
    println!("Kept positions: {:?}", outcome.raw_key.kept_indices);
    println!("Raw key (Alice): {}", format_bits(&outcome.raw_key.alice));
    println!("Raw key (Bob):   {}", format_bits(&outcome.raw_key.bob));
    println!();

    let s = &outcome.summary;
    println!("Sifted {} of {} positions, discarded {}", s.sifted_len, s.total_bits, s.discarded);
    println!(
        "Revealed {} position(s), {} mismatch(es): QBER = {:.2}%",
        s.sample_size,
        s.mismatches,
        s.qber * 100.0
    );
    println!(
        "Expected: {:.0}% honest, {:.0}% under intercept-resend",
        s.expected_qber_honest * 100.0,
        s.expected_qber_intercepted * 100.0
    );
}

fn format_bits(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

fn format_bases(bases: &[Basis]) -> String {
    bases.iter().map(|b| b.symbol()).collect()
}

fn format_outcomes(outcomes: &[Measurement]) -> String {
    outcomes
        .iter()
        .map(|m| match m.bit() {
            Some(true) => '1',
            Some(false) => '0',
            None => '·',
        })
        .collect()
}
