//! Convergence of the estimated QBER toward the intercept-resend theory line.
//!
//! The revealed-sample estimate is a random variable; its spread shrinks
//! with the sample size. Sweeping channel sizes and seeds shows the
//! estimate tightening around 25% under eavesdropping and staying pinned at
//! 0% on the honest channel.

use bb84_sim::prelude::*;

fn main() {
    let sizes = [100usize, 1_000, 10_000, 100_000];
    let seeds: Vec<u64> = (0..10).collect();

    println!("═══ QBER convergence under intercept-resend ═══");
    println!();
    println!("Full raw key revealed, {} seeds per size.", seeds.len());
    println!();
    println!("  N        mean QBER   min     max     |mean - 0.25|");
    println!("  ───────  ─────────  ──────  ──────  ─────────────");

    for &n in &sizes {
        let rates: Vec<f64> = seeds
            .iter()
            .map(|&seed| {
                let config = SimConfig {
                    n_bits: n,
                    seed: Some(seed),
                    sample: SampleSpec::Fraction(1.0),
                    eavesdropper: true,
                    ..SimConfig::default()
                };
                run_simulation(&config).unwrap().summary.qber
            })
            .collect();

        let mean = rates.iter().sum::<f64>() / rates.len() as f64;
        let min = rates.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = rates.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        println!(
            "  {:<7}  {:.4}     {:.4}  {:.4}  {:.4}",
            n,
            mean,
            min,
            max,
            (mean - EXPECTED_QBER_INTERCEPTED).abs()
        );
    }

    println!();
    println!("Honest control at N = 100000:");
    for &seed in &seeds[..3] {
        let config = SimConfig {
            n_bits: 100_000,
            seed: Some(seed),
            sample: SampleSpec::Fraction(1.0),
            ..SimConfig::default()
        };
        let summary = run_simulation(&config).unwrap().summary;
        println!(
            "  seed {:>2}: sifted {:>6}, QBER {:.4}",
            seed, summary.sifted_len, summary.qber
        );
    }
    println!();
    println!("Estimates concentrate around 25% as N grows; the honest channel stays at 0.");
}
