//! Error types for rejected run configurations.
//!
//! The engine itself has almost no failure surface: sequences are generated
//! internally and misaligned lengths are programming errors that fail fast.
//! What can legitimately go wrong is a configuration outside the ranges the
//! measurement and sampling models assume.

/// A run configuration outside the supported parameter ranges.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The transmission must carry at least one photon.
    #[error("sequence length must be positive")]
    SequenceLength,

    /// The noise model is a per-photon flip probability.
    #[error("noise flip probability {0} is outside [0, 1]")]
    NoiseProbability(f64),

    /// A fractional sample must reveal a non-empty part of the key.
    #[error("sample fraction {0} is outside (0, 1]")]
    SampleFraction(f64),
}
