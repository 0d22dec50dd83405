//! # bb84-sim
//!
//! Classical simulation of the BB84 quantum key distribution protocol,
//! covering an honest channel and a channel tapped by an intercept-resend
//! eavesdropper.
//!
//! No quantum state vectors are involved. The only quantum-mechanical rule
//! the model carries is that measuring a photon in the wrong basis yields a
//! uniformly random outcome. That single rule is enough to reproduce the
//! protocol's security signal: an eavesdropper who measures and re-sends
//! raises the error rate on the sifted key to ~25%, while an untapped
//! noiseless channel shows exactly 0%.
//!
//! ## Protocol flow
//!
//! 1. Alice prepares N random bits in N random bases
//! 2. (optional) Eve intercepts each photon, measures in a basis of her own
//!    and forwards a replacement prepared in that basis
//! 3. Bob measures each incoming photon in his own random basis
//! 4. Sifting keeps the positions where Alice's and Bob's bases agree
//! 5. A random sample of the raw key is revealed to estimate the QBER
//!
//! Runs are deterministic given a seed: every random draw comes from one
//! generator advanced in a fixed order.

pub mod basis;
pub mod eavesdropper;
pub mod error;
pub mod measurement;
pub mod participant;
pub mod qber;
pub mod sifting;
pub mod simulation;

pub mod prelude {
    pub use crate::basis::*;
    pub use crate::eavesdropper::*;
    pub use crate::error::*;
    pub use crate::measurement::*;
    pub use crate::participant::*;
    pub use crate::qber::*;
    pub use crate::sifting::*;
    pub use crate::simulation::*;
}
