//! Deterministic environment helpers consumed by the round dealer.
//!
//! The core never reads clocks or system entropy; anything random is derived
//! from an explicit seed through [`RngOracle`].
pub mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};
