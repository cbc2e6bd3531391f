//! the geometry engine: everything here maps a few integers to plain numeric sequences.
//! coordinates are either angles in radians, or unit-square / unit-circle positions.
//! mapping to screen space is left to whoever draws the result.

pub mod ratio;
pub use ratio::*;

pub mod chords;
pub use chords::*;

pub mod torus;
pub use torus::*;

pub mod epicycloid;
pub use epicycloid::*;

/// upper bound for every sample count derived from user input (not for counts the caller passes explicitly)
pub const MAX_SAMPLES: u64 = 1_000_000;

/// `numerator / denominator` modulo 1, always in [0, 1).
/// the remainder is taken in integer arithmetic, so equal residues give bit-identical results.
#[inline]
pub(crate) fn turn_fraction(numerator: i128, denominator: i128) -> f64 {
    debug_assert!(denominator > 0);
    numerator.rem_euclid(denominator) as f64 / denominator as f64
}
