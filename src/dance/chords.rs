use std::f64::consts::TAU;

use itertools::Itertools;

use super::turn_fraction;
use crate::geo::{Line2, Pos2, Vec2, line_from_to};

/// sample count of the "continuous" planet dance
pub const DEFAULT_SAMPLE_COUNT: usize = 3000;

/// chords whose endpoints are closer than this (measured in full turns) are degenerate
pub const DEGENERATE_EPS: f64 = 1e-8;

/// a line across the unit circle, given by the angles of both endpoints.
/// both angles are in [0, 2pi). chords whose endpoints coincide are flagged as degenerate,
/// the renderer has to skip them.
#[derive(Clone, Copy, PartialEq, Debug, serde::Serialize)]
pub struct Chord {
    start: f64,
    end: f64,
    degenerate: bool,
}

impl Chord {
    /// both angles have to be in [0, 2pi) already
    pub(crate) fn new(start: f64, end: f64) -> Self {
        let diff = (start - end) / TAU;
        let degenerate = (diff - diff.round()).abs() <= DEGENERATE_EPS;
        Self { start, end, degenerate }
    }

    #[inline(always)]
    pub const fn start(&self) -> f64 {
        self.start
    }

    #[inline(always)]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// both endpoints coincide (mod 2pi)
    #[inline(always)]
    pub const fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn endpoints(&self) -> (Pos2, Pos2) {
        (
            Vec2::angled(self.start).to_pos2(),
            Vec2::angled(self.end).to_pos2(),
        )
    }

    /// the chord extended to a full line, as drawn for knots winding in opposite directions
    pub fn as_line(&self) -> Line2 {
        let (from, to) = self.endpoints();
        line_from_to(from, to)
    }
}

/// angle of the point `numerator / denominator` turns around the circle
fn angle_of(numerator: i128, denominator: i128) -> f64 {
    TAU * turn_fraction(numerator, denominator)
}

/// chords of the sampled planet dance `S(a, b, sample_count)`:
/// the i-th chord connects the angles `2pi * a * i / sample_count` and `2pi * b * i / sample_count`.
/// degenerate chords are kept, see [`Chord::is_degenerate`].
pub fn planet_dance_chords(a: i64, b: i64, sample_count: usize) -> Vec<Chord> {
    let m = sample_count as i128;
    let chords = (0..m)
        .map(|i| Chord::new(angle_of(a as i128 * i, m), angle_of(b as i128 * i, m)))
        .collect_vec();
    log::debug!(
        "planet dance ({a}, {b}) with {sample_count} samples: {} degenerate chords",
        chords.iter().filter(|c| c.is_degenerate()).count()
    );
    chords
}

/// chords of the modular multiplication table `MMT(modulus, multiplier)`,
/// connecting `i` to `multiplier * i mod modulus` on a circle with `modulus` points.
pub fn mod_multiplication_chords(modulus: usize, multiplier: i64) -> Vec<Chord> {
    planet_dance_chords(1, multiplier, modulus)
}

#[cfg(test)]
mod test {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn mod_table_is_planet_dance_with_a_one() {
        for (m, k) in [(5, 5), (10, 3), (194, 50), (512, 43), (37, -2), (1, 0)] {
            assert_eq!(
                mod_multiplication_chords(m, k),
                planet_dance_chords(1, k, m)
            );
        }
    }

    #[test]
    fn mod_table_of_multiplier_equal_modulus_ends_at_zero() {
        // every point is sent to 0, only the chord starting at 0 collapses
        let chords = mod_multiplication_chords(5, 5);
        assert_eq!(chords.len(), 5);
        for (i, chord) in chords.iter().enumerate() {
            assert!((chord.start() - 2.0 * PI * i as f64 / 5.0).abs() < 1e-12);
            assert_eq!(chord.end(), 0.0);
            assert_eq!(chord.is_degenerate(), i == 0, "chord {i}");
        }
    }

    #[test]
    fn chord_angles_follow_both_windings() {
        let (a, b, m) = (3i64, -2i64, 7i64);
        let chords = planet_dance_chords(a, b, m as usize);
        assert_eq!(chords.len(), 7);
        for (i, chord) in (0i64..).zip(&chords) {
            let start = TAU * (a * i).rem_euclid(m) as f64 / m as f64;
            let end = TAU * (b * i).rem_euclid(m) as f64 / m as f64;
            assert!((chord.start() - start).abs() < 1e-12, "start of chord {i}");
            assert!((chord.end() - end).abs() < 1e-12, "end of chord {i}");
        }
        // -2 * 1 = 5 mod 7
        assert!((chords[1].end() - TAU * 5.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn angles_stay_in_one_turn() {
        for chord in planet_dance_chords(-7, 13, 101) {
            assert!((0.0..TAU).contains(&chord.start()));
            assert!((0.0..TAU).contains(&chord.end()));
        }
    }

    #[test]
    fn mod_table_entries() {
        // MMT(10, 3): i -> 3i mod 10
        let chords = mod_multiplication_chords(10, 3);
        let ends = chords
            .iter()
            .map(|c| (c.end() / TAU * 10.0).round() as i64)
            .collect_vec();
        assert_eq!(ends, vec![0, 3, 6, 9, 2, 5, 8, 1, 4, 7]);
    }

    #[test]
    fn degenerate_only_where_endpoints_meet() {
        // a = b - 3: chord i is degenerate iff 3i = 0 mod 9
        let chords = planet_dance_chords(2, 5, 9);
        let degenerate = chords.iter().positions(Chord::is_degenerate).collect_vec();
        assert_eq!(degenerate, vec![0, 3, 6]);
    }

    #[test]
    fn degenerate_across_zero() {
        assert!(Chord::new(TAU - 1e-12, 0.0).is_degenerate());
        assert!(!Chord::new(TAU - 1e-3, 0.0).is_degenerate());
    }

    #[test]
    fn empty_sample() {
        assert!(planet_dance_chords(3, 2, 0).is_empty());
    }

    #[test]
    fn endpoints_on_unit_circle() {
        let chord = Chord::new(0.0, PI / 2.0);
        let (from, to) = chord.endpoints();
        assert!(from.approx_eq(Pos2::new(1.0, 0.0), 1e-12));
        assert!(to.approx_eq(Pos2::new(0.0, 1.0), 1e-12));
        let (start, dir) = chord.as_line();
        assert!(start.approx_eq(from, 1e-12));
        assert!((dir.length() - 2f64.sqrt()).abs() < 1e-12);
    }
}
