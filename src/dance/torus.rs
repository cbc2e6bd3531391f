use itertools::Itertools;

use super::turn_fraction;
use crate::{
    error::{DanceResult, InvalidInput},
    geo::{Pos2, SAME_POINT_EPS, Segment, clip_to_unit_square, pos2, vec2},
};

/// the line `b * x = a * y` wound around the square torus [0, 1]^2, cut into the pieces
/// visible in the square ("linear loops on the torus").
///
/// the pieces are found by running a line of direction `(a, b)` through the anchors
/// `(k / |b|, 0)`, `(k / |b|, 1)` and `(0, k / |a|)`, `(1, k / |a|)` for every `k` keeping
/// the anchor inside the square. each line is clipped to the square, lines touching it
/// in a single corner are dropped, coinciding pieces are reported once.
pub fn torus_knot_strand_lines(a: i64, b: i64) -> DanceResult<Vec<Segment>> {
    if a == 0 && b == 0 {
        return Err(InvalidInput::ZeroRatio.into());
    }
    let abs_a = a.unsigned_abs();
    let abs_b = b.unsigned_abs();

    // k / |b| <= 1 only holds up to k = |b|, same for |a|
    let on_bottom_and_top = (abs_b != 0)
        .then(|| (0..=abs_b).map(move |k| k as f64 / abs_b as f64))
        .into_iter()
        .flatten()
        .flat_map(|x| [pos2(x, 0.0), pos2(x, 1.0)]);
    let on_left_and_right = (abs_a != 0)
        .then(|| (0..=abs_a).map(move |k| k as f64 / abs_a as f64))
        .into_iter()
        .flatten()
        .flat_map(|y| [pos2(0.0, y), pos2(1.0, y)]);

    let dir = vec2(a as f64, b as f64);
    let strands = on_bottom_and_top
        .chain(on_left_and_right)
        .filter_map(|anchor| clip_to_unit_square((anchor, dir)))
        .unique_by(quantized)
        .collect_vec();
    log::debug!("torus knot ({a}, {b}) has {} strands", strands.len());
    Ok(strands)
}

/// orientation independent key, equal for segments closer than [`SAME_POINT_EPS`] (up to rounding)
fn quantized(seg: &Segment) -> [i64; 4] {
    let q = |x: f64| (x / SAME_POINT_EPS).round() as i64;
    let (from, to) = if (seg.from.x, seg.from.y) <= (seg.to.x, seg.to.y) {
        (seg.from, seg.to)
    } else {
        (seg.to, seg.from)
    };
    [q(from.x), q(from.y), q(to.x), q(to.y)]
}

/// `count` evenly spaced points along the loop `b * x = a * y` on the square torus:
/// the k-th point is `((a * k / count) mod 1, (b * k / count) mod 1)`.
pub fn torus_knot_sample_points(a: i64, b: i64, count: usize) -> Vec<Pos2> {
    let m = count as i128;
    (0..m)
        .map(|k| pos2(turn_fraction(a as i128 * k, m), turn_fraction(b as i128 * k, m)))
        .collect_vec()
}

#[cfg(test)]
mod test {
    use super::*;

    fn contains(strands: &[Segment], from: Pos2, to: Pos2) -> bool {
        let wanted = Segment::new(from, to);
        strands.iter().any(|s| s.approx_eq(&wanted, 1e-9))
    }

    #[test]
    fn sample_points_of_one_three() {
        let points = torus_knot_sample_points(1, 3, 6);
        let expected = [
            (0.0, 0.0),
            (1.0 / 6.0, 0.5),
            (2.0 / 6.0, 0.0),
            (3.0 / 6.0, 0.5),
            (4.0 / 6.0, 0.0),
            (5.0 / 6.0, 0.5),
        ];
        assert_eq!(points.len(), expected.len());
        for (p, (x, y)) in points.iter().zip(expected) {
            assert!(p.approx_eq(pos2(x, y), 1e-12), "{p:?} != ({x}, {y})");
        }
    }

    #[test]
    fn sample_points_wrap_negative_windings() {
        for p in torus_knot_sample_points(-5, 7, 23) {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
        }
        let points = torus_knot_sample_points(-1, 1, 4);
        assert!(points[1].approx_eq(pos2(0.75, 0.25), 1e-12));
    }

    #[test]
    fn diagonal_knot_is_single_strand() {
        let strands = torus_knot_strand_lines(1, 1).unwrap();
        assert_eq!(strands.len(), 1);
        assert!(contains(&strands, pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }

    #[test]
    fn two_one_knot() {
        let strands = torus_knot_strand_lines(2, 1).unwrap();
        assert_eq!(strands.len(), 2);
        assert!(contains(&strands, pos2(0.0, 0.0), pos2(1.0, 0.5)));
        assert!(contains(&strands, pos2(0.0, 0.5), pos2(1.0, 1.0)));
    }

    #[test]
    fn three_two_knot() {
        // slope 2/3, strands start on the bottom at 0, 1/2 and on the left at 1/3, 2/3
        let strands = torus_knot_strand_lines(3, 2).unwrap();
        assert_eq!(strands.len(), 4);
        assert!(contains(&strands, pos2(0.0, 0.0), pos2(1.0, 2.0 / 3.0)));
        assert!(contains(&strands, pos2(0.5, 0.0), pos2(1.0, 1.0 / 3.0)));
        assert!(contains(&strands, pos2(0.0, 1.0 / 3.0), pos2(1.0, 1.0)));
        assert!(contains(&strands, pos2(0.0, 2.0 / 3.0), pos2(0.5, 1.0)));
    }

    #[test]
    fn opposite_windings_run_downwards() {
        let strands = torus_knot_strand_lines(1, -1).unwrap();
        assert_eq!(strands.len(), 1);
        assert!(contains(&strands, pos2(0.0, 1.0), pos2(1.0, 0.0)));
    }

    #[test]
    fn axis_parallel_knots() {
        let vertical = torus_knot_strand_lines(0, 1).unwrap();
        assert_eq!(vertical.len(), 2);
        assert!(contains(&vertical, pos2(0.0, 0.0), pos2(0.0, 1.0)));
        assert!(contains(&vertical, pos2(1.0, 0.0), pos2(1.0, 1.0)));

        let horizontal = torus_knot_strand_lines(-1, 0).unwrap();
        assert_eq!(horizontal.len(), 2);
        assert!(contains(&horizontal, pos2(0.0, 1.0), pos2(1.0, 1.0)));
    }

    #[test]
    fn strands_lie_in_square() {
        for seg in torus_knot_strand_lines(5, -3).unwrap() {
            for p in [seg.from, seg.to] {
                assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
            }
            assert!(seg.length() > 0.0);
        }
    }

    #[test]
    fn zero_knot_fails() {
        assert!(torus_knot_strand_lines(0, 0).is_err());
    }
}
