use arrayvec::ArrayVec;

pub mod vec2;
pub use vec2::*;

pub mod pos2;
pub use pos2::*;

/// points closer than this are considered the same point of the unit square
pub const SAME_POINT_EPS: f64 = 1e-10;

pub type Line2 = (Pos2, Vec2);

pub fn line_from_to(from: Pos2, to: Pos2) -> Line2 {
    (from, to - from)
}

/// straight piece between two points, both in the same coordinate system as the caller's input
#[derive(Clone, Copy, PartialEq, Debug, serde::Deserialize, serde::Serialize)]
pub struct Segment {
    pub from: Pos2,
    pub to: Pos2,
}

impl Segment {
    pub const fn new(from: Pos2, to: Pos2) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// same segment, regardless of orientation
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        (self.from.approx_eq(other.from, eps) && self.to.approx_eq(other.to, eps))
            || (self.from.approx_eq(other.to, eps) && self.to.approx_eq(other.from, eps))
    }
}

fn in_unit_interval(x: f64) -> bool {
    (-SAME_POINT_EPS..=1.0 + SAME_POINT_EPS).contains(&x)
}

/// intersects the (infinite) line with the boundary of [0, 1]^2.
/// returns [`None`] if the line misses the square or only touches it in a single point.
pub fn clip_to_unit_square((a, dir): Line2) -> Option<Segment> {
    // every crossing with one of the four edge lines, stored as (step along dir, point)
    let mut hits = ArrayVec::<(f64, Pos2), 4>::new();
    let mut try_hit = |t: f64| {
        let p = a + t * dir;
        if in_unit_interval(p.x) && in_unit_interval(p.y) {
            let p = pos2(p.x.clamp(0.0, 1.0), p.y.clamp(0.0, 1.0));
            hits.push((t, p));
        }
    };
    if dir.x != 0.0 {
        try_hit((0.0 - a.x) / dir.x);
        try_hit((1.0 - a.x) / dir.x);
    }
    if dir.y != 0.0 {
        try_hit((0.0 - a.y) / dir.y);
        try_hit((1.0 - a.y) / dir.y);
    }
    let (_, from) = hits.iter().min_by(|l, r| l.0.total_cmp(&r.0))?;
    let (_, to) = hits.iter().max_by(|l, r| l.0.total_cmp(&r.0))?;
    if from.approx_eq(*to, SAME_POINT_EPS) {
        return None;
    }
    Some(Segment::new(*from, *to))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn diagonal_spans_whole_square() {
        let seg = clip_to_unit_square((pos2(0.0, 0.0), vec2(1.0, 1.0))).unwrap();
        assert!(seg.approx_eq(&Segment::new(pos2(0.0, 0.0), pos2(1.0, 1.0)), 1e-12));
    }

    #[test]
    fn steep_line_exits_through_top() {
        // slope 2 through (0.25, 0): leaves the square at (0.75, 1)
        let seg = clip_to_unit_square((pos2(0.25, 0.0), vec2(1.0, 2.0))).unwrap();
        assert!(seg.from.approx_eq(pos2(0.25, 0.0), 1e-12));
        assert!(seg.to.approx_eq(pos2(0.75, 1.0), 1e-12));
    }

    #[test]
    fn anchor_outside_still_clips() {
        // anchored on the top edge line right of the square, the visible part lies below
        let seg = clip_to_unit_square((pos2(1.25, 1.0), vec2(1.0, 2.0))).unwrap();
        assert!(seg.approx_eq(&Segment::new(pos2(0.75, 0.0), pos2(1.0, 0.5)), 1e-12));
    }

    #[test]
    fn corner_touch_is_dropped() {
        // x + y = 2 only touches (1, 1)
        assert!(clip_to_unit_square((pos2(1.0, 1.0), vec2(1.0, -1.0))).is_none());
        assert!(clip_to_unit_square((pos2(3.0, 0.0), vec2(0.0, 1.0))).is_none());
    }

    #[test]
    fn axis_parallel_lines() {
        let vertical = clip_to_unit_square((pos2(0.5, 0.3), vec2(0.0, -1.0))).unwrap();
        assert!(vertical.approx_eq(&Segment::new(pos2(0.5, 0.0), pos2(0.5, 1.0)), 1e-12));
        let edge = clip_to_unit_square((pos2(0.0, 0.0), vec2(1.0, 0.0))).unwrap();
        assert!(edge.approx_eq(&Segment::new(pos2(0.0, 0.0), pos2(1.0, 0.0)), 1e-12));
    }

    #[test]
    fn line_from_to_keeps_length() {
        let (start, dir) = line_from_to(pos2(0.2, 0.2), pos2(0.8, 1.0));
        assert!(start.approx_eq(pos2(0.2, 0.2), 1e-12));
        assert!((dir.length() - 1.0).abs() < 1e-12);
    }
}
