use crate::error::{DanceResult, InvalidInput};

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// the two winding speeds of a torus knot, divided by their greatest common divisor.
/// signs are kept, `(0, 0)` can not be constructed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize)]
pub struct Ratio {
    a: i64,
    b: i64,
}

impl Ratio {
    pub fn reduce(alpha: i64, beta: i64) -> DanceResult<Self> {
        let d = gcd(alpha.unsigned_abs(), beta.unsigned_abs());
        if d == 0 {
            return Err(InvalidInput::ZeroRatio.into());
        }
        // i128, because d may be 2^63 if both inputs are i64::MIN or zero
        let divide = |x: i64| (x as i128 / d as i128) as i64;
        Ok(Self {
            a: divide(alpha),
            b: divide(beta),
        })
    }

    #[inline(always)]
    pub const fn a(self) -> i64 {
        self.a
    }

    #[inline(always)]
    pub const fn b(self) -> i64 {
        self.b
    }

    #[inline(always)]
    pub const fn as_tuple(self) -> (i64, i64) {
        (self.a, self.b)
    }

    /// true if the windings run in opposite directions, i.e. `a * b < 0`.
    /// chords of such a knot are drawn as full lines, not only inside the circle.
    #[inline]
    pub const fn opposite_signs(self) -> bool {
        self.a.signum() * self.b.signum() < 0
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

pub fn reduce_ratio(alpha: i64, beta: i64) -> DanceResult<(i64, i64)> {
    Ratio::reduce(alpha, beta).map(Ratio::as_tuple)
}

/// `|alpha * multiplier - beta|`, the sampling rate linking the knot `(alpha, beta)`
/// to the modular multiplication table with factor `multiplier`.
/// exact for all inputs, as the product of two i32 always fits an i64.
pub fn sam(alpha: i32, beta: i32, multiplier: i32) -> u64 {
    (alpha as i64 * multiplier as i64 - beta as i64).unsigned_abs()
}
