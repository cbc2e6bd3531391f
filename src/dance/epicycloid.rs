use itertools::Itertools;

use super::MAX_SAMPLES;
use crate::{
    error::{DanceResult, InvalidInput},
    geo::{Pos2, pos2},
};

/// base step in `t` for a winding ratio of one, shrunk for unequal windings
pub const DEFAULT_STEP_HINT: f64 = 0.1;

/// point at time `t` of the epicycloid belonging to the torus knot `(a, b)`.
/// both circles are scaled by `1 / (a + b)`, so for windings of equal sign the curve stays in the unit disk.
#[inline]
pub fn epicycloid_point(a: f64, b: f64, t: f64) -> Pos2 {
    let (sin_bt, cos_bt) = (b * t).sin_cos();
    let (sin_at, cos_at) = (a * t).sin_cos();
    let scale = 1.0 / (a + b);
    pos2(
        scale * (a * cos_bt + b * cos_at),
        scale * (a * sin_bt + b * sin_at),
    )
}

/// samples `x(t) = (a cos(bt) + b cos(at)) / (a + b)`, `y(t) = (a sin(bt) + b sin(at)) / (a + b)`
/// for `t` in `[0, parameter_range]`.
///
/// the step width is `step_hint * min(|a / b|, |b / a|)`, which keeps the point density
/// comparable across winding ratios. the range is divided into the smallest number of equal
/// steps not wider than that, so the first sample is at `t = 0` and the last exactly at
/// `t = parameter_range`.
pub fn epicycloid_curve(
    a: i64,
    b: i64,
    parameter_range: f64,
    step_hint: f64,
) -> DanceResult<Vec<Pos2>> {
    if a == 0 && b == 0 {
        return Err(InvalidInput::ZeroRatio.into());
    }
    if a as i128 + b as i128 == 0 {
        return Err(InvalidInput::OppositeWindings { a, b }.into());
    }
    if a == 0 || b == 0 {
        return Err(InvalidInput::ZeroWinding.into());
    }
    if !parameter_range.is_finite() || parameter_range < 0.0 {
        return Err(InvalidInput::BadRange.into());
    }
    if !step_hint.is_finite() || step_hint <= 0.0 {
        return Err(InvalidInput::BadStep.into());
    }

    let (a, b) = (a as f64, b as f64);
    let step = step_hint * (a / b).abs().min((b / a).abs());
    let nr_steps = (parameter_range / step).ceil();
    if nr_steps > MAX_SAMPLES as f64 {
        return Err(InvalidInput::TooManySamples {
            requested: nr_steps as u64,
            limit: MAX_SAMPLES,
        }
        .into());
    }
    let nr_steps = nr_steps as u64;
    if nr_steps == 0 {
        return Ok(vec![epicycloid_point(a, b, 0.0)]);
    }
    let curve = (0..=nr_steps)
        .map(|k| epicycloid_point(a, b, parameter_range * k as f64 / nr_steps as f64))
        .collect_vec();
    log::debug!("epicycloid ({a}, {b}) sampled at {} points", curve.len());
    Ok(curve)
}
