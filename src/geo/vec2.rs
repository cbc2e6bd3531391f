use std::ops::Mul;

use super::pos2::*;

/// copy of egui's Vec2, but in double precision.
/// chord endpoints are compared at 1e-8, which f32 can not resolve.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

#[inline(always)]
pub const fn vec2(x: f64, y: f64) -> Vec2 {
    Vec2 { x, y }
}

// ----------------------------------------------------------------------------

impl Vec2 {
    /// unit vector at `angle` radians counterclockwise from the positive x-axis
    #[inline(always)]
    pub fn angled(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        vec2(cos, sin)
    }

    /// Treat this vector as a position.
    #[inline(always)]
    pub fn to_pos2(self) -> Pos2 {
        pos2(self.x, self.y)
    }

    #[inline(always)]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline(always)]
    fn mul(self, vec: Vec2) -> Vec2 {
        vec2(self * vec.x, self * vec.y)
    }
}

impl std::fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3} {:.3}]", self.x, self.y)
    }
}
