use std::ops::{Add, Sub};

use super::vec2::*;

/// copy of egui's Pos2, but in double precision
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Pos2 {
    pub x: f64,
    pub y: f64,
}

#[inline(always)]
pub const fn pos2(x: f64, y: f64) -> Pos2 {
    Pos2 { x, y }
}

// ----------------------------------------------------------------------------

impl Pos2 {
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The vector from origin to this position
    #[inline(always)]
    pub fn to_vec2(self) -> Vec2 {
        vec2(self.x, self.y)
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// compares each coordinate separately, `eps` is the allowed deviation per coordinate
    #[inline]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl Sub for Pos2 {
    type Output = Vec2;

    #[inline(always)]
    fn sub(self, rhs: Pos2) -> Vec2 {
        vec2(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vec2> for Pos2 {
    type Output = Pos2;

    #[inline(always)]
    fn add(self, rhs: Vec2) -> Pos2 {
        pos2(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::fmt::Debug for Pos2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3} {:.3}]", self.x, self.y)
    }
}
