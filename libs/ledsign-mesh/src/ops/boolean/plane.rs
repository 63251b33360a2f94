//! # Splitting Planes
//!
//! Oriented planes and the side test every BSP decision rests on.

use config::constants::PLANE_EPSILON;
use glam::DVec3;

/// Where a point or polygon lies relative to a plane.
///
/// The discriminants are bit flags: combining the sides of all vertices of a
/// polygon with [`Side::union`] gives the side of the whole polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Side {
    /// Within `PLANE_EPSILON` of the plane.
    On = 0,
    /// Positive half-space.
    Front = 1,
    /// Negative half-space.
    Back = 2,
    /// Vertices on both sides.
    Spanning = 3,
}

impl Side {
    /// Side of a polygon holding vertices on `self` and on `other`.
    pub fn union(self, other: Side) -> Side {
        match (self as u8) | (other as u8) {
            0 => Side::On,
            1 => Side::Front,
            2 => Side::Back,
            _ => Side::Spanning,
        }
    }
}

/// Oriented plane `normal · p = offset` with a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    offset: f64,
}

impl Plane {
    pub fn new(normal: DVec3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Plane through three corners, facing the side from which they appear
    /// counter-clockwise. `None` when the corners are collinear.
    pub fn through(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self::new(normal, normal.dot(a)))
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Same plane facing the other way.
    pub fn flipped(&self) -> Plane {
        Plane::new(-self.normal, -self.offset)
    }

    /// Signed distance; positive in front.
    pub fn distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.offset
    }

    pub fn side_of(&self, point: DVec3) -> Side {
        let d = self.distance(point);
        if d > PLANE_EPSILON {
            Side::Front
        } else if d < -PLANE_EPSILON {
            Side::Back
        } else {
            Side::On
        }
    }
}
