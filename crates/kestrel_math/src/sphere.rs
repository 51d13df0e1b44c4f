use std::fmt::Display;
use crate::*;

/// Sphere
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sphere {
    pub center : Vec3,
    pub radius : f32,
}

impl Sphere {
    /// Create a new sphere
    #[inline]
    #[must_use]
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Get the squared radius
    #[inline]
    #[must_use]
    pub fn radius_sq(self) -> f32 {
        self.radius * self.radius
    }

    /// Get the diameter
    #[inline]
    #[must_use]
    pub fn diameter(self) -> f32 {
        self.radius * 2.0
    }

    /// Get the volume of the sphere
    #[inline]
    #[must_use]
    pub fn volume(self) -> f32 {
        4.0 * self.radius * self.radius * self.radius * PI / 3.0
    }

    /// Check if the sphere contains a point, points on the surface are contained
    #[inline]
    #[must_use]
    pub fn contains(self, point: Vec3) -> bool {
        self.center.dist_sq(point) <= self.radius_sq()
    }
}

impl Display for Sphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ center: {}, radius: {} }}", self.center, self.radius))
    }
}
