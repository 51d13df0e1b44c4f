use std::fmt::Display;
use crate::*;

/// 2D circle
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Circle2D {
    pub center : Vec2,
    pub radius : f32,
}

impl Circle2D {
    /// Create a new circle
    #[inline]
    #[must_use]
    pub const fn new(center: Vec2, radius: f32) -> Self {
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

    /// Get the area
    #[inline]
    #[must_use]
    pub fn area(self) -> f32 {
        PI * self.radius_sq()
    }

    /// Check if the circle contains a point, points on the border are contained
    #[inline]
    #[must_use]
    pub fn contains(self, point: Vec2) -> bool {
        self.center.dist_sq(point) <= self.radius_sq()
    }
}

impl Display for Circle2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ center: {}, radius: {} }}", self.center, self.radius))
    }
}

/// Circle embedded in 3D space, lying in the plane through its center with the given normal
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Circle3D {
    pub center : Vec3,
    pub radius : f32,
    /// Unit normal of the plane the circle lies in
    pub normal : Vec3,
}

impl Circle3D {
    /// Create a new circle
    #[inline]
    #[must_use]
    pub const fn new(center: Vec3, radius: f32, normal: Vec3) -> Self {
        Self { center, radius, normal }
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

    /// Get the plane the circle lies in
    #[inline]
    #[must_use]
    pub fn plane(self) -> Plane {
        Plane::new(self.center, self.normal)
    }
}

impl ApproxEq for Circle3D {
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.radius.is_close_to(rhs.radius, epsilon) &&
        self.normal.is_close_to(rhs.normal, epsilon)
    }
}

impl Display for Circle3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ center: {}, radius: {}, normal: {} }}", self.center, self.radius, self.normal))
    }
}
