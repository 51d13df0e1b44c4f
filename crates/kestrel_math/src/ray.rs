use std::fmt::Display;
use crate::*;

/// 2D ray, starting at `vertex` and going along `direction`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray2D {
    pub vertex    : Vec2,
    pub direction : Vec2,
}

impl Ray2D {
    /// Create a ray
    #[inline]
    #[must_use]
    pub const fn new(vertex: Vec2, direction: Vec2) -> Self {
        Self { vertex, direction }
    }

    /// Get the point at parameter `t`, only `t >= 0` lies on the ray
    #[inline]
    #[must_use]
    pub fn point_at(self, t: f32) -> Vec2 {
        self.vertex + self.direction * t
    }

    /// Get the line the ray lies on
    #[inline]
    #[must_use]
    pub fn line(self) -> Line2D {
        Line2D::new(self.vertex, self.direction)
    }
}

impl Display for Ray2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ vertex: {}, direction: {} }}", self.vertex, self.direction))
    }
}

/// 3D ray, starting at `vertex` and going along `direction`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray3D {
    pub vertex    : Vec3,
    pub direction : Vec3,
}

impl Ray3D {
    /// Create a ray
    #[inline]
    #[must_use]
    pub const fn new(vertex: Vec3, direction: Vec3) -> Self {
        Self { vertex, direction }
    }

    /// Get the point at parameter `t`, only `t >= 0` lies on the ray
    #[inline]
    #[must_use]
    pub fn point_at(self, t: f32) -> Vec3 {
        self.vertex + self.direction * t
    }

    /// Get the line the ray lies on
    #[inline]
    #[must_use]
    pub fn line(self) -> Line3D {
        Line3D::new(self.vertex, self.direction)
    }
}

impl Display for Ray3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ vertex: {}, direction: {} }}", self.vertex, self.direction))
    }
}
