use std::fmt::Display;
use crate::*;

/// 2D line through `point`, along `direction`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Line2D {
    pub point     : Vec2,
    pub direction : Vec2,
}

impl Line2D {
    /// Create a line
    #[inline]
    #[must_use]
    pub const fn new(point: Vec2, direction: Vec2) -> Self {
        Self { point, direction }
    }

    /// Create a line going through 2 points
    #[inline]
    #[must_use]
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Self { point: a, direction: (b - a).normalize() }
    }

    /// Get the normal of the line, the direction rotated a quarter turn counter-clockwise
    #[inline]
    #[must_use]
    pub fn normal(self) -> Vec2 {
        self.direction.orthogonal()
    }

    /// Get the point at parameter `t`
    #[inline]
    #[must_use]
    pub fn point_at(self, t: f32) -> Vec2 {
        self.point + self.direction * t
    }

    /// Calculate the signed distance to a point, positive on the side the normal points to
    ///
    /// Only a true distance when the direction is unit length.
    #[inline]
    #[must_use]
    pub fn signed_distance(self, point: Vec2) -> f32 {
        (point - self.point).dot(self.normal())
    }

    /// Classify a point relative to the line
    #[must_use]
    pub fn classify_point(self, point: Vec2) -> PlaneClassification {
        let dist = self.signed_distance(point);
        if dist > 0.0 {
            PlaneClassification::Right
        } else if dist < 0.0 {
            PlaneClassification::Left
        } else {
            PlaneClassification::Intersects
        }
    }
}

impl Display for Line2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ point: {}, direction: {} }}", self.point, self.direction))
    }
}

/// 3D line through `point`, along `direction`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Line3D {
    pub point     : Vec3,
    pub direction : Vec3,
}

impl Line3D {
    /// Create a line
    #[inline]
    #[must_use]
    pub const fn new(point: Vec3, direction: Vec3) -> Self {
        Self { point, direction }
    }

    /// Create a line going through 2 points
    #[inline]
    #[must_use]
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self { point: a, direction: (b - a).normalize() }
    }

    /// Get the point at parameter `t`
    #[inline]
    #[must_use]
    pub fn point_at(self, t: f32) -> Vec3 {
        self.point + self.direction * t
    }

    /// Get the closest point on the line to the given point
    #[must_use]
    pub fn closest_point_to(self, point: Vec3) -> Vec3 {
        let t = (point - self.point).dot(self.direction) / self.direction.len_sq();
        self.point_at(t)
    }

    /// Calculate the squared distance to a point
    #[must_use]
    pub fn dist_sq(self, point: Vec3) -> f32 {
        self.closest_point_to(point).dist_sq(point)
    }
}

impl Display for Line3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ point: {}, direction: {} }}", self.point, self.direction))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// 2D line segment between 2 points
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment2D {
    pub first  : Vec2,
    pub second : Vec2,
}

impl Segment2D {
    /// Create a line segment
    #[inline]
    #[must_use]
    pub const fn new(first: Vec2, second: Vec2) -> Self {
        Self { first, second }
    }

    /// Get the vector from the first to the second point
    #[inline]
    #[must_use]
    pub fn direction(self) -> Vec2 {
        self.second - self.first
    }

    /// Get the length of the segment
    #[inline]
    #[must_use]
    pub fn len(self) -> f32 {
        self.direction().len()
    }

    /// Get the point at parameter `t`, `t` in `[0, 1]` lies on the segment
    #[inline]
    #[must_use]
    pub fn point_at(self, t: f32) -> Vec2 {
        self.first.lerp(self.second, t)
    }

    /// Get the line the segment lies on, with a unit direction
    #[inline]
    #[must_use]
    pub fn line(self) -> Line2D {
        Line2D::from_points(self.first, self.second)
    }
}

impl ApproxEq for Segment2D {
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.first.is_close_to(rhs.first, epsilon) && self.second.is_close_to(rhs.second, epsilon)
    }
}

impl Display for Segment2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{}, {}]", self.first, self.second))
    }
}

/// 3D line segment between 2 points
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment3D {
    pub first  : Vec3,
    pub second : Vec3,
}

impl Segment3D {
    /// Create a line segment
    #[inline]
    #[must_use]
    pub const fn new(first: Vec3, second: Vec3) -> Self {
        Self { first, second }
    }

    /// Get the vector from the first to the second point
    #[inline]
    #[must_use]
    pub fn direction(self) -> Vec3 {
        self.second - self.first
    }

    /// Get the length of the segment
    #[inline]
    #[must_use]
    pub fn len(self) -> f32 {
        self.direction().len()
    }

    /// Get the point at parameter `t`, `t` in `[0, 1]` lies on the segment
    #[inline]
    #[must_use]
    pub fn point_at(self, t: f32) -> Vec3 {
        self.first.lerp(self.second, t)
    }

    /// Get the line the segment lies on, with a unit direction
    #[inline]
    #[must_use]
    pub fn line(self) -> Line3D {
        Line3D::from_points(self.first, self.second)
    }
}

impl ApproxEq for Segment3D {
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.first.is_close_to(rhs.first, epsilon) && self.second.is_close_to(rhs.second, epsilon)
    }
}

impl Display for Segment3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{}, {}]", self.first, self.second))
    }
}
