use std::fmt::Display;
use crate::*;

/// Plane through `point`, with a unit `normal`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Plane {
    pub point  : Vec3,
    pub normal : Vec3,
}

/// Position of an object relative to a plane (or a 2D line)
///
/// The normal points from the `Left` side to the `Right` side.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlaneClassification {
    /// Fully on the side the normal points to
    Right,
    /// Fully on the side opposite of the normal
    Left,
    /// Crossing or touching the plane
    Intersects,
}

impl Plane {
    /// Create a new plane
    #[inline]
    #[must_use]
    pub const fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Create a plane from the equation `a*x + b*y + c*z + d = 0`
    ///
    /// The point is picked on the axis with the largest coefficient, so `(a, b, c)` may not be all 0.
    #[must_use]
    pub fn from_equation(a: f32, b: f32, c: f32, d: f32) -> Self {
        let point = match index_of_max3(a.abs(), b.abs(), c.abs()) {
            0 => Vec3::new(-d / a, 0.0, 0.0),
            1 => Vec3::new(0.0, -d / b, 0.0),
            _ => Vec3::new(0.0, 0.0, -d / c),
        };
        Self { point, normal: Vec3::new(a, b, c).normalize() }
    }

    /// Get the `(a, b, c, d)` coefficients of the plane equation `a*x + b*y + c*z + d = 0`
    #[must_use]
    pub fn equation(self) -> (f32, f32, f32, f32) {
        (self.normal.x, self.normal.y, self.normal.z, -self.normal.dot(self.point))
    }

    /// Calculate the signed distance from the plane to a point, positive on the side the normal points to
    #[inline]
    #[must_use]
    pub fn signed_distance(self, point: Vec3) -> f32 {
        (point - self.point).dot(self.normal)
    }

    /// Classify a point
    #[must_use]
    pub fn classify_point(self, point: Vec3) -> PlaneClassification {
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

impl ApproxEq for Plane {
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.point.is_close_to(rhs.point, epsilon) &&
        self.normal.is_close_to(rhs.normal, epsilon)
    }
}

impl Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ point: {}, normal: {} }}", self.point, self.normal))
    }
}
