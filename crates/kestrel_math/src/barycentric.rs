use crate::*;

/// Barycentric coordinates relative to a triangle `(p0, p1, p2)`, the components sum to 1
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Barycentric {
    pub x : f32,
    pub y : f32,
    pub z : f32,
}

impl Barycentric {
    /// Create barycentric coordinates
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Calculate the barycentric coordinates of a 2D point relative to a triangle
    #[must_use]
    pub fn from_point_2d(point: Vec2, p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        let v = point - p0;
        let e1 = p1 - p0;
        let e2 = p2 - p0;
        let d1 = e1.orthogonal();
        let d2 = e2.orthogonal();
        let y = v.dot(d2) / e1.dot(d2);
        let z = v.dot(d1) / e2.dot(d1);
        Self { x: 1.0 - y - z, y, z }
    }

    /// Calculate the barycentric coordinates of a 3D point relative to a triangle with the unit `normal`
    ///
    /// The point is expected to lie in the plane of the triangle.
    #[must_use]
    pub fn from_point_3d(point: Vec3, normal: Vec3, p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        let v = point - p0;
        let e1 = p1 - p0;
        let e2 = p2 - p0;
        let d1 = normal.cross(e1);
        let d2 = normal.cross(e2);
        let y = v.dot(d2) / e1.dot(d2);
        let z = v.dot(d1) / e2.dot(d1);
        Self { x: 1.0 - y - z, y, z }
    }

    /// Check if the coordinates describe a point inside the triangle or on its border
    #[inline]
    #[must_use]
    pub fn is_inside(self) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.z >= 0.0
    }

    /// Get the cartesian point for a 2D triangle
    #[inline]
    #[must_use]
    pub fn to_cartesian_2d(self, p0: Vec2, p1: Vec2, p2: Vec2) -> Vec2 {
        p0 * self.x + p1 * self.y + p2 * self.z
    }

    /// Get the cartesian point for a 3D triangle
    #[inline]
    #[must_use]
    pub fn to_cartesian_3d(self, p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
        p0 * self.x + p1 * self.y + p2 * self.z
    }

    /// Interpolate 4D values (e.g. colors) given at the corners of a triangle
    #[inline]
    #[must_use]
    pub fn interpolate_4d(self, p0: Vec4, p1: Vec4, p2: Vec4) -> Vec4 {
        p0 * self.x + p1 * self.y + p2 * self.z
    }
}

impl ApproxEq for Barycentric {
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.x.is_close_to(rhs.x, epsilon) &&
        self.y.is_close_to(rhs.y, epsilon) &&
        self.z.is_close_to(rhs.z, epsilon)
    }
}
