use core::fmt::Display;
use crate::*;

impl Vec2 {
    /// Unit vector along the x-axis
    pub const I : Self = Self::new(1.0, 0.0);
    /// Unit vector along the y-axis
    pub const J : Self = Self::new(0.0, 1.0);

    /// Create a unit vector at `angle` radians from the x-axis
    #[must_use]
    pub fn from_polar(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos, y: sin }
    }

    /// Extend a `Vec2` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn extend(self, z: f32) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z }
    }

    /// Get the vector rotated a quarter turn counter-clockwise
    #[inline]
    #[must_use]
    pub fn orthogonal(self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    /// Calculate the 2D cross product (the z-component of the 3D cross product)
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Get the angle of the vector relative to the x-axis, in radians
    #[must_use]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {})", self.x, self.y))
    }
}
