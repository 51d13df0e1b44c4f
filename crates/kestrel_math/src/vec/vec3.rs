use core::fmt::Display;
use crate::*;

impl Vec3 {
    /// Unit vector along the x-axis
    pub const I : Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the y-axis
    pub const J : Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the z-axis
    pub const K : Self = Self::new(0.0, 0.0, 1.0);

    /// Create a unit vector from spherical angles, `azimuth` in the xz-plane starting at the x-axis and `elevation` towards the y-axis
    #[must_use]
    pub fn from_spherical(azimuth: f32, elevation: f32) -> Self {
        let (sin_a, cos_a) = azimuth.sin_cos();
        let (sin_e, cos_e) = elevation.sin_cos();
        Self { x: cos_a * cos_e, y: sin_e, z: sin_a * cos_e }
    }

    /// Extend a `Vec3` to a `Vec4`
    #[inline]
    #[must_use]
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4 { x: self.x, y: self.y, z: self.z, w }
    }

    /// Shrink a `Vec3` to a `Vec2`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }

    /// Calculate the cross product of 2 vectors
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Vec3 { x: self.y * rhs.z - self.z * rhs.y,
               y: self.z * rhs.x - self.x * rhs.z,
               z: self.x * rhs.y - self.y * rhs.x }
    }

    /// Get a vector orthogonal to this one
    ///
    /// The result is built by crossing with the axis along which the vector has its smallest component, so it never degenerates for a non-zero vector.
    #[must_use]
    pub fn orthogonal(self) -> Self {
        let abs = self.abs();
        match index_of_min3(abs.x, abs.y, abs.z) {
            0 => Vec3::new(0.0, -self.z, self.y),
            1 => Vec3::new(-self.z, 0.0, self.x),
            _ => Vec3::new(-self.y, self.x, 0.0),
        }
    }

    /// Get or flip the vector, so it's pointing in the opposite direction of the incidence vector, relative to the normal
    #[must_use]
    pub fn face_forward(self, incidence: Self, normal: Self) -> Self {
        if incidence.dot(normal) < 0.0 { self } else { -self }
    }

    /// Reflect a vector on a 'surface' with a normal
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        debug_assert!(normal.is_normalized(1e-4));
        self - normal * self.dot(normal) * 2.0
    }
}

impl Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}
