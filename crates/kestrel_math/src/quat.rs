use core::ops::*;
use std::fmt::Display;
use crate::*;

/// Quaternion, used as a 3D rotation when it has a length of 1
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Quat {
    pub x : f32,
    pub y : f32,
    pub z : f32,
    /// Real part
    pub w : f32,
}

impl Quat {
    /// Quaternion that rotates nothing
    pub const NO_ROTATION : Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new quaternion
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a quaternion from a `real` and `imaginary` part
    #[inline]
    #[must_use]
    pub const fn from_real_and_imaginary(real: f32, imaginary: Vec3) -> Self {
        Self { x: imaginary.x, y: imaginary.y, z: imaginary.z, w: real }
    }

    /// Create a quaternion rotating around a unit length `axis` by `angle` radians
    #[inline]
    #[must_use]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::from_real_and_imaginary(cos, axis * sin)
    }

    /// Get the vector (imaginary) part of the quaternion
    #[inline]
    #[must_use]
    pub fn vector_part(self) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    /// Get the angle the quaternion rotates by
    #[must_use]
    pub fn angle(self) -> f32 {
        self.vector_part().len().atan2(self.w) * 2.0
    }

    /// Get the conjugate of the quaternion
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }

    /// Get the square length of the quaternion
    #[inline]
    #[must_use]
    pub fn len_sq(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Get the length of the quaternion
    #[inline]
    #[must_use]
    pub fn len(self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Rotate a vector by the quaternion (`q * v * q^-1`), the quaternion needs to have a length of 1
    #[must_use]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        (self * Self::from_real_and_imaginary(0.0, v) * self.conjugate()).vector_part()
    }

    /// Get the rotation matrix corresponding to the quaternion
    #[must_use]
    pub fn to_matrix(self) -> Mat4 {
        let Quat { x, y, z, w } = self;
        Mat4::of([
            1.0 - 2.0 * (y * y + z * z), 2.0 * (x * y - w * z)      , 2.0 * (x * z + w * y)      , 0.0,
            2.0 * (x * y + w * z)      , 1.0 - 2.0 * (x * x + z * z), 2.0 * (y * z - w * x)      , 0.0,
            2.0 * (x * z - w * y)      , 2.0 * (y * z + w * x)      , 1.0 - 2.0 * (x * x + y * y), 0.0,
            0.0                        , 0.0                        , 0.0                        , 1.0,
        ])
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::NO_ROTATION
    }
}

impl Mul for Quat {
    type Output = Self;

    /// Hamilton product
    fn mul(self, rhs: Self) -> Self {
        let (q1, q2) = (self, rhs);
        Self {
            x: q1.x * q2.w + q1.w * q2.x + q1.y * q2.z - q1.z * q2.y,
            y: q1.w * q2.y + q1.y * q2.w + q1.z * q2.x - q1.x * q2.z,
            z: q1.w * q2.z + q1.z * q2.w + q1.x * q2.y - q1.y * q2.x,
            w: q1.w * q2.w - q1.x * q2.x - q1.y * q2.y - q1.z * q2.z,
        }
    }
}

impl ApproxEq for Quat {
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.x.is_close_to(rhs.x, epsilon) &&
        self.y.is_close_to(rhs.y, epsilon) &&
        self.z.is_close_to(rhs.z, epsilon) &&
        self.w.is_close_to(rhs.w, epsilon)
    }
}

impl Display for Quat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{}, ({}, {}, {})]", self.w, self.x, self.y, self.z))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use proptest::prelude::*;

    #[test]
    fn quarter_turn() {
        let q = Quat::from_axis_angle(Vec3::K, HALF_PI);
        assert!(q.rotate(Vec3::I).is_close_to(Vec3::J, 1e-6));
        assert!(q.rotate(Vec3::K).is_close_to(Vec3::K, 1e-6));
        assert!(q.angle().is_close_to(HALF_PI, 1e-6));
    }

    #[test]
    fn no_rotation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Quat::NO_ROTATION.rotate(v), v);
        assert_eq!(Quat::NO_ROTATION * Quat::NO_ROTATION, Quat::NO_ROTATION);
        assert_eq!(Quat::NO_ROTATION.to_matrix(), Mat4::identity());
    }

    #[test]
    fn hamilton_units() {
        let i = Quat::new(1.0, 0.0, 0.0, 0.0);
        let j = Quat::new(0.0, 1.0, 0.0, 0.0);
        let k = Quat::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, Quat::new(0.0, 0.0, 0.0, -1.0));
    }

    proptest! {
        #[test]
        fn matrix_matches_rotate(angle in -3.0f32..3.0, x in -1.0f32..1.0, y in -1.0f32..1.0, z in -1.0f32..1.0) {
            let axis = Vec3::new(x, y, z);
            prop_assume!(axis.len_sq() > 1e-2);
            let q = Quat::from_axis_angle(axis.normalize(), angle);
            let v = Vec3::new(0.5, -1.0, 2.0);
            let by_quat = q.rotate(v);
            let by_mat = q.to_matrix().transform_vector(v);
            prop_assert!(by_quat.is_close_to(by_mat, 1e-4));
            prop_assert!(by_quat.len().is_close_to(v.len(), 1e-4));
        }
    }
}
