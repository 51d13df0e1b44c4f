use core::fmt::Display;
use crate::*;

impl Vec4 {
    /// Shrink a `Vec4` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    /// Shrink to a `Vec3` by dividing through `w`, used for homogeneous points
    ///
    /// A `w` of 0 is treated as 1, the vector is then a direction
    #[must_use]
    pub fn homogeneous_divide(self) -> Vec3 {
        if self.w.is_zero() { self.shrink() } else { self.shrink() / self.w }
    }
}

impl Display for Vec4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {}, {})", self.x, self.y, self.z, self.w))
    }
}
