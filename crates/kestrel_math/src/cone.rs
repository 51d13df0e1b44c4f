use std::fmt::Display;
use crate::*;

/// Truncated cone with its apex at `vertex`, opening along a unit `direction`
///
/// The radius at height `h` along the axis is `h * radius_coefficient`, the cone only covers heights in `[start_height, end_height]`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cone {
    pub vertex             : Vec3,
    pub direction          : Vec3,
    /// Tangent of the half opening angle, must be positive
    pub radius_coefficient : f32,
    pub start_height       : f32,
    pub end_height         : f32,
}

impl Cone {
    /// Create a new cone
    #[inline]
    #[must_use]
    pub const fn new(vertex: Vec3, direction: Vec3, radius_coefficient: f32, start_height: f32, end_height: f32) -> Self {
        Self { vertex, direction, radius_coefficient, start_height, end_height }
    }

    /// Create a cone from its half opening angle, in radians
    #[must_use]
    pub fn from_half_angle(vertex: Vec3, direction: Vec3, half_angle: f32, start_height: f32, end_height: f32) -> Self {
        Self::new(vertex, direction, half_angle.tan(), start_height, end_height)
    }

    /// Get the radius of the cone at height `height`
    #[inline]
    #[must_use]
    pub fn radius_at(self, height: f32) -> f32 {
        height * self.radius_coefficient
    }

    /// Check if the cone contains a point, points on the surface are contained
    #[must_use]
    pub fn contains(self, point: Vec3) -> bool {
        let v = point - self.vertex;
        let d = v.dot(self.direction);
        if d < self.start_height || d > self.end_height {
            return false;
        }
        let l_sq = v.len_sq() - d * d;
        l_sq <= sqr(self.radius_at(d))
    }
}

impl Display for Cone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ vertex: {}, direction: {}, k: {}, heights: [{}, {}] }}",
            self.vertex, self.direction, self.radius_coefficient, self.start_height, self.end_height))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn contains() {
        let cone = Cone::new(Vec3::ZERO, Vec3::K, 0.5, 1.0, 4.0);
        assert_eq!(cone.radius_at(2.0), 1.0);
        assert!(cone.contains(Vec3::new(0.0, 0.0, 2.0)));
        assert!(cone.contains(Vec3::new(0.9, 0.0, 2.0)));
        assert!(!cone.contains(Vec3::new(1.1, 0.0, 2.0)));
        assert!(!cone.contains(Vec3::new(0.0, 0.0, 0.5)));
        assert!(!cone.contains(Vec3::new(0.0, 0.0, 4.5)));
    }

    #[test]
    fn half_angle() {
        let cone = Cone::from_half_angle(Vec3::ZERO, Vec3::J, QUARTER_PI, 0.0, 1.0);
        assert!(cone.radius_coefficient.is_close_to(1.0, 1e-6));
    }
}
