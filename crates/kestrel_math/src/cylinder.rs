use std::fmt::Display;
use crate::*;

/// Cylinder with its base centered at `position`, extending `height` along a unit `direction`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cylinder {
    pub position  : Vec3,
    pub direction : Vec3,
    pub radius    : f32,
    pub height    : f32,
}

impl Cylinder {
    /// Create a new cylinder
    #[inline]
    #[must_use]
    pub const fn new(position: Vec3, direction: Vec3, radius: f32, height: f32) -> Self {
        Self { position, direction, radius, height }
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

    /// Check if the cylinder contains a point, points on the surface are contained
    #[must_use]
    pub fn contains(self, point: Vec3) -> bool {
        let v = point - self.position;
        let d = v.dot(self.direction);
        if d < 0.0 || d > self.height {
            return false;
        }
        let l_sq = v.len_sq() - sqr(d);
        l_sq <= self.radius_sq()
    }
}

impl Display for Cylinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ position: {}, direction: {}, radius: {}, height: {} }}", self.position, self.direction, self.radius, self.height))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn contains() {
        let cylinder = Cylinder::new(Vec3::new(0.0, 1.0, 0.0), Vec3::J, 2.0, 3.0);
        assert_eq!(cylinder.radius_sq(), 4.0);
        assert_eq!(cylinder.diameter(), 4.0);
        assert!(cylinder.contains(Vec3::new(1.0, 2.0, 1.0)));
        assert!(cylinder.contains(Vec3::new(2.0, 4.0, 0.0)));
        assert!(!cylinder.contains(Vec3::new(2.0, 4.5, 0.0)));
        assert!(!cylinder.contains(Vec3::new(0.0, 0.5, 0.0)));
        assert!(!cylinder.contains(Vec3::new(1.5, 2.0, 1.5)));
    }
}
