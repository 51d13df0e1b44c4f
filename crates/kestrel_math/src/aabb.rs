use std::fmt::Display;
use crate::*;

/// Axis-aligned bounding box
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoundingBox {
    pub min : Vec3,
    pub max : Vec3,
}

impl BoundingBox {
    /// Create a new bounding box
    #[inline]
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a bounding box from its center and size
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half_size = size * 0.5;
        Self { min: center - half_size, max: center + half_size }
    }

    /// Get the size of the bounding box
    #[inline]
    #[must_use]
    pub fn size(self) -> Vec3 {
        self.max - self.min
    }

    /// Get the extent along the x-axis
    #[inline]
    #[must_use]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    /// Get the extent along the y-axis
    #[inline]
    #[must_use]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Get the extent along the z-axis
    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.max.z - self.min.z
    }

    /// Get the center of the bounding box
    #[inline]
    #[must_use]
    pub fn center(self) -> Vec3 {
        self.min + self.size() * 0.5
    }

    /// Get the volume of the bounding box
    #[inline]
    #[must_use]
    pub fn volume(self) -> f32 {
        self.width() * self.height() * self.length()
    }

    /// Check if the bounding box contains a point, points on the surface are contained
    #[must_use]
    pub fn contains(self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if 2 bounding boxes overlap
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        intervals_overlap(self.min.x, self.max.x, other.min.x, other.max.x) &&
        intervals_overlap(self.min.y, self.max.y, other.min.y, other.max.y) &&
        intervals_overlap(self.min.z, self.max.z, other.min.z, other.max.z)
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ min: {}, max: {} }}", self.min, self.max))
    }
}

/// Bounding box rotated around its `min` corner
///
/// The local axes are the x-, y- and z-axis rotated by `rotation`, which should be unit length.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OrientedBox {
    pub bounding_box : BoundingBox,
    pub rotation     : Quat,
}

impl OrientedBox {
    /// Create a new oriented box
    #[inline]
    #[must_use]
    pub const fn new(bounding_box: BoundingBox, rotation: Quat) -> Self {
        Self { bounding_box, rotation }
    }

    /// Create an oriented box from its center, size and rotation
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3, rotation: Quat) -> Self {
        let min = center - rotation.rotate(size * 0.5);
        Self { bounding_box: BoundingBox::new(min, min + size), rotation }
    }

    /// Get the direction of the local x-axis
    #[inline]
    #[must_use]
    pub fn right_direction(self) -> Vec3 {
        self.rotation.rotate(Vec3::I)
    }

    /// Get the direction of the local y-axis
    #[inline]
    #[must_use]
    pub fn up_direction(self) -> Vec3 {
        self.rotation.rotate(Vec3::J)
    }

    /// Get the direction of the local z-axis
    #[inline]
    #[must_use]
    pub fn forth_direction(self) -> Vec3 {
        self.rotation.rotate(Vec3::K)
    }

    /// Get the center of the box
    #[must_use]
    pub fn center(self) -> Vec3 {
        self.bounding_box.min + self.rotation.rotate(self.bounding_box.size() * 0.5)
    }

    /// Check if the box contains a point, points on the surface are contained
    #[must_use]
    pub fn contains(self, point: Vec3) -> bool {
        let v = point - self.bounding_box.min;
        let size = self.bounding_box.size();
        let x = v.dot(self.right_direction());
        if x < 0.0 || x > size.x {
            return false;
        }
        let y = v.dot(self.up_direction());
        if y < 0.0 || y > size.y {
            return false;
        }
        let z = v.dot(self.forth_direction());
        z >= 0.0 && z <= size.z
    }
}

impl From<BoundingBox> for OrientedBox {
    fn from(bounding_box: BoundingBox) -> Self {
        Self { bounding_box, rotation: Quat::NO_ROTATION }
    }
}

impl Display for OrientedBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ box: {}, rotation: {} }}", self.bounding_box, self.rotation))
    }
}
