use std::fmt::Display;
use crate::*;

/// Axis-aligned 2D rectangle
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub min : Vec2,
    pub max : Vec2,
}

impl Rect {
    /// Create a new rect
    #[inline]
    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rect from its center and size
    #[must_use]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half_size = size * 0.5;
        Self { min: center - half_size, max: center + half_size }
    }

    /// Get the size of the rect
    #[inline]
    #[must_use]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    /// Get the width of the rect
    #[inline]
    #[must_use]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    /// Get the height of the rect
    #[inline]
    #[must_use]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Get the center of the rect
    #[inline]
    #[must_use]
    pub fn center(self) -> Vec2 {
        self.min + self.size() * 0.5
    }

    /// Get the area of the rect
    #[inline]
    #[must_use]
    pub fn area(self) -> f32 {
        self.width() * self.height()
    }

    /// Check if the rect contains a point, points on the border are contained
    #[must_use]
    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Check if 2 rects overlap
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        intervals_overlap(self.min.x, self.max.x, other.min.x, other.max.x) &&
        intervals_overlap(self.min.y, self.max.y, other.min.y, other.max.y)
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ min: {}, max: {} }}", self.min, self.max))
    }
}

/// Rectangle rotated around its `min` corner
///
/// The local axes are the x- and y-axis rotated by `rotation`, which should be unit length.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OrientedRect {
    pub rect     : Rect,
    pub rotation : Complex,
}

impl OrientedRect {
    /// Create a new oriented rect
    #[inline]
    #[must_use]
    pub const fn new(rect: Rect, rotation: Complex) -> Self {
        Self { rect, rotation }
    }

    /// Create an oriented rect from its center, size and rotation
    #[must_use]
    pub fn from_center_size(center: Vec2, size: Vec2, rotation: Complex) -> Self {
        let min = center - rotation.rotate(size * 0.5);
        Self { rect: Rect::new(min, min + size), rotation }
    }

    /// Get the direction of the local x-axis
    #[inline]
    #[must_use]
    pub fn right_direction(self) -> Vec2 {
        self.rotation.rotate(Vec2::I)
    }

    /// Get the direction of the local y-axis
    #[inline]
    #[must_use]
    pub fn up_direction(self) -> Vec2 {
        self.rotation.rotate(Vec2::J)
    }

    /// Get the center of the rect
    #[must_use]
    pub fn center(self) -> Vec2 {
        self.rect.min + self.rotation.rotate(self.rect.size() * 0.5)
    }

    /// Check if the rect contains a point, points on the border are contained
    #[must_use]
    pub fn contains(self, point: Vec2) -> bool {
        let v = point - self.rect.min;
        let size = self.rect.size();
        let x = v.dot(self.right_direction());
        if x < 0.0 || x > size.x {
            return false;
        }
        let y = v.dot(self.up_direction());
        y >= 0.0 && y <= size.y
    }
}

impl From<Rect> for OrientedRect {
    fn from(rect: Rect) -> Self {
        Self { rect, rotation: Complex::NO_ROTATION }
    }
}

impl Display for OrientedRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ rect: {}, rotation: {} }}", self.rect, self.rotation))
    }
}
