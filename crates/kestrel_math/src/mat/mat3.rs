use crate::*;

impl Mat3 {
    /// Create a matrix from its rows
    #[must_use]
    pub fn from_rows(row0: Vec3, row1: Vec3, row2: Vec3) -> Self {
        Self::of([row0.x, row0.y, row0.z,
                  row1.x, row1.y, row1.z,
                  row2.x, row2.y, row2.z])
    }

    /// Create a matrix from its columns
    #[must_use]
    pub fn from_columns(column0: Vec3, column1: Vec3, column2: Vec3) -> Self {
        Self::from_rows(column0, column1, column2).transpose()
    }

    /// Transform a 2D vector as the homogeneous coordinate `(x, y, 0)`, the last row is ignored
    #[must_use]
    pub fn transform_vector(self, v: Vec2) -> Vec2 {
        Vec2 { x: self.get(0, 0) * v.x + self.get(0, 1) * v.y,
               y: self.get(1, 0) * v.x + self.get(1, 1) * v.y }
    }

    /// Transform a 2D point as the homogeneous coordinate `(x, y, 1)`, dividing the result by its `w`
    #[must_use]
    pub fn transform_point(self, v: Vec2) -> Vec2 {
        let res = self * v.extend(1.0);
        Vec2 { x: res.x / res.z, y: res.y / res.z }
    }
}
