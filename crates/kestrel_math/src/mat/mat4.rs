use crate::*;

impl Mat4 {
    /// Create a matrix from its rows
    #[must_use]
    pub fn from_rows(row0: Vec4, row1: Vec4, row2: Vec4, row3: Vec4) -> Self {
        Self::of([row0.x, row0.y, row0.z, row0.w,
                  row1.x, row1.y, row1.z, row1.w,
                  row2.x, row2.y, row2.z, row2.w,
                  row3.x, row3.y, row3.z, row3.w])
    }

    /// Create a matrix from its columns
    #[must_use]
    pub fn from_columns(column0: Vec4, column1: Vec4, column2: Vec4, column3: Vec4) -> Self {
        Self::from_rows(column0, column1, column2, column3).transpose()
    }

    /// Transform a 3D vector as the homogeneous coordinate `(x, y, z, 0)`, the last row is ignored
    #[must_use]
    pub fn transform_vector(self, v: Vec3) -> Vec3 {
        Vec3 { x: self.get(0, 0) * v.x + self.get(0, 1) * v.y + self.get(0, 2) * v.z,
               y: self.get(1, 0) * v.x + self.get(1, 1) * v.y + self.get(1, 2) * v.z,
               z: self.get(2, 0) * v.x + self.get(2, 1) * v.y + self.get(2, 2) * v.z }
    }

    /// Transform a 3D point as the homogeneous coordinate `(x, y, z, 1)`, dividing the result by its `w`
    #[must_use]
    pub fn transform_point(self, v: Vec3) -> Vec3 {
        let res = self * v.extend(1.0);
        res.shrink() / res.w
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn homogeneous_transforms() {
        let m = Mat4::of([1.0, 0.0, 0.0, 5.0,
                          0.0, 1.0, 0.0, 6.0,
                          0.0, 0.0, 1.0, 7.0,
                          0.0, 0.0, 0.0, 1.0]);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(m.transform_vector(v), v);
        assert_eq!(m.transform_point(v), Vec3::new(6.0, 8.0, 10.0));
        assert_eq!(m * v.extend(1.0), Vec4::new(6.0, 8.0, 10.0, 1.0));
    }

    #[test]
    fn determinant_of_triangular() {
        let m = Mat4::of([2.0, 1.0, 7.0, 3.0,
                          0.0, 3.0, 4.0, 1.0,
                          0.0, 0.0, 4.0, 9.0,
                          0.0, 0.0, 0.0, 5.0]);
        assert_eq!(m.determinant(), 120.0);
        assert!((m * m.inverse()).is_close_to(Mat4::identity(), 1e-5));
    }

    #[test]
    fn columns() {
        let m = Mat4::from_columns(Vec4::new(1.0, 2.0, 3.0, 4.0), Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);
        assert_eq!(m.row(2), Vec4::new(3.0, 0.0, 0.0, 0.0));
    }
}
