//! Transformation and projection builders.
//!
//! Matrices act on column vectors: a 2D point is transformed as `(x, y, 1)` by a [`Mat3`], a 3D point as `(x, y, z, 1)` by a [`Mat4`].

use crate::*;

impl Mat3 {
    /// Create a 2D linear transformation mapping the x-axis onto `e1` and the y-axis onto `e2`
    #[must_use]
    pub fn create_linear_2d(e1: Vec2, e2: Vec2) -> Self {
        Self::of([e1.x, e2.x, 0.0,
                  e1.y, e2.y, 0.0,
                  0.0 , 0.0 , 1.0])
    }

    /// Create a 2D affine transformation, a linear transformation followed by a translation
    #[must_use]
    pub fn create_affine_2d(e1: Vec2, e2: Vec2, translation: Vec2) -> Self {
        Self::of([e1.x, e2.x, translation.x,
                  e1.y, e2.y, translation.y,
                  0.0 , 0.0 , 1.0          ])
    }

    /// Create a 2D scale matrix
    #[must_use]
    pub fn create_scale_2d(scale: Vec2) -> Self {
        Self::create_linear_2d(Vec2::new(scale.x, 0.0), Vec2::new(0.0, scale.y))
    }

    /// Create a 2D translation matrix
    #[must_use]
    pub fn create_translation_2d(translation: Vec2) -> Self {
        Self::create_affine_2d(Vec2::I, Vec2::J, translation)
    }

    /// Create a 2D rotation matrix, rotating counter-clockwise by `angle` radians
    #[must_use]
    pub fn create_rotation_2d(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::of([cos, -sin, 0.0,
                  sin,  cos, 0.0,
                  0.0,  0.0, 1.0])
    }

    /// Create a matrix mapping the rect spanned by `old_from` and `old_to` onto the rect spanned by `new_from` and `new_to`, each axis on its own
    #[must_use]
    pub fn create_interval_mapping_2d(old_from: Vec2, old_to: Vec2, new_from: Vec2, new_to: Vec2) -> Self {
        let (sx, tx) = interval_mapping_scale_translate(old_from.x, old_to.x, new_from.x, new_to.x);
        let (sy, ty) = interval_mapping_scale_translate(old_from.y, old_to.y, new_from.y, new_to.y);
        Self::of([sx , 0.0, tx ,
                  0.0, sy , ty ,
                  0.0, 0.0, 1.0])
    }

    /// Create a perspective projection onto `line`, with the center of projection at the origin
    ///
    /// The line may not go through the origin.
    #[must_use]
    pub fn create_perspective_projection_2d(line: Line2D) -> Self {
        let n = line.normal();
        let k = line.point.dot(n);
        Self::of([k  , 0.0, 0.0,
                  0.0, k  , 0.0,
                  n.x, n.y, 0.0])
    }

    /// Create a parallel projection onto `line`, along `direction`
    ///
    /// The direction may not be parallel to the line.
    #[must_use]
    pub fn create_parallel_projection_2d(line: Line2D, direction: Vec2) -> Self {
        let n = line.normal();
        let a = line.point.dot(n);
        let v = direction / n.dot(direction);
        Self::of([1.0 - v.x * n.x,      -v.x * n.y, v.x * a,
                       -v.y * n.x, 1.0 - v.y * n.y, v.y * a,
                  0.0            , 0.0            , 1.0    ])
    }

    /// Create an orthographic projection onto `line`
    #[must_use]
    pub fn create_orthographic_projection_2d(line: Line2D) -> Self {
        Self::create_parallel_projection_2d(line, line.normal())
    }
}

impl Mat4 {
    /// Create a linear transformation mapping the x, y and z-axis onto `e1`, `e2` and `e3` respectively
    #[must_use]
    pub fn create_linear(e1: Vec3, e2: Vec3, e3: Vec3) -> Self {
        Self::create_affine(e1, e2, e3, Vec3::ZERO)
    }

    /// Create an affine transformation, a linear transformation followed by a translation
    #[must_use]
    pub fn create_affine(e1: Vec3, e2: Vec3, e3: Vec3, translation: Vec3) -> Self {
        Self::of([e1.x, e2.x, e3.x, translation.x,
                  e1.y, e2.y, e3.y, translation.y,
                  e1.z, e2.z, e3.z, translation.z,
                  0.0 , 0.0 , 0.0 , 1.0          ])
    }

    /// Create a 3D scale matrix
    #[must_use]
    pub fn create_scale(scale: Vec3) -> Self {
        Self::create_linear(Vec3::new(scale.x, 0.0, 0.0), Vec3::new(0.0, scale.y, 0.0), Vec3::new(0.0, 0.0, scale.z))
    }

    /// Create a 3D translation matrix
    #[must_use]
    pub fn create_translation(translation: Vec3) -> Self {
        Self::create_affine(Vec3::I, Vec3::J, Vec3::K, translation)
    }

    /// Create a 3D rotation matrix from a unit quaternion
    #[must_use]
    pub fn create_rotation(rotation: Quat) -> Self {
        debug_assert!(rotation.len_sq().is_close_to(1.0, 1e-4));
        rotation.to_matrix()
    }

    /// Create a matrix mapping the box spanned by `old_from` and `old_to` onto the box spanned by `new_from` and `new_to`, each axis on its own
    #[must_use]
    pub fn create_interval_mapping(old_from: Vec3, old_to: Vec3, new_from: Vec3, new_to: Vec3) -> Self {
        let (sx, tx) = interval_mapping_scale_translate(old_from.x, old_to.x, new_from.x, new_to.x);
        let (sy, ty) = interval_mapping_scale_translate(old_from.y, old_to.y, new_from.y, new_to.y);
        let (sz, tz) = interval_mapping_scale_translate(old_from.z, old_to.z, new_from.z, new_to.z);
        Self::of([sx , 0.0, 0.0, tx ,
                  0.0, sy , 0.0, ty ,
                  0.0, 0.0, sz , tz ,
                  0.0, 0.0, 0.0, 1.0])
    }

    /// Create a perspective matrix with a vertical field of view `fov_y` (radians) and an `aspect` ratio defined as `width / height`
    ///
    /// The camera looks along +z, depths in `[near, far]` are mapped onto `[-1, 1]`.
    #[must_use]
    pub fn create_perspective_fov(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        debug_assert!(fov_y > 0.0);
        debug_assert!(aspect > 0.0);
        debug_assert!(near > 0.0 && near < far);

        let sy = 1.0 / (fov_y * 0.5).tan();
        let sx = sy / aspect;
        let sz = (far + near) / (far - near);
        let dz = 2.0 * near * far / (near - far);
        Self::of([sx , 0.0, 0.0, 0.0,
                  0.0, sy , 0.0, 0.0,
                  0.0, 0.0, sz , dz ,
                  0.0, 0.0, 1.0, 0.0])
    }

    /// Create a view matrix for a camera at `position`, with the given orthonormal `right`, `up` and `forth` axes
    #[must_use]
    pub fn create_lookat(right: Vec3, up: Vec3, forth: Vec3, position: Vec3) -> Self {
        Self::create_affine(right, up, forth, position).inverse()
    }

    /// Create a perspective projection onto `plane`, with the center of projection at the origin
    ///
    /// The plane may not go through the origin.
    #[must_use]
    pub fn create_perspective_projection(plane: Plane) -> Self {
        let n = plane.normal;
        let k = plane.point.dot(n);
        Self::of([k  , 0.0, 0.0, 0.0,
                  0.0, k  , 0.0, 0.0,
                  0.0, 0.0, k  , 0.0,
                  n.x, n.y, n.z, 0.0])
    }

    /// Create a parallel projection onto `plane`, along `direction`
    ///
    /// The direction may not be parallel to the plane.
    #[must_use]
    pub fn create_parallel_projection(plane: Plane, direction: Vec3) -> Self {
        let n = plane.normal;
        let a = plane.point.dot(n);
        let v = direction / n.dot(direction);
        Self::of([1.0 - v.x * n.x,      -v.x * n.y,      -v.x * n.z, v.x * a,
                       -v.y * n.x, 1.0 - v.y * n.y,      -v.y * n.z, v.y * a,
                       -v.z * n.x,      -v.z * n.y, 1.0 - v.z * n.z, v.z * a,
                  0.0            , 0.0            , 0.0            , 1.0    ])
    }

    /// Create an orthographic projection onto `plane`
    #[must_use]
    pub fn create_orthographic_projection(plane: Plane) -> Self {
        Self::create_parallel_projection(plane, plane.normal)
    }
}

impl Line2D {
    /// Project a point onto the line along `direction`
    #[must_use]
    pub fn project_parallel(self, point: Vec2, direction: Vec2) -> Vec2 {
        let n = self.normal();
        point + direction * ((self.point - point).dot(n) / n.dot(direction))
    }

    /// Project a point onto the line along the ray from `center` through the point
    #[inline]
    #[must_use]
    pub fn project_perspective(self, point: Vec2, center: Vec2) -> Vec2 {
        self.project_parallel(point, point - center)
    }

    /// Get the point on the line closest to `point`
    #[inline]
    #[must_use]
    pub fn project_orthographic(self, point: Vec2) -> Vec2 {
        self.project_parallel(point, self.normal())
    }
}

impl Plane {
    /// Project a point onto the plane along `direction`
    #[must_use]
    pub fn project_parallel(self, point: Vec3, direction: Vec3) -> Vec3 {
        point + direction * ((self.point - point).dot(self.normal) / self.normal.dot(direction))
    }

    /// Project a point onto the plane along the ray from `center` through the point
    #[inline]
    #[must_use]
    pub fn project_perspective(self, point: Vec3, center: Vec3) -> Vec3 {
        self.project_parallel(point, point - center)
    }

    /// Get the point on the plane closest to `point`
    #[inline]
    #[must_use]
    pub fn project_orthographic(self, point: Vec3) -> Vec3 {
        self.project_parallel(point, self.normal)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn builders_2d() {
        let rot = Mat3::create_rotation_2d(HALF_PI);
        assert!(rot.transform_vector(Vec2::I).is_close_to(Vec2::J, 1e-6));

        let affine = Mat3::create_affine_2d(Vec2::new(2.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(5.0, -1.0));
        assert_eq!(affine.transform_point(Vec2::new(1.0, 2.0)), Vec2::new(9.0, 1.0));
        assert_eq!(affine.transform_vector(Vec2::new(1.0, 2.0)), Vec2::new(4.0, 2.0));

        let scale = Mat3::create_scale_2d(Vec2::new(2.0, 3.0));
        let translate = Mat3::create_translation_2d(Vec2::new(1.0, 1.0));
        assert_eq!((translate * scale).transform_point(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 4.0));
        assert_eq!(translate.transform_vector(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn interval_mapping() {
        let m2 = Mat3::create_interval_mapping_2d(Vec2::ZERO, Vec2::set(10.0), Vec2::set(-1.0), Vec2::set(1.0));
        assert!(m2.transform_point(Vec2::set(5.0)).is_close_to(Vec2::ZERO, 1e-6));
        assert!(m2.transform_point(Vec2::new(10.0, 0.0)).is_close_to(Vec2::new(1.0, -1.0), 1e-6));

        let m3 = Mat4::create_interval_mapping(Vec3::ZERO, Vec3::set(2.0), Vec3::set(4.0), Vec3::set(0.0));
        assert!(m3.transform_point(Vec3::new(0.0, 1.0, 2.0)).is_close_to(Vec3::new(4.0, 2.0, 0.0), 1e-6));
    }

    #[test]
    fn builders_3d() {
        let rotation = Quat::from_axis_angle(Vec3::K, HALF_PI);
        let m = Mat4::create_translation(Vec3::new(0.0, 0.0, 1.0)) * Mat4::create_rotation(rotation) * Mat4::create_scale(Vec3::set(2.0));
        assert!(m.transform_point(Vec3::I).is_close_to(Vec3::new(0.0, 2.0, 1.0), 1e-6));
        assert!(m.transform_vector(Vec3::I).is_close_to(Vec3::new(0.0, 2.0, 0.0), 1e-6));

        let linear = Mat4::create_linear(Vec3::J, Vec3::K, Vec3::I);
        assert_eq!(linear.transform_point(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(3.0, 1.0, 2.0));
    }

    #[test]
    fn perspective_fov() {
        let (near, far) = (0.5, 10.0);
        let m = Mat4::create_perspective_fov(HALF_PI, 2.0, near, far);
        assert!(m.transform_point(Vec3::new(0.0, 0.0, near)).z.is_close_to(-1.0, 1e-5));
        assert!(m.transform_point(Vec3::new(0.0, 0.0, far)).z.is_close_to(1.0, 1e-5));
        // Edges of the view at depth 1
        let corner = m.transform_point(Vec3::new(2.0, 1.0, 1.0));
        assert!(corner.x.is_close_to(1.0, 1e-5));
        assert!(corner.y.is_close_to(1.0, 1e-5));
    }

    #[test]
    fn lookat() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let view = Mat4::create_lookat(Vec3::I, Vec3::J, Vec3::K, position);
        assert!(view.transform_point(position).is_close_to(Vec3::ZERO, 1e-6));
        assert!(view.transform_point(position + Vec3::K).is_close_to(Vec3::K, 1e-6));

        let turned = Mat4::create_lookat(Vec3::K, Vec3::J, -Vec3::I, Vec3::ZERO);
        assert!(turned.transform_point(Vec3::new(-5.0, 0.0, 0.0)).is_close_to(Vec3::new(0.0, 0.0, 5.0), 1e-5));
    }

    #[test]
    fn projections_2d() {
        let line = Line2D::new(Vec2::new(0.0, 2.0), Vec2::I);

        let perspective = Mat3::create_perspective_projection_2d(line);
        assert!(perspective.transform_point(Vec2::new(1.0, 1.0)).is_close_to(Vec2::new(2.0, 2.0), 1e-6));
        assert!(line.project_perspective(Vec2::new(1.0, 1.0), Vec2::ZERO).is_close_to(Vec2::new(2.0, 2.0), 1e-6));

        let direction = Vec2::new(1.0, 1.0);
        let parallel = Mat3::create_parallel_projection_2d(line, direction);
        for point in [Vec2::ZERO, Vec2::new(3.0, 0.0), Vec2::new(-1.0, 4.0)] {
            let expected = line.project_parallel(point, direction);
            assert!(expected.y.is_close_to(2.0, 1e-6));
            assert!(parallel.transform_point(point).is_close_to(expected, 1e-5));
        }
        assert!(line.project_parallel(Vec2::new(3.0, 0.0), direction).is_close_to(Vec2::new(5.0, 2.0), 1e-6));

        let ortho = Mat3::create_orthographic_projection_2d(line);
        assert!(ortho.transform_point(Vec2::new(3.0, 5.0)).is_close_to(Vec2::new(3.0, 2.0), 1e-6));
        assert!(line.project_orthographic(Vec2::new(3.0, 5.0)).is_close_to(Vec2::new(3.0, 2.0), 1e-6));
    }

    #[test]
    fn projections_3d() {
        let plane = Plane::new(Vec3::K, Vec3::K);

        let perspective = Mat4::create_perspective_projection(plane);
        assert!(perspective.transform_point(Vec3::new(2.0, 4.0, 2.0)).is_close_to(Vec3::new(1.0, 2.0, 1.0), 1e-6));
        assert!(plane.project_perspective(Vec3::new(2.0, 4.0, 2.0), Vec3::ZERO).is_close_to(Vec3::new(1.0, 2.0, 1.0), 1e-6));

        let direction = Vec3::new(1.0, 0.0, 1.0);
        let parallel = Mat4::create_parallel_projection(plane, direction);
        assert!(parallel.transform_point(Vec3::ZERO).is_close_to(Vec3::new(1.0, 0.0, 1.0), 1e-6));
        assert!(plane.project_parallel(Vec3::new(0.0, 3.0, -1.0), direction).is_close_to(Vec3::new(2.0, 3.0, 1.0), 1e-6));

        let ortho = Mat4::create_orthographic_projection(plane);
        assert!(ortho.transform_point(Vec3::new(2.0, 4.0, 7.0)).is_close_to(Vec3::new(2.0, 4.0, 1.0), 1e-6));
        assert!(plane.project_orthographic(Vec3::new(2.0, 4.0, 7.0)).is_close_to(Vec3::new(2.0, 4.0, 1.0), 1e-6));
    }
}
