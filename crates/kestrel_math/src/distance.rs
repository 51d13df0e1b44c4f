//! Squared distance from a point to a (rotated) rectangle or box.
//!
//! With `a = min - point` and the region spanned by `x_k * axis_k` for `x_k` in `[0, extent_k]`, the squared distance is
//! `|a|^2 + sum_k min(x_k^2 + 2 * (a . axis_k) * x_k)`, every axis being minimized on its own.

use crate::*;

/// Minimum of `g(x) = x^2 + linear_term * x` for `x` in `[0, max_x]`
///
/// Candidates are both ends of the interval and the vertex at `-linear_term / 2`, when it lies inside the interval.
#[must_use]
pub fn distance_function_part(linear_term: f32, max_x: f32) -> f32 {
    let left = 0.0;
    let right = sqr(max_x) + linear_term * max_x;
    let extremum_x = -linear_term * 0.5;
    let extremum = if (0.0..=max_x).contains(&extremum_x) {
        sqr(extremum_x) + linear_term * extremum_x
    } else {
        left
    };
    min3(left, right, extremum)
}

impl OrientedRect {
    /// Calculate the squared distance from the rect to a point, 0 when the point is inside
    #[must_use]
    pub fn distance_to_point_sq(self, point: Vec2) -> f32 {
        let a = self.rect.min - point;
        let part_x = distance_function_part(2.0 * a.dot(self.right_direction()), self.rect.width());
        let part_y = distance_function_part(2.0 * a.dot(self.up_direction()), self.rect.height());
        part_x + part_y + a.len_sq()
    }
}

impl Rect {
    /// Calculate the squared distance from the rect to a point, 0 when the point is inside
    #[inline]
    #[must_use]
    pub fn distance_to_point_sq(self, point: Vec2) -> f32 {
        OrientedRect::from(self).distance_to_point_sq(point)
    }
}

impl OrientedBox {
    /// Calculate the squared distance from the box to a point, 0 when the point is inside
    #[must_use]
    pub fn distance_to_point_sq(self, point: Vec3) -> f32 {
        let aabb = self.bounding_box;
        let a = aabb.min - point;
        let part_x = distance_function_part(2.0 * a.dot(self.right_direction()), aabb.width());
        let part_y = distance_function_part(2.0 * a.dot(self.up_direction()), aabb.height());
        let part_z = distance_function_part(2.0 * a.dot(self.forth_direction()), aabb.length());
        part_x + part_y + part_z + a.len_sq()
    }
}

impl BoundingBox {
    /// Calculate the squared distance from the bounding box to a point, 0 when the point is inside
    #[inline]
    #[must_use]
    pub fn distance_to_point_sq(self, point: Vec3) -> f32 {
        OrientedBox::from(self).distance_to_point_sq(point)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use proptest::prelude::*;

    #[test]
    fn function_part() {
        // vertex inside the interval: g(x) = x^2 - 2x has its minimum -1 at x = 1
        assert_eq!(distance_function_part(-2.0, 4.0), -1.0);
        // vertex past the interval: minimum at max_x
        assert_eq!(distance_function_part(-6.0, 2.0), -8.0);
        // increasing on the interval: minimum at 0
        assert_eq!(distance_function_part(3.0, 2.0), 0.0);
    }

    #[test]
    fn rect_distance() {
        let rect = Rect::new(Vec2::ZERO, Vec2::new(2.0, 1.0));
        assert_eq!(rect.distance_to_point_sq(Vec2::new(1.0, 0.5)), 0.0);
        assert_eq!(rect.distance_to_point_sq(Vec2::new(2.0, 1.0)), 0.0);
        assert_eq!(rect.distance_to_point_sq(Vec2::new(5.0, 0.5)), 9.0);
        assert_eq!(rect.distance_to_point_sq(Vec2::new(5.0, 5.0)), 25.0);
        assert_eq!(rect.distance_to_point_sq(Vec2::new(-1.0, -1.0)), 2.0);
    }

    #[test]
    fn box_distance() {
        let aabb = BoundingBox::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(aabb.distance_to_point_sq(Vec3::new(0.5, 0.5, 0.5)), 0.0);
        assert_eq!(aabb.distance_to_point_sq(Vec3::new(5.0, 0.0, 0.0)), 16.0);
        assert_eq!(aabb.distance_to_point_sq(Vec3::new(2.0, 2.0, 2.0)), 3.0);
    }

    #[test]
    fn rotated_box_distance() {
        let obb = OrientedBox::from_center_size(Vec3::ZERO, Vec3::new(4.0, 2.0, 2.0), Quat::from_axis_angle(Vec3::K, HALF_PI));
        // local x runs along world y, so the box reaches y = 2 but only x = 1
        assert!(obb.distance_to_point_sq(Vec3::new(0.0, 1.5, 0.0)).is_close_to(0.0, 1e-4));
        assert!(obb.distance_to_point_sq(Vec3::new(3.0, 0.0, 0.0)).is_close_to(4.0, 1e-4));
        assert!(obb.distance_to_point_sq(Vec3::new(0.0, 5.0, 0.0)).is_close_to(9.0, 1e-4));
    }

    #[test]
    fn rotated_rect_distance() {
        let rect = OrientedRect::from_center_size(Vec2::ZERO, Vec2::new(2.0, 2.0), Complex::from_polar(QUARTER_PI));
        // the corner of the rotated square points along the x-axis at sqrt(2)
        let dist = rect.distance_to_point_sq(Vec2::new(3.0, 0.0));
        assert!(dist.is_close_to(sqr(3.0 - 2.0f32.sqrt()), 1e-4));
    }

    proptest! {
        #[test]
        fn matches_clamped_point(px in -10.0f32..10.0, py in -10.0f32..10.0, pz in -10.0f32..10.0) {
            let aabb = BoundingBox::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 1.0, 4.0));
            let point = Vec3::new(px, py, pz);
            let clamped = point.max(aabb.min).min(aabb.max);
            let expected = clamped.dist_sq(point);
            let found = aabb.distance_to_point_sq(point);
            prop_assert!(found.is_close_to(expected, 1e-3 * (1.0 + expected)));
            prop_assert!(found >= -1e-3);
        }

        #[test]
        fn zero_inside_positive_outside(px in -4.0f32..4.0, py in -4.0f32..4.0, angle in -3.0f32..3.0) {
            let rotation = Complex::from_polar(angle);
            let rect = OrientedRect::from_center_size(Vec2::new(1.0, -1.0), Vec2::new(3.0, 2.0), rotation);
            // 5e-2 wider on every side
            let grown = OrientedRect::from_center_size(Vec2::new(1.0, -1.0), Vec2::new(3.1, 2.1), rotation);
            let point = Vec2::new(px, py);
            let dist = rect.distance_to_point_sq(point);
            if rect.contains(point) {
                prop_assert!(dist.abs() <= 1e-3);
            } else if !grown.contains(point) {
                prop_assert!(dist > 0.0);
            }
        }
    }
}
