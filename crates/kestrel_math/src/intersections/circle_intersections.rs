use crate::*;
use super::*;

impl Circle2D {
    fn crossing_quadratic(self, start: Vec2, direction: Vec2) -> QuadraticFunction {
        let v = start - self.center;
        crossing_quadratic(direction.dot(v), v.len_sq(), direction.len_sq(), self.radius_sq())
    }

    /// Classify the circle relative to a line with a unit direction
    #[must_use]
    pub fn classify_line(self, line: Line2D) -> PlaneClassification {
        config::enforce_unit_direction("line.direction", line.direction.len_sq());
        let t = (line.point - self.center).dot(line.normal());
        classify_offset(t, self.radius)
    }
}

//-- 2D: circle-line intersection ----------------------------------------------------------------------------------------------

impl Intersect<Line2D> for Circle2D {
    type Output = Option<Segment2D>;

    /// Calculate the chord the line cuts out of the circle, `None` if the line misses it
    fn intersect(self, rhs: Line2D) -> Self::Output {
        self.crossing_quadratic(rhs.point, rhs.direction)
            .solve_equality()
            .map(|(t0, t1)| Segment2D::new(rhs.point_at(t0), rhs.point_at(t1)))
    }
}
symmetric_intersect!(Circle2D, Line2D);

//-- 2D: circle-ray intersection -----------------------------------------------------------------------------------------------

impl Intersect<Ray2D> for Circle2D {
    type Output = bool;

    fn intersect(self, rhs: Ray2D) -> Self::Output {
        self.crossing_quadratic(rhs.vertex, rhs.direction)
            .inequality_less_has_roots_on_interval(0.0, f32::MAX)
    }
}
symmetric_intersect!(Circle2D, Ray2D);

//-- 2D: circle-segment intersection -------------------------------------------------------------------------------------------

impl Intersect<Segment2D> for Circle2D {
    type Output = bool;

    fn intersect(self, rhs: Segment2D) -> Self::Output {
        self.crossing_quadratic(rhs.first, rhs.direction())
            .inequality_less_has_roots_on_interval(0.0, 1.0)
    }
}
symmetric_intersect!(Circle2D, Segment2D);

//-- 2D: circle-rect intersection ----------------------------------------------------------------------------------------------

impl Intersect<OrientedRect> for Circle2D {
    type Output = bool;

    fn intersect(self, rhs: OrientedRect) -> Self::Output {
        rhs.distance_to_point_sq(self.center) <= self.radius_sq()
    }
}
symmetric_intersect!(Circle2D, OrientedRect);

impl Intersect<Rect> for Circle2D {
    type Output = bool;

    fn intersect(self, rhs: Rect) -> Self::Output {
        rhs.distance_to_point_sq(self.center) <= self.radius_sq()
    }
}
symmetric_intersect!(Circle2D, Rect);

//-- 2D: ray-circle hit --------------------------------------------------------------------------------------------------------

impl IntersectWithRay<Ray2D> for Circle2D {
    fn intersect_ray(&self, ray: &Ray2D) -> Option<f32> {
        first_hit(self.crossing_quadratic(ray.vertex, ray.direction).solve_equality())
    }
}
