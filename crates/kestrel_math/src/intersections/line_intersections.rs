use crate::*;
use super::*;

/// Parameter `t` at which `start + direction * t` crosses the line (or plane) through `point` with normal `normal`
///
/// `None` when the direction runs parallel to it.
macro_rules! crossing_parameter {
    ($start:expr, $direction:expr, $point:expr, $normal:expr) => {{
        let denom = $direction.dot($normal);
        if denom == 0.0 {
            None
        } else {
            Some(($point - $start).dot($normal) / denom)
        }
    }};
}

//-- 2D: line-line intersection ------------------------------------------------------------------------------------------------

/// Calculate the point at which 2 lines cross
///
/// The lines may not be parallel, see [`try_lines_intersection_point`] for a checked version.
#[must_use]
pub fn lines_intersection_point(first: Line2D, second: Line2D) -> Vec2 {
    let normal = first.normal();
    let t = (first.point - second.point).dot(normal) / second.direction.dot(normal);
    second.point_at(t)
}

/// Calculate the point at which 2 lines cross, or an error when they are parallel
pub fn try_lines_intersection_point(first: Line2D, second: Line2D) -> Result<Vec2> {
    match crossing_parameter!(second.point, second.direction, first.point, first.normal()) {
        Some(t) => Ok(second.point_at(t)),
        None => {
            kestrel_logging::log_error!(LOG_CAT, try_lines_intersection_point, "Lines {first} and {second} are parallel");
            Err(Error::DegenerateInput("parallel lines"))
        },
    }
}

impl Intersect for Line2D {
    type Output = Vec2;

    fn intersect(self, rhs: Line2D) -> Self::Output {
        lines_intersection_point(self, rhs)
    }
}

//-- 2D: ray-line intersection -------------------------------------------------------------------------------------------------

impl Intersect<Line2D> for Ray2D {
    type Output = bool;

    fn intersect(self, rhs: Line2D) -> Self::Output {
        crossing_parameter!(self.vertex, self.direction, rhs.point, rhs.normal())
            .map_or(false, |t| t >= 0.0)
    }
}
symmetric_intersect!(Ray2D, Line2D);

//-- 2D: segment-line intersection ---------------------------------------------------------------------------------------------

impl Intersect<Line2D> for Segment2D {
    type Output = bool;

    fn intersect(self, rhs: Line2D) -> Self::Output {
        crossing_parameter!(self.first, self.direction(), rhs.point, rhs.normal())
            .map_or(false, |t| (0.0..=1.0).contains(&t))
    }
}
symmetric_intersect!(Segment2D, Line2D);

//-- 3D: line-plane intersection -----------------------------------------------------------------------------------------------

/// Calculate the point at which a line crosses a plane
///
/// The line may not be parallel to the plane, see [`try_line_plane_intersection_point`] for a checked version.
#[must_use]
pub fn line_plane_intersection_point(line: Line3D, plane: Plane) -> Vec3 {
    config::enforce_unit_direction("plane.normal", plane.normal.len_sq());
    let t = (plane.point - line.point).dot(plane.normal) / line.direction.dot(plane.normal);
    line.point_at(t)
}

/// Calculate the point at which a line crosses a plane, or an error when the line is parallel to the plane
pub fn try_line_plane_intersection_point(line: Line3D, plane: Plane) -> Result<Vec3> {
    config::enforce_unit_direction("plane.normal", plane.normal.len_sq());
    match crossing_parameter!(line.point, line.direction, plane.point, plane.normal) {
        Some(t) => Ok(line.point_at(t)),
        None => {
            kestrel_logging::log_error!(LOG_CAT, try_line_plane_intersection_point, "Line {line} is parallel to plane {plane}");
            Err(Error::DegenerateInput("line parallel to plane"))
        },
    }
}

impl Intersect<Plane> for Line3D {
    type Output = Vec3;

    fn intersect(self, rhs: Plane) -> Self::Output {
        line_plane_intersection_point(self, rhs)
    }
}
symmetric_intersect!(Line3D, Plane);

//-- 3D: ray-plane intersection ------------------------------------------------------------------------------------------------

impl Intersect<Plane> for Ray3D {
    type Output = bool;

    fn intersect(self, rhs: Plane) -> Self::Output {
        crossing_parameter!(self.vertex, self.direction, rhs.point, rhs.normal)
            .map_or(false, |t| t >= 0.0)
    }
}
symmetric_intersect!(Ray3D, Plane);

//-- 3D: segment-plane intersection --------------------------------------------------------------------------------------------

impl Intersect<Plane> for Segment3D {
    type Output = bool;

    fn intersect(self, rhs: Plane) -> Self::Output {
        crossing_parameter!(self.first, self.direction(), rhs.point, rhs.normal)
            .map_or(false, |t| (0.0..=1.0).contains(&t))
    }
}
symmetric_intersect!(Segment3D, Plane);

//-- Ray hits ------------------------------------------------------------------------------------------------------------------

impl IntersectWithRay<Ray2D> for Line2D {
    fn intersect_ray(&self, ray: &Ray2D) -> Option<f32> {
        crossing_parameter!(ray.vertex, ray.direction, self.point, self.normal())
            .filter(|&t| t >= 0.0)
    }
}

impl IntersectWithRay<Ray3D> for Plane {
    fn intersect_ray(&self, ray: &Ray3D) -> Option<f32> {
        config::enforce_unit_direction("plane.normal", self.normal.len_sq());
        crossing_parameter!(ray.vertex, ray.direction, self.point, self.normal)
            .filter(|&t| t >= 0.0)
    }
}
