use crate::*;
use super::*;

impl Sphere {
    fn crossing_quadratic(self, start: Vec3, direction: Vec3) -> QuadraticFunction {
        let v = start - self.center;
        crossing_quadratic(direction.dot(v), v.len_sq(), direction.len_sq(), self.radius_sq())
    }

    /// Signed offset from the center to the plane, along the plane's normal
    fn plane_offset(self, plane: Plane) -> f32 {
        config::enforce_unit_direction("plane.normal", plane.normal.len_sq());
        (plane.point - self.center).dot(plane.normal)
    }

    /// Classify the sphere relative to a plane
    #[must_use]
    pub fn classify_plane(self, plane: Plane) -> PlaneClassification {
        classify_offset(self.plane_offset(plane), self.radius)
    }
}

//-- 3D: sphere-line intersection ----------------------------------------------------------------------------------------------

impl Intersect<Line3D> for Sphere {
    type Output = Option<Segment3D>;

    /// Calculate the chord the line cuts out of the sphere, `None` if the line misses it
    fn intersect(self, rhs: Line3D) -> Self::Output {
        self.crossing_quadratic(rhs.point, rhs.direction)
            .solve_equality()
            .map(|(t0, t1)| Segment3D::new(rhs.point_at(t0), rhs.point_at(t1)))
    }
}
symmetric_intersect!(Sphere, Line3D);

//-- 3D: sphere-ray intersection -----------------------------------------------------------------------------------------------

impl Intersect<Ray3D> for Sphere {
    type Output = bool;

    fn intersect(self, rhs: Ray3D) -> Self::Output {
        self.crossing_quadratic(rhs.vertex, rhs.direction)
            .inequality_less_has_roots_on_interval(0.0, f32::MAX)
    }
}
symmetric_intersect!(Sphere, Ray3D);

//-- 3D: sphere-segment intersection -------------------------------------------------------------------------------------------

impl Intersect<Segment3D> for Sphere {
    type Output = bool;

    fn intersect(self, rhs: Segment3D) -> Self::Output {
        self.crossing_quadratic(rhs.first, rhs.direction())
            .inequality_less_has_roots_on_interval(0.0, 1.0)
    }
}
symmetric_intersect!(Sphere, Segment3D);

//-- 3D: sphere-plane intersection ---------------------------------------------------------------------------------------------

impl Intersect<Plane> for Sphere {
    type Output = Option<Circle3D>;

    /// Calculate the circle along which the plane cuts the sphere, `None` if the plane misses it
    fn intersect(self, rhs: Plane) -> Self::Output {
        let t = self.plane_offset(rhs);
        let radius_sq = self.radius_sq() - sqr(t);
        if radius_sq < 0.0 {
            None
        } else {
            Some(Circle3D::new(self.center + rhs.normal * t, radius_sq.sqrt(), rhs.normal))
        }
    }
}
symmetric_intersect!(Sphere, Plane);

//-- 3D: sphere-cone intersection ----------------------------------------------------------------------------------------------

impl Intersect<Cone> for Sphere {
    type Output = bool;

    fn intersect(self, rhs: Cone) -> Self::Output {
        config::enforce_unit_direction("cone.direction", rhs.direction.len_sq());

        let v = self.center - rhs.vertex;
        let d = v.dot(rhs.direction);
        let t0 = rhs.start_height.max(d - self.radius);
        let t1 = rhs.end_height.min(d + self.radius);
        if t0 > t1 {
            return false;
        }

        // Distance from the center to the axis
        let l = (v.len_sq() - sqr(d)).max(0.0).sqrt();
        let k = rhs.radius_coefficient;
        // The cone is wide enough to swallow the center somewhere in [t0, t1]
        if t1 > l / k {
            return true;
        }

        let a = sqr(k) + 1.0;
        let p = -2.0 * (l * k + d) / a;
        let q = (sqr(l) - self.radius_sq() + sqr(d)) / a;
        QuadraticFunction::new(p, q).inequality_less_has_roots_on_interval(t0, t1)
    }
}
symmetric_intersect!(Sphere, Cone);

//-- 3D: sphere-cylinder intersection ------------------------------------------------------------------------------------------

impl Intersect<Cylinder> for Sphere {
    type Output = bool;

    fn intersect(self, rhs: Cylinder) -> Self::Output {
        config::enforce_unit_direction("cylinder.direction", rhs.direction.len_sq());

        let v = self.center - rhs.position;
        let d = v.dot(rhs.direction);
        let t0 = (d - self.radius).max(0.0);
        let t1 = (d + self.radius).min(rhs.height);
        if t1 < t0 {
            return false;
        }

        // Squared radius of the sphere's cross-section at the closest height inside [t0, t1]
        let f_sq = if d > t1 {
            self.radius_sq() - sqr(t1 - d)
        } else if d < t0 {
            self.radius_sq() - sqr(t0 - d)
        } else {
            self.radius_sq()
        };

        let l_sq = v.len_sq() - sqr(d);
        let r_sq = rhs.radius_sq();
        let a = l_sq - r_sq - f_sq;
        a < 0.0 || sqr(a) <= 4.0 * r_sq * f_sq
    }
}
symmetric_intersect!(Sphere, Cylinder);

//-- 3D: sphere-box intersection -----------------------------------------------------------------------------------------------

impl Intersect<OrientedBox> for Sphere {
    type Output = bool;

    fn intersect(self, rhs: OrientedBox) -> Self::Output {
        rhs.distance_to_point_sq(self.center) <= self.radius_sq()
    }
}
symmetric_intersect!(Sphere, OrientedBox);

impl Intersect<BoundingBox> for Sphere {
    type Output = bool;

    fn intersect(self, rhs: BoundingBox) -> Self::Output {
        rhs.distance_to_point_sq(self.center) <= self.radius_sq()
    }
}
symmetric_intersect!(Sphere, BoundingBox);

//-- 3D: ray-sphere hit --------------------------------------------------------------------------------------------------------

impl IntersectWithRay<Ray3D> for Sphere {
    fn intersect_ray(&self, ray: &Ray3D) -> Option<f32> {
        first_hit(self.crossing_quadratic(ray.vertex, ray.direction).solve_equality())
    }
}
