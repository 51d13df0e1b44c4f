use crate::*;

const LOG_CAT : kestrel_logging::LogCategory = kestrel_logging::LogCategory::new_with_sub("Math", "Intersections");

pub trait Intersect<Rhs = Self> {
    type Output;

    fn intersect(self, rhs: Rhs) -> Self::Output;
}

/// Get the parameter of the first point at which a ray enters a shape, `None` if the ray misses it
///
/// A ray starting inside of a solid shape hits it at `t = 0`.
pub trait IntersectWithRay<R> {
    fn intersect_ray(&self, ray: &R) -> Option<f32>;
}

/// Implement `Intersect<$a> for $b` by swapping the arguments of `Intersect<$b> for $a`
macro_rules! symmetric_intersect {
    ($a:ty, $b:ty) => {
        impl Intersect<$a> for $b {
            type Output = <$a as Intersect<$b>>::Output;

            #[inline]
            fn intersect(self, rhs: $a) -> Self::Output {
                <$a as Intersect<$b>>::intersect(rhs, self)
            }
        }
    };
}

/// Quadratic in `t` with its roots where `start + direction * t` crosses a circle or sphere
///
/// `v` is `start - center`, as the dot products with `direction` and itself.
#[inline]
fn crossing_quadratic(dir_dot_v: f32, v_len_sq: f32, dir_len_sq: f32, radius_sq: f32) -> QuadraticFunction {
    QuadraticFunction::new(2.0 * dir_dot_v / dir_len_sq, (v_len_sq - radius_sq) / dir_len_sq)
}

/// First non-negative root, clamped to 0 when the start lies between both roots
#[inline]
fn first_hit(roots: Option<(f32, f32)>) -> Option<f32> {
    roots.and_then(|(near, far)| if far >= 0.0 { Some(near.max(0.0)) } else { None })
}

/// Classify an offset `t` of a shape's center along a unit normal, for a shape with radius `radius`
#[inline]
fn classify_offset(t: f32, radius: f32) -> PlaneClassification {
    if t < -radius {
        PlaneClassification::Right
    } else if t > radius {
        PlaneClassification::Left
    } else {
        PlaneClassification::Intersects
    }
}

mod circle_intersections;
mod sphere_intersections;
mod line_intersections;

pub use line_intersections::*;

#[cfg(test)]
mod test;
