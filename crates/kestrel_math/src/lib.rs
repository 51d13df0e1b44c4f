//! Single precision math for small dimensions, built around closed-form intersection tests
//!
//! The library covers:
//! - vectors, square matrices of order 2 to 4, complex numbers and quaternions
//! - 2D and 3D primitives: circles, spheres, lines, rays, segments, planes, cones, cylinders, (oriented) rects and boxes
//! - intersection, containment and distance queries between those primitives, see [`Intersect`]
//!
//! Directions and normals are expected to be unit length, which can be validated at runtime with [`config::set_precondition_mode`].

use static_assertions::const_assert_eq;

mod utils;

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

mod error;
pub use error::*;

pub mod config;

mod vec;
pub use vec::*;

mod mat;
pub use mat::*;

mod complex;
pub use complex::*;

mod quat;
pub use quat::*;

mod quadratic;
pub use quadratic::*;

mod circle;
pub use circle::*;

mod sphere;
pub use sphere::*;

mod plane;
pub use plane::*;

mod line;
pub use line::*;

mod ray;
pub use ray::*;

mod cone;
pub use cone::*;

mod cylinder;
pub use cylinder::*;

mod rect;
pub use rect::*;

mod aabb;
pub use aabb::*;

mod distance;
pub use distance::*;

mod barycentric;
pub use barycentric::*;

mod transform;

mod intersections;
pub use intersections::*;

// Layouts need to stay tightly packed, so they can be handed to graphics APIs as is
const_assert_eq!(core::mem::size_of::<Vec2>(), 8);
const_assert_eq!(core::mem::size_of::<Vec3>(), 12);
const_assert_eq!(core::mem::size_of::<Vec4>(), 16);
const_assert_eq!(core::mem::size_of::<Mat2>(), 16);
const_assert_eq!(core::mem::size_of::<Mat3>(), 36);
const_assert_eq!(core::mem::size_of::<Mat4>(), 64);
const_assert_eq!(core::mem::size_of::<Complex>(), 8);
const_assert_eq!(core::mem::size_of::<Quat>(), 16);
