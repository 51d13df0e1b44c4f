use core::ops::*;
use crate::numeric::*;

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;

mod vec4;
pub use vec4::*;

macro_rules! generic_vec {
    {
        $docs:meta;
        $name:ident,
        $elem_cnt:literal,
        $($comp:ident => $idx:tt),+
    } => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug, Default)]
        #[repr(C)]
        pub struct $name {
            $(pub $comp: f32,)+
        }

        impl $name {
            /// Vector with all components set to 0
            pub const ZERO : Self = Self { $($comp: 0.0),+ };

            /// Create a new vector
            #[inline(always)]
            #[must_use]
            pub const fn new($($comp: f32),+) -> Self {
                Self { $($comp),+ }
            }

            /// Create a vector with all components set to `val`
            #[inline(always)]
            #[must_use]
            pub const fn set(val: f32) -> Self {
                Self { $($comp: val),+ }
            }

            /// Create a vector from an array
            #[inline(always)]
            #[must_use]
            pub const fn from_array(arr: [f32; $elem_cnt]) -> Self {
                Self { $($comp: arr[$idx]),+ }
            }

            /// Get the content of the vector as an array
            #[inline(always)]
            #[must_use]
            pub const fn to_array(self) -> [f32; $elem_cnt] {
                [$(self.$comp),+]
            }

        //--------------------------------------------------------------

            /// Calculate the dot product of 2 vectors
            #[inline]
            #[must_use]
            pub fn dot(self, rhs: Self) -> f32 {
                crate::utils::strip_plus!($(+ self.$comp * rhs.$comp)+)
            }

            /// Calculate the square length of the vector
            #[inline]
            #[must_use]
            pub fn len_sq(self) -> f32 {
                self.dot(self)
            }

            /// Calculate the length of the vector
            #[inline]
            #[must_use]
            pub fn len(self) -> f32 {
                self.len_sq().sqrt()
            }

            /// Calculate the square distance between 2 vectors
            #[inline]
            #[must_use]
            pub fn dist_sq(self, other: Self) -> f32 {
                (other - self).len_sq()
            }

            /// Calculate the distance between 2 vectors
            #[inline]
            #[must_use]
            pub fn dist(self, other: Self) -> f32 {
                self.dist_sq(other).sqrt()
            }

            /// Normalize the vector, a vector with a length of 0 is returned as is
            #[must_use]
            pub fn normalize(self) -> Self {
                let len_sq = self.len_sq();
                if len_sq.is_zero() {
                    self
                } else {
                    self / len_sq.sqrt()
                }
            }

            /// Check if the vector is close to being normalized, using a given epsilon, which defines the max difference `len_sq` can be relative to 1
            #[must_use]
            pub fn is_normalized(self, epsilon: f32) -> bool {
                self.len_sq().is_close_to(1.0, epsilon)
            }

            /// Get the direction and length of the vector
            #[must_use]
            pub fn dir_and_len(self) -> (Self, f32) {
                let len = self.len();
                (self / len, len)
            }

            /// Linearly interpolate between 2 vectors
            #[inline]
            #[must_use]
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self + (other - self) * t
            }

            /// Component-wise minimum
            #[must_use]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp.min(rhs.$comp)),+ }
            }

            /// Component-wise maximum
            #[must_use]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp.max(rhs.$comp)),+ }
            }

            /// Component-wise absolute value
            #[must_use]
            pub fn abs(self) -> Self {
                Self { $($comp: self.$comp.abs()),+ }
            }
        }

        impl Index<usize> for $name {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$comp,)+
                    _ => panic!(concat!("index out of range for ", stringify!($name), ": {}"), index),
                }
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp + rhs.$comp),+ }
            }
        }

        impl AddAssign for $name {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$comp += rhs.$comp;)+
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp - rhs.$comp),+ }
            }
        }

        impl SubAssign for $name {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$comp -= rhs.$comp;)+
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp * rhs.$comp),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: f32) -> Self {
                Self { $($comp: self.$comp * rhs),+ }
            }
        }

        impl MulAssign<f32> for $name {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$comp *= rhs;)+
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;

            #[inline(always)]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl Div for $name {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp / rhs.$comp),+ }
            }
        }

        impl Div<f32> for $name {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: f32) -> Self {
                Self { $($comp: self.$comp / rhs),+ }
            }
        }

        impl DivAssign<f32> for $name {
            #[inline(always)]
            fn div_assign(&mut self, rhs: f32) {
                $(self.$comp /= rhs;)+
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self { $($comp: -self.$comp),+ }
            }
        }

        //--------------------------------------------------------------

        impl ApproxEq for $name {
            fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
                $(self.$comp.is_close_to(rhs.$comp, epsilon))&&+
            }
        }

        impl ApproxZero for $name {
            fn is_close_to_zero(self, epsilon: f32) -> bool {
                $(self.$comp.is_close_to_zero(epsilon))&&+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl From<[f32; $elem_cnt]> for $name {
            fn from(arr: [f32; $elem_cnt]) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for [f32; $elem_cnt] {
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }
    };
}

generic_vec!{ doc = "2D vector"; Vec2, 2, x => 0, y => 1 }
generic_vec!{ doc = "3D vector"; Vec3, 3, x => 0, y => 1, z => 2 }
generic_vec!{ doc = "4D vector, mostly used as a homogeneous 3D coordinate"; Vec4, 4, x => 0, y => 1, z => 2, w => 3 }
