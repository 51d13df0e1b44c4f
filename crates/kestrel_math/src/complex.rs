use core::ops::*;
use std::fmt::Display;
use crate::*;

/// Complex number, used as a 2D rotation when it has a length of 1
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Complex {
    /// Real part
    pub x : f32,
    /// Imaginary part
    pub y : f32,
}

impl Complex {
    /// Real unit
    pub const ONE : Self = Self { x: 1.0, y: 0.0 };
    /// Imaginary unit
    pub const I : Self = Self { x: 0.0, y: 1.0 };
    /// Complex number that rotates nothing
    pub const NO_ROTATION : Self = Self::ONE;

    /// Create a new complex number
    #[inline(always)]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a complex number of length 1 with the given argument
    #[must_use]
    pub fn from_polar(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos, y: sin }
    }

    /// Get the square length of the complex number
    #[inline]
    #[must_use]
    pub fn len_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Get the length of the complex number
    #[inline]
    #[must_use]
    pub fn len(self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Get the argument (rotation angle) of the complex number
    #[inline]
    #[must_use]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Get the conjugate of the complex number
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self { x: self.x, y: -self.y }
    }

    /// Rotate a vector by the complex number
    #[inline]
    #[must_use]
    pub fn rotate(self, v: Vec2) -> Vec2 {
        Vec2 { x: self.x * v.x - self.y * v.y,
               y: self.y * v.x + self.x * v.y }
    }
}

impl Default for Complex {
    fn default() -> Self {
        Self::NO_ROTATION
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { x: self.x * rhs.x - self.y * rhs.y,
               y: self.x * rhs.y + self.y * rhs.x }
    }
}

impl Div for Complex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let len_sq = rhs.len_sq();
        Self { x: (self.x * rhs.x + self.y * rhs.y) / len_sq,
               y: (self.y * rhs.x - self.x * rhs.y) / len_sq }
    }
}

impl ApproxEq for Complex {
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.x.is_close_to(rhs.x, epsilon) && self.y.is_close_to(rhs.y, epsilon)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} + {}i", self.x, self.y))
    }
}
