/// Defines a type that can check if it's approximately equal to another value
pub trait ApproxEq : Sized {
    /// Default epsilon used by [`ApproxEq::is_approx_eq`]
    const EPSILON : f32 = f32::EPSILON;

    /// Check if `self` is approximately equal to another value, given an `epsilon`
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool;

    /// Check if `self` is approximately equal to another, using the machine epsilon
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, Self::EPSILON)
    }
}

impl ApproxEq for f32 {
    #[inline]
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        (self - rhs).abs() <= epsilon
    }
}

/// Defines a type that can check if it's approximately equal to it's zero identity
pub trait ApproxZero : Sized {
    /// Check if `self` is approximately equal to 0, given an `epsilon`
    fn is_close_to_zero(self, epsilon: f32) -> bool;

    /// Check if `self` is approximately equal to 0, using the machine epsilon
    fn is_zero(self) -> bool {
        self.is_close_to_zero(f32::EPSILON)
    }
}

impl ApproxZero for f32 {
    #[inline]
    fn is_close_to_zero(self, epsilon: f32) -> bool {
        self.abs() <= epsilon
    }
}

/// Calculate `val * val`
#[inline(always)]
#[must_use]
pub fn sqr(val: f32) -> f32 {
    val * val
}

/// Get the minimum of 3 values
#[inline]
#[must_use]
pub fn min3(a: f32, b: f32, c: f32) -> f32 {
    a.min(b).min(c)
}

/// Get the maximum of 3 values
#[inline]
#[must_use]
pub fn max3(a: f32, b: f32, c: f32) -> f32 {
    a.max(b).max(c)
}

/// Get the index (0, 1 or 2) of the largest of 3 values, the first index wins on ties
#[must_use]
pub fn index_of_max3(a: f32, b: f32, c: f32) -> usize {
    if a >= b && a >= c {
        0
    } else if b >= c {
        1
    } else {
        2
    }
}

/// Get the index (0, 1 or 2) of the smallest of 3 values, the first index wins on ties
#[must_use]
pub fn index_of_min3(a: f32, b: f32, c: f32) -> usize {
    if a <= b && a <= c {
        0
    } else if b <= c {
        1
    } else {
        2
    }
}

/// Linearly interpolate between `a` and `b`
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Check if interval `[a0, a1]` overlaps interval `[b0, b1]`, the bounds of each interval may be given in any order
#[must_use]
pub fn intervals_overlap(a0: f32, a1: f32, b0: f32, b1: f32) -> bool {
    let half_a = (a1 - a0).abs() * 0.5;
    let half_b = (b1 - b0).abs() * 0.5;
    let center_a = a0.min(a1) + half_a;
    let center_b = b0.min(b1) + half_b;
    (center_a - center_b).abs() <= half_a + half_b
}

/// Get the `(scale, translate)` pair so that `scale * t + translate` maps `[from0, from1]` onto `[to0, to1]`
///
/// `from0` and `from1` must differ
#[must_use]
pub fn interval_mapping_scale_translate(from0: f32, from1: f32, to0: f32, to1: f32) -> (f32, f32) {
    let scale = (to1 - to0) / (from1 - from0);
    let translate = to0 - scale * from0;
    (scale, translate)
}

/// Map `t` from `[from0, from1]` onto `[to0, to1]`
#[must_use]
pub fn map_interval(t: f32, from0: f32, from1: f32, to0: f32, to1: f32) -> f32 {
    let k = (to1 - to0) / (from1 - from0);
    (t - from0) * k + to0
}

/// Map `t` from `[from0, from1]` onto `[to0, to1]`, keeping the result inside the target interval
#[must_use]
pub fn map_interval_clamped(t: f32, from0: f32, from1: f32, to0: f32, to1: f32) -> f32 {
    map_interval(t, from0, from1, to0, to1).clamp(to0.min(to1), to0.max(to1))
}
