/// Monic quadratic function `f(x) = x^2 + p*x + q`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuadraticFunction {
    /// Coefficient of `x`
    pub p : f32,
    /// Constant term
    pub q : f32,
}

impl QuadraticFunction {
    /// Create a new quadratic function
    #[inline]
    #[must_use]
    pub const fn new(p: f32, q: f32) -> Self {
        Self { p, q }
    }

    /// Evaluate the function at `x`
    #[inline]
    #[must_use]
    pub fn evaluate(self, x: f32) -> f32 {
        x * x + self.p * x + self.q
    }

    /// Get the x-coordinate of the extremum and a quarter of the discriminant
    #[inline]
    fn vertex_and_discriminant(self) -> (f32, f32) {
        let b = -self.p * 0.5;
        (b, b * b - self.q)
    }

    /// Solve `f(x) = 0`, the roots are returned in ascending order, a double root is returned twice
    #[must_use]
    pub fn solve_equality(self) -> Option<(f32, f32)> {
        let (b, d) = self.vertex_and_discriminant();
        if d < 0.0 {
            return None;
        }
        let sqrt_d = d.sqrt();
        Some((b - sqrt_d, b + sqrt_d))
    }

    /// Check if `f(x) <= 0` for any `x` in `[t0, t1]`, with `t0 <= t1`
    ///
    /// `t1` may be `f32::MAX` to test a half-open interval, the function is never evaluated at the bounds.
    #[must_use]
    pub fn inequality_less_has_roots_on_interval(self, t0: f32, t1: f32) -> bool {
        debug_assert!(t0 <= t1);
        let (b, d) = self.vertex_and_discriminant();
        if d < 0.0 {
            return false;
        }
        // The negative region is [b - sqrt(d), b + sqrt(d)], compare squared distances to avoid the root
        let diff1 = b - t1;
        let reaches_t1 = diff1 < 0.0 || d >= diff1 * diff1;
        let diff0 = t0 - b;
        let reaches_t0 = diff0 < 0.0 || d >= diff0 * diff0;
        reaches_t1 && reaches_t0
    }
}
