use core::ops::*;
use kestrel_logging::LogCategory;
use crate::*;

mod mat2;
pub use mat2::*;

mod mat3;
pub use mat3::*;

mod mat4;
pub use mat4::*;

const LOG_CAT : LogCategory = LogCategory::new_with_sub("Math", "Matrix");

macro_rules! generic_matrix {
    {$docs:meta; $name:ident, $n:literal, $vec:ident} => {
        #[$docs]
        ///
        /// Matrices are immutable values, every operation returns a new matrix.
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name {
            vals : [f32; $n * $n]
        }

        impl $name {
            /// Number of rows and columns
            pub const ORDER : usize = $n;

            /// Create a matrix by calling `f(row, column)` for each entry
            #[must_use]
            pub fn create<F: Fn(usize, usize) -> f32>(f: F) -> Self {
                Self { vals: core::array::from_fn(|idx| f(idx / $n, idx % $n)) }
            }

            /// Create a matrix from its entries, in row-major order
            #[inline(always)]
            #[must_use]
            pub const fn of(vals: [f32; $n * $n]) -> Self {
                Self { vals }
            }

            /// Get the entries of the matrix, in row-major order
            #[inline(always)]
            #[must_use]
            pub const fn to_array(self) -> [f32; $n * $n] {
                self.vals
            }

            /// Get the entry at `row` and `column`
            #[inline]
            #[must_use]
            pub fn get(&self, row: usize, column: usize) -> f32 {
                debug_assert!(row < $n);
                debug_assert!(column < $n);
                self.vals[row * $n + column]
            }

            /// Create an identity matrix
            #[must_use]
            pub fn identity() -> Self {
                Self::create(|i, j| if i == j { 1.0 } else { 0.0 })
            }

            /// Get a row
            #[must_use]
            pub fn row(self, index: usize) -> $vec {
                debug_assert!(index < $n);
                $vec::from_array(core::array::from_fn(|j| self.get(index, j)))
            }

            /// Get a column
            #[must_use]
            pub fn column(self, index: usize) -> $vec {
                debug_assert!(index < $n);
                $vec::from_array(core::array::from_fn(|i| self.get(i, index)))
            }

            /// Get the diagonal
            #[must_use]
            pub fn diagonal(self) -> $vec {
                $vec::from_array(core::array::from_fn(|i| self.get(i, i)))
            }

            /// Calculate the trace
            #[must_use]
            pub fn trace(self) -> f32 {
                (0..$n).map(|i| self.get(i, i)).sum()
            }

            /// Transpose the matrix
            #[must_use]
            pub fn transpose(self) -> Self {
                Self::create(|i, j| self.get(j, i))
            }

            /// Calculate the inverse, the matrix needs to have a non-zero determinant
            ///
            /// Entry `(i, j)` is the cofactor of the transposed matrix at `(i, j)`, divided by the determinant.
            #[must_use]
            pub fn inverse(self) -> Self {
                let det = self.determinant();
                debug_assert!(det != 0.0, "cannot invert a matrix with a determinant of 0");
                let transposed = self.transpose();
                Self::create(|i, j| transposed.cofactor(i, j) / det)
            }

            /// Calculate the inverse, or return an error when the matrix is singular
            pub fn try_inverse(self) -> Result<Self> {
                let determinant = self.determinant();
                if determinant == 0.0 || !determinant.is_finite() {
                    kestrel_logging::log_error!(LOG_CAT, Self::try_inverse, "Cannot invert {}, determinant is {determinant}", stringify!($name));
                    return Err(Error::SingularMatrix { determinant });
                }
                let transposed = self.transpose();
                Ok(Self::create(|i, j| transposed.cofactor(i, j) / determinant))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl Index<(usize, usize)> for $name {
            type Output = f32;

            fn index(&self, index: (usize, usize)) -> &Self::Output {
                debug_assert!(index.0 < $n);
                debug_assert!(index.1 < $n);
                &self.vals[index.0 * $n + index.1]
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self { vals: self.vals.map(|val| -val) }
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self { vals: core::array::from_fn(|idx| self.vals[idx] + rhs.vals[idx]) }
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self { vals: core::array::from_fn(|idx| self.vals[idx] - rhs.vals[idx]) }
            }
        }

        impl Mul for $name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                Self::create(|i, j| self.row(i).dot(rhs.column(j)))
            }
        }

        impl Mul<$vec> for $name {
            type Output = $vec;

            /// Multiply a column vector
            fn mul(self, rhs: $vec) -> Self::Output {
                $vec::from_array(core::array::from_fn(|i| self.row(i).dot(rhs)))
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self::Output {
                Self { vals: self.vals.map(|val| val * rhs) }
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;

            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }

        impl Div<f32> for $name {
            type Output = Self;

            fn div(self, rhs: f32) -> Self::Output {
                Self { vals: self.vals.map(|val| val / rhs) }
            }
        }

        //--------------------------------------------------------------

        impl ApproxEq for $name {
            fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
                self.vals.iter().zip(rhs.vals.iter()).all(|(a, b)| a.is_close_to(*b, epsilon))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("[")?;
                for i in 0..$n {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str("[")?;
                    for j in 0..$n {
                        if j != 0 {
                            f.write_str(", ")?;
                        }
                        f.write_fmt(format_args!("{}", self.get(i, j)))?;
                    }
                    f.write_str("]")?;
                }
                f.write_str("]")
            }
        }
    };
}

/// Minor, cofactor and determinant for matrices of order 3 and above, by expanding into the matrix one order lower
macro_rules! cofactor_expansion {
    {$name:ident, $n:literal, $minor:ident} => {
        impl $name {
            /// Get the matrix with `row` and `column` removed
            #[must_use]
            pub fn minor(self, row: usize, column: usize) -> $minor {
                debug_assert!(row < $n);
                debug_assert!(column < $n);
                $minor::create(|i, j| {
                    let src_row = if i < row { i } else { i + 1 };
                    let src_column = if j < column { j } else { j + 1 };
                    self.get(src_row, src_column)
                })
            }

            /// Get the cofactor at `row` and `column`: `(-1)^(row + column) * det(minor(row, column))`
            #[must_use]
            pub fn cofactor(self, row: usize, column: usize) -> f32 {
                let det = self.minor(row, column).determinant();
                if (row + column) % 2 == 0 { det } else { -det }
            }

            /// Calculate the determinant, expanded along the first row
            #[must_use]
            pub fn determinant(self) -> f32 {
                (0..$n).map(|k| self.get(0, k) * self.cofactor(0, k)).sum()
            }
        }
    };
}

generic_matrix!{doc = "2x2 matrix (row-major order)"; Mat2, 2, Vec2}
generic_matrix!{doc = "3x3 matrix (row-major order)"; Mat3, 3, Vec3}
generic_matrix!{doc = "4x4 matrix (row-major order)"; Mat4, 4, Vec4}

cofactor_expansion!{Mat3, 3, Mat2}
cofactor_expansion!{Mat4, 4, Mat3}

#[cfg(test)]
mod tests {
    use crate::*;
    use proptest::prelude::*;

    fn mat4_strategy(bound: f32) -> impl Strategy<Value = Mat4> {
        proptest::array::uniform16(-bound..bound).prop_map(Mat4::of)
    }

    fn mat3_strategy() -> impl Strategy<Value = Mat3> {
        proptest::array::uniform9(-2.0f32..2.0).prop_map(Mat3::of)
    }

    fn mat2_strategy() -> impl Strategy<Value = Mat2> {
        proptest::array::uniform4(-2.0f32..2.0).prop_map(Mat2::of)
    }

    #[test]
    fn create_row_major() {
        let m = Mat3::create(|i, j| (i * 3 + j) as f32);
        assert_eq!(m, Mat3::of([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]));
        assert_eq!(m[(1, 2)], 5.0);
        assert_eq!(m.get(2, 0), 6.0);
        assert_eq!(m.row(1), Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(m.column(1), Vec3::new(1.0, 4.0, 7.0));
        assert_eq!(m.trace(), 12.0);
    }

    #[test]
    fn arithmetic() {
        let a = Mat2::of([1.0, 2.0, 3.0, 4.0]);
        let b = Mat2::of([5.0, 6.0, 7.0, 8.0]);
        assert_eq!(a + b, Mat2::of([6.0, 8.0, 10.0, 12.0]));
        assert_eq!(b - a, Mat2::of([4.0, 4.0, 4.0, 4.0]));
        assert_eq!(-a, Mat2::of([-1.0, -2.0, -3.0, -4.0]));
        assert_eq!(a * b, Mat2::of([19.0, 22.0, 43.0, 50.0]));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a * 2.0 / 2.0, a);
        assert_eq!(a * Vec2::new(1.0, 1.0), Vec2::new(3.0, 7.0));
        assert_eq!(a.transpose(), Mat2::of([1.0, 3.0, 2.0, 4.0]));
    }

    #[test]
    fn identity_is_neutral() {
        let m = Mat4::create(|i, j| (i as f32) - 2.0 * (j as f32));
        assert_eq!(Mat4::identity() * m, m);
        assert_eq!(m * Mat4::identity(), m);
        assert_eq!(Mat4::identity().determinant(), 1.0);
        assert_eq!(Mat4::default(), Mat4::identity());
    }

    #[test]
    fn minors_and_cofactors() {
        let m = Mat3::of([1.0, 2.0, 3.0,
                          0.0, 4.0, 5.0,
                          1.0, 0.0, 6.0]);
        assert_eq!(m.minor(0, 0), Mat2::of([4.0, 5.0, 0.0, 6.0]));
        assert_eq!(m.minor(1, 1), Mat2::of([1.0, 3.0, 1.0, 6.0]));
        assert_eq!(m.cofactor(0, 1), 5.0);
        assert_eq!(m.determinant(), 22.0);
    }

    #[test]
    fn known_inverse() {
        let m = Mat3::of([1.0, 2.0, 3.0,
                          0.0, 1.0, 4.0,
                          5.0, 6.0, 0.0]);
        let expected = Mat3::of([-24.0,  18.0,  5.0,
                                  20.0, -15.0, -4.0,
                                  -5.0,   4.0,  1.0]);
        assert!(m.inverse().is_close_to(expected, 1e-4));
        assert!(m.try_inverse().is_ok());
    }

    #[test]
    fn singular_inverse() {
        let m = Mat4::create(|i, j| (i + j) as f32);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.try_inverse(), Err(Error::SingularMatrix { determinant: 0.0 }));
        assert_eq!(Mat2::of([1.0, 2.0, 2.0, 4.0]).try_inverse(), Err(Error::SingularMatrix { determinant: 0.0 }));
    }

    #[test]
    fn display() {
        assert_eq!(Mat2::of([1.0, 2.0, 3.0, 4.0]).to_string(), "[[1, 2], [3, 4]]");
    }

    proptest! {
        #[test]
        fn inverse_of_mat4(m in mat4_strategy(2.0)) {
            prop_assume!(m.determinant().abs() > 1.0);
            let inv = m.inverse();
            prop_assert!((m * inv).is_close_to(Mat4::identity(), 1e-2));
            prop_assert!((inv * m).is_close_to(Mat4::identity(), 1e-2));
        }

        #[test]
        fn inverse_of_mat3(m in mat3_strategy()) {
            prop_assume!(m.determinant().abs() > 1.0);
            let inv = m.inverse();
            prop_assert!((m * inv).is_close_to(Mat3::identity(), 1e-3));
            prop_assert!((inv * m).is_close_to(Mat3::identity(), 1e-3));
        }

        #[test]
        fn inverse_of_mat2(m in mat2_strategy()) {
            prop_assume!(m.determinant().abs() > 0.5);
            prop_assert!((m * m.inverse()).is_close_to(Mat2::identity(), 1e-3));
        }

        #[test]
        fn determinant_is_multiplicative(a in mat4_strategy(1.0), b in mat4_strategy(1.0)) {
            let expected = a.determinant() * b.determinant();
            let found = (a * b).determinant();
            prop_assert!(found.is_close_to(expected, 1e-3 * (1.0 + expected.abs())));
        }

        #[test]
        fn determinant_of_transpose(m in mat3_strategy()) {
            prop_assert!(m.transpose().determinant().is_close_to(m.determinant(), 1e-3));
        }
    }
}
