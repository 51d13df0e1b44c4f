use crate::*;

impl Mat2 {
    /// Create a matrix from its rows
    #[must_use]
    pub fn from_rows(row0: Vec2, row1: Vec2) -> Self {
        Self::of([row0.x, row0.y,
                  row1.x, row1.y])
    }

    /// Create a matrix from its columns
    #[must_use]
    pub fn from_columns(column0: Vec2, column1: Vec2) -> Self {
        Self::of([column0.x, column1.x,
                  column0.y, column1.y])
    }

    /// Get the single entry left after removing `row` and `column`
    #[inline]
    #[must_use]
    pub fn minor(self, row: usize, column: usize) -> f32 {
        debug_assert!(row < 2);
        debug_assert!(column < 2);
        self.get(1 - row, 1 - column)
    }

    /// Get the cofactor at `row` and `column`
    #[inline]
    #[must_use]
    pub fn cofactor(self, row: usize, column: usize) -> f32 {
        let minor = self.minor(row, column);
        if (row + column) % 2 == 0 { minor } else { -minor }
    }

    /// Calculate the determinant
    #[inline]
    #[must_use]
    pub fn determinant(self) -> f32 {
        self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0)
    }
}
