//! Newtypes for the two coordinate spaces of a maze.
//!
//! Base dimensions count logical cells, grid dimensions count every row/column of the doubled
//! grid including the wall rows and columns.

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

impl Height {
    /// Rows in the doubled grid for this many logical rows.
    #[inline]
    pub fn grid_rows(self) -> RowsCount {
        RowsCount(self.0 * 2 + 1)
    }
}

impl Width {
    /// Columns in the doubled grid for this many logical columns.
    #[inline]
    pub fn grid_columns(self) -> ColumnsCount {
        ColumnsCount(self.0 * 2 + 1)
    }
}

impl RowsCount {
    #[inline]
    pub fn base_height(self) -> Height {
        Height(self.0 / 2)
    }
}

impl ColumnsCount {
    #[inline]
    pub fn base_width(self) -> Width {
        Width(self.0 / 2)
    }
}
