use crate::bitmask::Bitmask;

/// Size of a grid. Bit `b` of a packed grid sits in bit-row `b / columns` and
/// column `b % columns`; bit-row 0 is the last line of the textual grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    #[inline(always)]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    #[inline(always)]
    pub const fn cell_index(&self, bit_row: usize, column: usize) -> usize {
        self.columns * bit_row + column
    }

    /// The bit-row holding the given 0-based line of the textual grid, if the
    /// grid has that line.
    #[inline(always)]
    pub const fn bit_row_of_line(&self, line: usize) -> Option<usize> {
        if line < self.rows { Some(self.rows - 1 - line) } else { None }
    }

    pub const fn is_last_row(&self, bit_row: usize) -> bool {
        bit_row + 1 == self.rows
    }

    pub const fn is_last_column(&self, column: usize) -> bool {
        column + 1 == self.columns
    }
}

/// One independent puzzle: a grid size and the cells holding trees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub dimensions: Dimensions,
    pub trees: Bitmask,
}

impl TestCase {
    pub fn new(rows: usize, columns: usize, trees: Bitmask) -> Self {
        Self { dimensions: Dimensions::new(rows, columns), trees }
    }

    /// Whether the cell at the given textual line and column holds a tree.
    /// Cells outside the grid never hold a tree.
    pub fn is_tree(&self, line: usize, column: usize) -> bool {
        match self.dimensions.bit_row_of_line(line) {
            Some(bit_row) if column < self.dimensions.columns => {
                let msb_column = self.dimensions.columns - 1 - column;
                self.trees.contains(self.dimensions.cell_index(bit_row, msb_column))
            }
            _ => false,
        }
    }
}

/// Characters used for tree and empty cells in the textual grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markers {
    pub tree: char,
    pub empty: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self { tree: '^', empty: '.' }
    }
}
