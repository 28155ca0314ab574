use log::trace;

use crate::bitmask::Bitmask;
use crate::error::Result;
use crate::grid::Dimensions;
use crate::position::{column_of, row_of};

/// The block of cells around a single tree: the bit itself widened by one
/// cell in each direction, clipped at the grid edges.
///
/// The vertical shifts apply to the already-widened row, so the block is
/// the full 3x3 square around the bit wherever the grid allows it.
pub fn expand(dimensions: Dimensions, bit: &Bitmask) -> Result<Bitmask> {
    let row = row_of(dimensions, bit)?;
    let column = column_of(dimensions, bit)?;

    let mut block = bit.clone();
    if !dimensions.is_last_column(column) {
        block |= &block << 1;
    }
    if column != 0 {
        block |= &block >> 1;
    }
    if !dimensions.is_last_row(row) {
        block |= &block << dimensions.columns;
    }
    if row != 0 {
        block |= &block >> dimensions.columns;
    }

    trace!("expanded bit at row {row}, column {column} to {block:b}");
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    fn expand_bits(rows: usize, columns: usize, bit: u32) -> Bitmask {
        expand(Dimensions::new(rows, columns), &Bitmask::from(bit)).unwrap()
    }

    #[test]
    fn test_centre_covers_whole_square() {
        assert_eq!(expand_bits(3, 3, 0b000_010_000), Bitmask::from(0b111_111_111u32));
    }

    #[test]
    fn test_corners_are_clipped() {
        assert_eq!(expand_bits(3, 3, 0b000_000_001), Bitmask::from(0b000_011_011u32));
        assert_eq!(expand_bits(3, 3, 0b100_000_000), Bitmask::from(0b110_110_000u32));
        assert_eq!(expand_bits(2, 2, 0b1000), Bitmask::from(0b1111u32));
    }

    #[test]
    fn test_edges_do_not_wrap_between_rows() {
        // Right edge of bit-row 1 in a 3x4 grid must not leak into bit-row 2's
        // low column or bit-row 0's high column.
        assert_eq!(expand_bits(3, 4, 0b0000_0001_0000), Bitmask::from(0b0011_0011_0011u32));
        assert_eq!(expand_bits(3, 4, 0b0000_1000_0000), Bitmask::from(0b1100_1100_1100u32));
    }

    #[test]
    fn test_single_row_and_column_grids() {
        assert_eq!(expand_bits(1, 4, 0b0100), Bitmask::from(0b1110u32));
        assert_eq!(expand_bits(4, 1, 0b0100), Bitmask::from(0b1110u32));
    }

    #[test]
    fn test_rejects_non_single_bits() {
        let dims = Dimensions::new(3, 3);
        assert!(matches!(expand(dims, &Bitmask::empty()), Err(GridError::NotSingleBit(_))));
        assert!(matches!(expand(dims, &Bitmask::from(0b110u32)), Err(GridError::NotSingleBit(_))));
    }
}
