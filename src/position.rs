use crate::bitmask::Bitmask;
use crate::error::{GridError, Result};
use crate::grid::Dimensions;

fn require_single_bit(bit: &Bitmask) -> Result<()> {
    if bit.is_single_bit() { Ok(()) } else { Err(GridError::NotSingleBit(bit.clone())) }
}

fn outside_grid(dimensions: Dimensions, bit: &Bitmask) -> GridError {
    GridError::OutsideGrid {
        row_count: dimensions.rows,
        column_count: dimensions.columns,
        bit: bit.clone(),
        bit_len: bit.bit_len(),
    }
}

/// The bit-row of a single-bit value, found by sliding a full-row mask up
/// the grid until it covers the bit.
pub fn row_of(dimensions: Dimensions, bit: &Bitmask) -> Result<usize> {
    require_single_bit(bit)?;

    let row_mask = Bitmask::low_ones(dimensions.columns);
    (0..dimensions.rows)
        .find(|&row| (&(&row_mask << (row * dimensions.columns)) & bit).is_not_empty())
        .ok_or_else(|| outside_grid(dimensions, bit))
}

/// The column of a single-bit value, found by sliding a one-bit-per-row mask
/// across the grid until it covers the bit.
pub fn column_of(dimensions: Dimensions, bit: &Bitmask) -> Result<usize> {
    require_single_bit(bit)?;

    let column_mask = Bitmask::from_iter((0..dimensions.rows).map(|row| row * dimensions.columns));
    (0..dimensions.columns)
        .find(|&column| (&(&column_mask << column) & bit).is_not_empty())
        .ok_or_else(|| outside_grid(dimensions, bit))
}
