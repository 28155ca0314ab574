use log::debug;

use crate::bit_iter::decompose_bits;
use crate::bitmask::Bitmask;
use crate::error::Result;
use crate::expansion::expand;
use crate::grid::Dimensions;

/// Paints the neighbourhood block of every original tree onto the grid.
///
/// This is one pass over the trees in `trees`; cells painted along the way
/// are not expanded in turn, since only the original trees need two
/// neighbours.
pub fn paint(dimensions: Dimensions, trees: &Bitmask) -> Result<Bitmask> {
    if trees.is_empty() {
        return Ok(Bitmask::empty());
    }

    let mut painting = trees.clone();
    for bit in decompose_bits(trees) {
        painting |= expand(dimensions, &bit)?;
    }

    debug!(
        "painted {} cells around {} trees in a {}x{} grid",
        painting.count_ones(),
        trees.count_ones(),
        dimensions.rows,
        dimensions.columns
    );
    Ok(painting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    fn paint_u32(rows: usize, columns: usize, trees: u32) -> Bitmask {
        paint(Dimensions::new(rows, columns), &Bitmask::from(trees)).unwrap()
    }

    #[test]
    fn test_no_trees_paints_nothing() {
        assert_eq!(paint_u32(1, 1, 0), Bitmask::empty());
        assert_eq!(paint_u32(1, 3, 0), Bitmask::empty());
        assert_eq!(paint_u32(3, 1, 0), Bitmask::empty());
        assert_eq!(paint_u32(0, 0, 0), Bitmask::empty());
    }

    #[test]
    fn test_single_tree_scenarios() {
        assert_eq!(paint_u32(3, 3, 0b000010000), Bitmask::from(0b111111111u32));
        assert_eq!(paint_u32(2, 2, 0b1000), Bitmask::from(0b1111u32));
    }

    #[test]
    fn test_painting_is_a_single_pass() {
        // A tree in the bottom-right corner of a 4x4 grid only pulls in its own
        // 2x2 block; the newly painted cells are not expanded further.
        assert_eq!(paint_u32(4, 4, 0b0000_0000_0000_0001), Bitmask::from(0b0000_0000_0011_0011u32));
    }

    #[test]
    fn test_painting_keeps_every_tree() {
        let dims = Dimensions::new(4, 4);
        for trees in [0b0010_0010_0000_0001u32, 0b1000_0000_0000_0001, 0b0110_1001_1001_0110, 0xffff] {
            let trees = Bitmask::from(trees);
            let painting = paint(dims, &trees).unwrap();
            assert!(painting.is_superset_of(&trees));
            assert!(painting.bit_len() <= dims.cell_count() as u64);
        }
    }

    #[test]
    fn test_every_tree_gets_two_painted_neighbours() {
        let dims = Dimensions::new(4, 4);
        let trees = Bitmask::from(0b0010_0010_0000_0001u32);
        let painting = paint(dims, &trees).unwrap();
        for idx in trees.into_bit_iter() {
            let (row, column) = (idx / dims.columns, idx % dims.columns);
            let mut neighbours = 0;
            if row > 0 && painting.contains(idx - dims.columns) { neighbours += 1; }
            if row + 1 < dims.rows && painting.contains(idx + dims.columns) { neighbours += 1; }
            if column > 0 && painting.contains(idx - 1) { neighbours += 1; }
            if column + 1 < dims.columns && painting.contains(idx + 1) { neighbours += 1; }
            assert!(neighbours >= 2, "tree at bit {idx} has {neighbours} neighbours");
        }
    }

    #[test]
    fn test_large_grid_fully_planted() {
        let dims = Dimensions::new(20, 23);
        let trees = Bitmask::low_ones(dims.cell_count());
        assert_eq!(paint(dims, &trees), Ok(trees));
    }

    #[test]
    fn test_trees_outside_grid_are_reported() {
        let result = paint(Dimensions::new(2, 2), &Bitmask::from(0b1_0000u32));
        assert!(matches!(result, Err(GridError::OutsideGrid { .. })));
    }
}
