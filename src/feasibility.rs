use crate::bitmask::Bitmask;
use crate::grid::Dimensions;

/// Why a grid can or cannot be given a friendly painting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    NoRows,
    NoColumns,
    NoTrees,
    SingleRow,
    SingleColumn,
    Paintable,
}

impl Verdict {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::NoTrees | Self::Paintable)
    }
}

/// Classifies a grid by its shape. The checks run in order and the first
/// one that applies decides.
pub fn classify(dimensions: Dimensions, trees: &Bitmask) -> Verdict {
    if dimensions.rows == 0 {
        Verdict::NoRows
    } else if dimensions.columns == 0 {
        Verdict::NoColumns
    } else if trees.is_empty() {
        Verdict::NoTrees
    } else if dimensions.rows == 1 {
        Verdict::SingleRow
    } else if dimensions.columns == 1 {
        Verdict::SingleColumn
    } else {
        Verdict::Paintable
    }
}

pub fn is_feasible(dimensions: Dimensions, trees: &Bitmask) -> bool {
    classify(dimensions, trees).is_feasible()
}
