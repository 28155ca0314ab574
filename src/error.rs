use thiserror::Error;

use crate::bitmask::Bitmask;

/// Contract violations inside the painting core.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("must be a positive power of two, got {0:#b}")]
    NotSingleBit(Bitmask),

    #[error("bit {bit:#b} (bit length {bit_len}) lies outside a {row_count}x{column_count} grid")]
    OutsideGrid { row_count: usize, column_count: usize, bit: Bitmask, bit_len: u64 },
}

/// Problems with the textual problem input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("input is empty, expected the number of test cases")]
    MissingCaseCount,

    #[error("invalid number of test cases: {0:?}")]
    InvalidCaseCount(String),

    #[error("case #{case}: missing \"rows columns\" line")]
    MissingDimensions { case: usize },

    #[error("case #{case}: invalid \"rows columns\" line: {line:?}")]
    InvalidDimensions { case: usize, line: String },

    #[error("case #{case}: missing grid line {line} of {rows}")]
    MissingRow { case: usize, line: usize, rows: usize },

    #[error("case #{case}: grid line {line} has {found} cells, expected {expected}")]
    RowWidth { case: usize, line: usize, expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
