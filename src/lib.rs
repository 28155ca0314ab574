pub mod bit_iter;
pub mod bitmask;
pub mod codec;
pub mod error;
pub mod expansion;
pub mod feasibility;
pub mod grid;
pub mod input;
pub mod painter;
pub mod position;
pub mod report;

use log::debug;

use crate::bitmask::Bitmask;
use crate::error::Result;
use crate::feasibility::classify;
use crate::grid::TestCase;
use crate::painter::paint;

/// Result of solving one test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Impossible,
    Possible(Bitmask),
}

impl From<Option<Bitmask>> for Outcome {
    fn from(painting: Option<Bitmask>) -> Self {
        painting.map_or(Self::Impossible, Self::Possible)
    }
}

/// Decides whether the case has a friendly painting and, if so, paints it.
pub fn process(test_case: &TestCase) -> Result<Option<Bitmask>> {
    let verdict = classify(test_case.dimensions, &test_case.trees);
    debug!("{}x{} grid with {} trees: {:?}", test_case.dimensions.rows, test_case.dimensions.columns, test_case.trees.count_ones(), verdict);

    if !verdict.is_feasible() {
        return Ok(None);
    }
    paint(test_case.dimensions, &test_case.trees).map(Some)
}

pub fn solve(test_case: &TestCase) -> Result<Outcome> {
    process(test_case).map(Outcome::from)
}
