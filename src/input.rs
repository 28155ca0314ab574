use itertools::Itertools;
use log::debug;

use crate::bitmask::Bitmask;
use crate::codec::{combine_rows, encode_row};
use crate::error::InputError;
use crate::grid::{Markers, TestCase};

pub fn parse_case_count(line: &str) -> Result<usize, InputError> {
    line.trim().parse().map_err(|_| InputError::InvalidCaseCount(line.to_string()))
}

/// Reads a `"rows columns"` header line.
pub fn parse_dimensions(case: usize, line: &str) -> Result<(usize, usize), InputError> {
    let invalid = || InputError::InvalidDimensions { case, line: line.to_string() };
    let (rows, columns) = line.split_whitespace().collect_tuple().ok_or_else(invalid)?;
    Ok((rows.parse().map_err(|_| invalid())?, columns.parse().map_err(|_| invalid())?))
}

/// Lazily decodes the test cases of a problem input, one per `next` call.
pub struct TestCaseReader<I> {
    lines: I,
    markers: Markers,
    case_count: usize,
    next_case: usize,
}

impl<I, S> TestCaseReader<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Starts reading, consuming the leading case-count line.
    pub fn new(mut lines: I, markers: Markers) -> Result<Self, InputError> {
        let first = lines.next().ok_or(InputError::MissingCaseCount)?;
        let case_count = parse_case_count(first.as_ref())?;
        debug!("input declares {case_count} test cases");
        Ok(Self { lines, markers, case_count, next_case: 1 })
    }

    /// Number of test cases the input declares.
    pub fn case_count(&self) -> usize {
        self.case_count
    }

    fn read_case(&mut self, case: usize) -> Result<TestCase, InputError> {
        let header = self.lines.next().ok_or(InputError::MissingDimensions { case })?;
        let (rows, columns) = parse_dimensions(case, header.as_ref())?;

        let mut trees = Bitmask::empty();
        for line in 1..=rows {
            let text = self.lines.next().ok_or(InputError::MissingRow { case, line, rows })?;
            let text = text.as_ref().trim_end();
            let found = text.chars().count();
            if found != columns {
                return Err(InputError::RowWidth { case, line, expected: columns, found });
            }
            trees = combine_rows([trees, encode_row(text, &self.markers)], columns);
        }

        Ok(TestCase::new(rows, columns, trees))
    }
}

impl<I, S> Iterator for TestCaseReader<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<TestCase, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_case > self.case_count {
            return None;
        }
        let case = self.next_case;
        let result = self.read_case(case);
        // Stop after the first malformed case; later lines cannot be trusted.
        self.next_case = if result.is_ok() { case + 1 } else { self.case_count + 1 };
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.case_count + 1).saturating_sub(self.next_case);
        (0, Some(remaining))
    }
}
