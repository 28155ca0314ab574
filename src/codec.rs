use itertools::Itertools;

use crate::bitmask::Bitmask;
use crate::grid::{Dimensions, Markers};

/// Packs one textual grid row. The first character becomes the most
/// significant bit; any trailing whitespace is ignored.
pub fn encode_row(text: &str, markers: &Markers) -> Bitmask {
    text.trim_end().chars().fold(Bitmask::empty(), |acc, c| {
        let acc = acc << 1;
        if c == markers.tree { acc | Bitmask::from(1u8) } else { acc }
    })
}

/// Stacks packed rows into a grid. Each row is shifted in below the ones
/// before it, so the first row ends up in the most significant chunk.
pub fn combine_rows<I: IntoIterator<Item = Bitmask>>(rows: I, column_count: usize) -> Bitmask {
    rows.into_iter().fold(Bitmask::empty(), |acc, row| (acc << column_count) | row)
}

/// Turns a packed grid back into text lines, most significant chunk first,
/// each terminated by a newline.
pub fn render(dimensions: Dimensions, packed: &Bitmask, markers: &Markers) -> Vec<String> {
    if dimensions.cell_count() == 0 {
        return vec!["\n".to_string(); dimensions.rows];
    }

    let digits = format!("{:0width$b}", packed, width = dimensions.cell_count());
    digits.as_bytes().chunks(dimensions.columns).map(|chunk| {
        chunk.iter()
            .map(|&d| if d == b'1' { markers.tree } else { markers.empty })
            .chain(std::iter::once('\n'))
            .collect::<String>()
    }).collect_vec()
}
