use std::io::{self, Write};

use crate::codec::render;
use crate::grid::{Dimensions, Markers};
use crate::Outcome;

/// The output lines for one case, each terminated by a newline.
pub fn report_lines(case_number: usize, dimensions: Dimensions, outcome: &Outcome, markers: &Markers) -> Vec<String> {
    match outcome {
        Outcome::Impossible => vec![format!("Case #{case_number}: Impossible\n")],
        Outcome::Possible(painting) => {
            let mut lines = vec![format!("Case #{case_number}: Possible\n")];
            lines.extend(render(dimensions, painting, markers));
            lines
        }
    }
}

/// Writes each case's lines to the output sink and, unless quiet, echoes
/// them to stdout.
pub struct Report<W> {
    output: W,
    echo: bool,
}

impl<W: Write> Report<W> {
    pub fn new(output: W, echo: bool) -> Self {
        Self { output, echo }
    }

    pub fn write_case(&mut self, lines: &[String]) -> io::Result<()> {
        let mut stdout = self.echo.then(|| io::stdout().lock());
        for line in lines {
            self.output.write_all(line.as_bytes())?;
            if let Some(stdout) = stdout.as_mut() {
                stdout.write_all(line.as_bytes())?;
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.output.flush()?;
        Ok(self.output)
    }
}
