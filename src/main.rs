use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::Logger;
use indicatif::ProgressBar;
use log::info;

use tree_painter::grid::Markers;
use tree_painter::input::TestCaseReader;
use tree_painter::report::{report_lines, Report};
use tree_painter::solve;

#[derive(Parser)]
#[command(about = "Extends a grid of trees so every tree has at least two tree neighbours.")]
struct Cli {
    #[arg(help = "Problem input file.")]
    input: PathBuf,

    #[arg(help = "File the answers are written to.", short, long, default_value = "output.txt")]
    output: PathBuf,

    #[arg(help = "Character marking a tree.", long, default_value_t = '^')]
    tree: char,

    #[arg(help = "Character marking an empty cell.", long, default_value_t = '.')]
    empty: char,

    #[arg(help = "Do not echo answers to stdout.", short, long, default_value_t = false)]
    quiet: bool,

    #[arg(help = "Show a progress bar on stderr.", long, default_value_t = false)]
    progress: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let _logger = Logger::try_with_env_or_str("info")?.log_to_stderr().start()?;

    let markers = Markers { tree: args.tree, empty: args.empty };
    let text = fs::read_to_string(&args.input).with_context(|| format!("cannot open {}", args.input.display()))?;
    let cases = TestCaseReader::new(text.lines(), markers).with_context(|| format!("cannot read {}", args.input.display()))?;

    let output = File::create(&args.output).with_context(|| format!("cannot create {}", args.output.display()))?;
    let mut report = Report::new(BufWriter::new(output), !args.quiet);

    let n_cases = cases.case_count();
    let bar = if args.progress { ProgressBar::new(n_cases as u64) } else { ProgressBar::hidden() };

    let start_time = Instant::now();
    for (idx, case) in cases.enumerate() {
        let case_number = idx + 1;
        let case = case.with_context(|| format!("cannot read {}", args.input.display()))?;
        let outcome = solve(&case).with_context(|| format!("case #{case_number} failed"))?;
        report.write_case(&report_lines(case_number, case.dimensions, &outcome, &markers))?;
        bar.inc(1);
    }
    bar.finish_and_clear();
    report.finish().with_context(|| format!("cannot write {}", args.output.display()))?;

    info!("Solved {} cases in {:?}, answers in {}", n_cases, start_time.elapsed(), args.output.display());
    Ok(())
}
