use anyhow::Result;
use log::info;
use picolog::chart::{Bar, BarChart, Renderer, TermRenderer};
use std::{io::stdout, path::PathBuf};
use structopt::StructOpt;

#[derive(StructOpt)]
struct Options {
    /// Draw plain bars without ANSI colour
    #[structopt(long)]
    no_colour: bool,
    /// Log file to scan
    #[structopt(parse(from_os_str), default_value = "fake_logs.txt")]
    log_file: PathBuf,
}

/// Tallies how often each log level appears in a picolog log file, then
/// draws the tally as a bar chart. One bar per known level, always.
fn main() -> Result<()> {
    // Load from .env file if it is present
    dotenv::dotenv().ok();
    // Initialize logging
    env_logger::init();
    // Get command line arguments
    let options = Options::from_args();
    // Scan the file and tally the five known levels
    let counts = picolog::count_levels(picolog::scan_lines(&options.log_file)?);
    info!("{} lines carried a known level", counts.total());
    // One bar per level, in declaration order
    let bars = counts
        .iter()
        .map(|(level, count)| Bar {
            label: level.to_string(),
            count,
            colour: level.chart_colour(),
        })
        .collect();
    let chart = BarChart {
        title: String::from("Count of Each Log Level"),
        x_label: String::from("Log Level"),
        y_label: String::from("Occurrences"),
        bars,
    };
    TermRenderer::new(stdout(), !options.no_colour).render(&chart)
}
