use anyhow::Result;
use log::info;
use picolog::chart::{Bar, BarChart, Colour, Renderer, TermRenderer};
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

/// Tallies the distinct message texts on ERROR lines of a picolog log
/// file, then draws the tally as a bar chart, most frequent first.
fn main() -> Result<()> {
    // Load from .env file if it is present
    dotenv::dotenv().ok();
    // Initialize logging
    env_logger::init();
    // Get command line arguments
    let options = Options::from_args();
    // Scan the file and tally message texts on ERROR lines
    let counts = picolog::count_error_messages(picolog::scan_lines(&options.log_file)?);
    info!("{} distinct error messages", counts.len());
    // Most frequent first; ties break on the message text so the chart is stable
    let mut messages: Vec<_> = counts.into_iter().collect();
    messages.sort_by(|(a_message, a_count), (b_message, b_count)| {
        b_count.cmp(a_count).then_with(|| a_message.cmp(b_message))
    });
    let bars = messages
        .into_iter()
        .map(|(message, count)| Bar {
            label: message,
            count,
            colour: Colour::Red,
        })
        .collect();
    let chart = BarChart {
        title: String::from("Most Frequent Error Messages"),
        x_label: String::from("Error Message"),
        y_label: String::from("Occurrences"),
        bars,
    };
    TermRenderer::new(stdout(), !options.no_colour).render(&chart)
}
