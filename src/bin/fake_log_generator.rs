use anyhow::Result;
use log::info;
use picolog::{writer::Logger, LogLevel};
use rand::seq::SliceRandom;
use std::{fs::File, io::BufWriter, path::PathBuf};
use structopt::StructOpt;

#[derive(StructOpt)]
struct Options {
    /// Number of log lines to generate
    #[structopt(short, long, default_value = "10000")]
    lines: usize,
    /// Where to write the log file
    #[structopt(parse(from_os_str), default_value = "fake_logs.txt")]
    out_file: PathBuf,
}

/// Pool the generator draws messages from.
const MESSAGES: [&str; 5] = [
    "User logged in",
    "File not found",
    "Network error",
    "Operation successful",
    "Data saved",
];

/// Writes a log file full of random picolog-format lines for the
/// counting tools to chew on.
fn main() -> Result<()> {
    // Load from .env file if it is present
    dotenv::dotenv().ok();
    // Initialize logging
    env_logger::init();
    // Get command line arguments
    let options = Options::from_args();
    let mut rng = rand::thread_rng();
    let mut out = BufWriter::new(File::create(&options.out_file)?);
    let logger = Logger::new("main/fake_logs", LogLevel::Info, false);
    for _ in 0..options.lines {
        let level = *LogLevel::ALL.choose(&mut rng).unwrap();
        let message = *MESSAGES.choose(&mut rng).unwrap();
        // ERROR lines carry an error payload, like real picolog callers
        let error = if level == LogLevel::Error { Some("Generic Error") } else { None };
        logger.log(&mut out, level, message, error)?;
    }
    info!("wrote {} lines to {}", options.lines, options.out_file.display());
    Ok(())
}
