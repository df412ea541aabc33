use anyhow::Result;
use std::io::Write;

const RESET: &str = "\x1b[0m";

/// The palette a chart can draw bars in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Blue,
    Green,
    Yellow,
    Red,
    Magenta,
}

impl Colour {
    fn ansi(self) -> &'static str {
        match self {
            Colour::Blue => "\x1b[34m",
            Colour::Green => "\x1b[32m",
            Colour::Yellow => "\x1b[33m",
            Colour::Red => "\x1b[31m",
            Colour::Magenta => "\x1b[35m",
        }
    }
}

/// One bar: a label, its count, and the colour to draw it in.
pub struct Bar {
    pub label: String,
    pub count: u64,
    pub colour: Colour,
}

/// An ordered bar chart, ready to hand to a renderer.
///
/// The labels keep whatever order the caller put them in; the chart
/// itself imposes none.
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

/// Where a finished chart goes. The aggregation core only ever talks to
/// this trait, so it can be tested without a terminal attached.
pub trait Renderer {
    fn render(&mut self, chart: &BarChart) -> Result<()>;
}

/// Draws horizontal bars on a terminal-ish writer.
pub struct TermRenderer<W: Write> {
    out: W,
    colour: bool,
    /// Cell width of the longest bar.
    bar_width: usize,
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W, colour: bool) -> Self {
        Self { out, colour, bar_width: 40 }
    }

    fn draw_bar(&self, count: u64, max_count: u64, colour: Colour) -> String {
        let cells = scale(count, max_count, self.bar_width);
        let pad = " ".repeat(self.bar_width - cells);
        if self.colour {
            format!("{}{}{}{}", colour.ansi(), "█".repeat(cells), RESET, pad)
        } else {
            format!("{}{}", "=".repeat(cells), pad)
        }
    }
}

impl<W: Write> Renderer for TermRenderer<W> {
    fn render(&mut self, chart: &BarChart) -> Result<()> {
        let label_width = chart
            .bars
            .iter()
            .map(|bar| bar.label.len())
            .max()
            .unwrap_or(0)
            .max(chart.x_label.len());
        let max_count = chart.bars.iter().map(|bar| bar.count).max().unwrap_or(0);

        writeln!(self.out, "{}", chart.title)?;
        writeln!(self.out, "{}", "=".repeat(chart.title.len()))?;
        // Axis labels head their columns
        writeln!(
            self.out,
            "{:<label_width$}  {:bar_width$}  {}",
            chart.x_label,
            "",
            chart.y_label,
            bar_width = self.bar_width,
        )?;
        for bar in &chart.bars {
            writeln!(
                self.out,
                "{:<label_width$}  {}  {}",
                bar.label,
                self.draw_bar(bar.count, max_count, bar.colour),
                bar.count,
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Cells a bar of `count` occupies when the tallest bar fills `width`.
/// Any non-zero count gets at least one cell.
fn scale(count: u64, max_count: u64, width: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let cells = (count as f64 / max_count as f64 * width as f64).round() as usize;
    cells.clamp(1, width)
}
