//! Plain-text output formatter

use super::{cell_text, ResultFormatter};
use crate::error::CliResult;
use sortbench_engine::StoreSnapshot;
use std::io::{self, Write};

const NAME_WIDTH: usize = 16;
const CELL_WIDTH: usize = 12;

/// Aligned plain-text table: one row per strategy, one column per size
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Formatter writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Formatter writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ResultFormatter for TextFormatter<W> {
    fn render(&mut self, snapshot: &StoreSnapshot, sizes: &[usize]) -> CliResult<()> {
        write!(self.writer, "{:<NAME_WIDTH$}", "sort\\size")?;
        for &size in sizes {
            write!(self.writer, " {:>CELL_WIDTH$}", group_digits(size))?;
        }
        writeln!(self.writer)?;

        for series in &snapshot.series {
            write!(self.writer, "{:<NAME_WIDTH$}", series.name)?;
            for index in 0..sizes.len() {
                let value = cell_text(series, index).unwrap_or_default();
                write!(self.writer, " {value:>CELL_WIDTH$}")?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Groups digits in threes with spaces, matching the column headers
fn group_digits(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}
