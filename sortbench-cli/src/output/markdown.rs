//! Markdown output formatter

use super::{cell_text, ResultFormatter};
use crate::error::CliResult;
use sortbench_engine::StoreSnapshot;
use std::io::Write;

/// Markdown table: one row per strategy, one column per size
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Formatter writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ResultFormatter for MarkdownFormatter<W> {
    fn render(&mut self, snapshot: &StoreSnapshot, sizes: &[usize]) -> CliResult<()> {
        write!(self.writer, "| sort\\size |")?;
        for &size in sizes {
            write!(self.writer, " {size} |")?;
        }
        writeln!(self.writer)?;

        write!(self.writer, "|---|")?;
        for _ in sizes {
            write!(self.writer, "---:|")?;
        }
        writeln!(self.writer)?;

        for series in &snapshot.series {
            write!(self.writer, "| {} |", series.name)?;
            for index in 0..sizes.len() {
                let value = cell_text(series, index).unwrap_or_default();
                write!(self.writer, " {value} |")?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*{} strategies, {} sizes*",
            snapshot.series.len(),
            sizes.len()
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
