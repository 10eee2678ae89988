//! Result-table rendering in the supported output formats

use crate::error::CliResult;
use sortbench_engine::{SeriesSnapshot, StoreSnapshot};

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Renders a final result table from a store snapshot
///
/// `sizes` carries the full size ladder; a series shorter than the ladder
/// leaves its remaining columns blank.
pub trait ResultFormatter {
    /// Renders the table for `snapshot` against the size columns `sizes`
    fn render(&mut self, snapshot: &StoreSnapshot, sizes: &[usize]) -> CliResult<()>;
}

/// Cell content for one sample slot: elapsed seconds to seven decimals,
/// a failure marker, or `None` past the end of the series
pub(crate) fn cell_text(series: &SeriesSnapshot, index: usize) -> Option<String> {
    series.samples.get(index).map(|sample| match sample.secs() {
        Some(secs) => format!("{secs:.7}"),
        None => "failed".to_string(),
    })
}
