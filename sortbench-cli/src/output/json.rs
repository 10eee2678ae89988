//! JSON output formatter

use super::ResultFormatter;
use crate::error::CliResult;
use serde::Serialize;
use sortbench_engine::StoreSnapshot;
use std::io::Write;

/// JSON document with one entry per strategy series
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// One rendered cell
#[derive(Debug, Serialize)]
struct CellData {
    /// Input size this cell was measured at
    size: usize,
    /// Elapsed seconds; `null` when the strategy failed here
    secs: Option<f64>,
    /// Failure reason, present only for failed cells
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// One strategy's rendered series
#[derive(Debug, Serialize)]
struct SeriesData {
    strategy: String,
    cells: Vec<CellData>,
}

/// Top-level document
#[derive(Debug, Serialize)]
struct TableData {
    sizes: Vec<usize>,
    series: Vec<SeriesData>,
}

impl<W: Write> JsonFormatter<W> {
    /// Formatter writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ResultFormatter for JsonFormatter<W> {
    fn render(&mut self, snapshot: &StoreSnapshot, sizes: &[usize]) -> CliResult<()> {
        let document = TableData {
            sizes: sizes.to_vec(),
            series: snapshot
                .series
                .iter()
                .map(|series| SeriesData {
                    strategy: series.name.clone(),
                    cells: series
                        .samples
                        .iter()
                        .zip(sizes)
                        .map(|(sample, &size)| CellData {
                            size,
                            secs: sample.secs(),
                            error: sample.failure().map(str::to_string),
                        })
                        .collect(),
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_engine::{Sample, SeriesSnapshot};
    use std::time::Duration;

    fn sample_snapshot() -> StoreSnapshot {
        StoreSnapshot {
            series: vec![SeriesSnapshot {
                name: "merge_sort".to_string(),
                samples: vec![
                    Sample::Elapsed(Duration::from_micros(2500)),
                    Sample::Failed("boom".to_string()),
                ],
            }],
        }
    }

    #[test]
    fn document_pairs_cells_with_sizes() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.render(&sample_snapshot(), &[1024, 4096, 16384]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(value["sizes"], serde_json::json!([1024, 4096, 16384]));

        let series = &value["series"][0];
        assert_eq!(series["strategy"], "merge_sort");
        // Cells stop at the completed prefix, not the full ladder.
        assert_eq!(series["cells"].as_array().unwrap().len(), 2);
        assert_eq!(series["cells"][0]["size"], 1024);
        assert!((series["cells"][0]["secs"].as_f64().unwrap() - 0.0025).abs() < 1e-12);
        assert_eq!(series["cells"][1]["secs"], serde_json::Value::Null);
        assert_eq!(series["cells"][1]["error"], "boom");
    }

    #[test]
    fn timed_cells_omit_the_error_key() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.render(&sample_snapshot(), &[1024, 4096]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert!(value["series"][0]["cells"][0]
            .as_object()
            .unwrap()
            .get("error")
            .is_none());
    }
}
