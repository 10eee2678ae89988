//! Progress reporting for benchmark runs

use indicatif::{ProgressBar, ProgressStyle};
use sortbench_engine::StoreSnapshot;
use std::collections::HashMap;
use std::time::Duration;

/// Progress bar fed by result-store snapshots
///
/// The runner reports whole snapshots, so the reporter tracks how many
/// samples it has already seen per series and advances the bar by the
/// difference. Each series covers a prefix of the size ladder, which lets
/// the reporter name the input size a new sample belongs to.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    sizes: Vec<usize>,
    seen: HashMap<String, usize>,
    quiet: bool,
}

impl ProgressReporter {
    /// Reporter over the run's size ladder; `quiet` suppresses all output
    pub fn new(quiet: bool, sizes: &[usize]) -> Self {
        Self {
            bar: None,
            sizes: sizes.to_vec(),
            seen: HashMap::new(),
            quiet,
        }
    }

    /// Initializes the bar for `total_cells` expected samples
    pub fn begin(&mut self, total_cells: u64) {
        if self.quiet {
            return;
        }
        let bar = ProgressBar::new(total_cells);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} cells {msg}")
                .unwrap()
                .progress_chars("##-"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Advances the bar to match `snapshot`, naming newly finished cells
    pub fn observe(&mut self, snapshot: &StoreSnapshot) {
        let Some(bar) = self.bar.as_ref() else {
            return;
        };
        for series in &snapshot.series {
            let seen = self.seen.entry(series.name.clone()).or_insert(0);
            while *seen < series.samples.len() {
                let size = self
                    .sizes
                    .get(*seen)
                    .map(|size| format!(" n={size}"))
                    .unwrap_or_default();
                let message = match series.samples[*seen].secs() {
                    Some(secs) => format!("{}{size}: {secs:.7}s", series.name),
                    None => format!("{}{size}: failed", series.name),
                };
                bar.set_message(message);
                bar.inc(1);
                *seen += 1;
            }
        }
    }

    /// Finishes and clears the bar
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("done");
        }
    }
}
