//! Shared result store and read-consistent snapshots

use serde::Serialize;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// One recorded measurement cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sample {
    /// Wall-clock time of the strategy's sort call
    Elapsed(Duration),
    /// The strategy failed at this size; the slot keeps the series aligned
    Failed(String),
}

impl Sample {
    /// Elapsed seconds, `None` for a failed cell
    pub fn secs(&self) -> Option<f64> {
        match self {
            Sample::Elapsed(elapsed) => Some(elapsed.as_secs_f64()),
            Sample::Failed(_) => None,
        }
    }

    /// Failure reason, `None` for a timed cell
    pub fn failure(&self) -> Option<&str> {
        match self {
            Sample::Elapsed(_) => None,
            Sample::Failed(reason) => Some(reason),
        }
    }
}

/// Sample series for one strategy, aligned with the completed size prefix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSnapshot {
    /// Strategy name
    pub name: String,
    /// One sample per size the strategy has completed, in size order
    pub samples: Vec<Sample>,
}

/// Read-consistent deep copy of the whole store
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreSnapshot {
    /// Every known series, in registry order
    pub series: Vec<SeriesSnapshot>,
}

impl StoreSnapshot {
    /// Total number of recorded samples across all series
    pub fn total_samples(&self) -> usize {
        self.series.iter().map(|series| series.samples.len()).sum()
    }

    /// Whether no samples have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.total_samples() == 0
    }

    /// Looks up one series by strategy name
    pub fn series_for(&self, name: &str) -> Option<&SeriesSnapshot> {
        self.series.iter().find(|series| series.name == name)
    }
}

/// Mapping from strategy name to its timing series
///
/// Single writer (the runner thread), many readers. Appends happen under
/// the write lock and snapshots deep-copy under the read lock, so a reader
/// never observes a half-written cell.
#[derive(Debug)]
pub struct ResultStore {
    series: RwLock<Vec<(String, Vec<Sample>)>>,
}

impl ResultStore {
    /// Store with one empty series per strategy name, preserving order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let series = names
            .into_iter()
            .map(|name| (name.into(), Vec::new()))
            .collect();
        Self {
            series: RwLock::new(series),
        }
    }

    /// Appends an elapsed-time sample to `name`'s series
    pub fn append(&self, name: &str, elapsed: Duration) {
        self.push(name, Sample::Elapsed(elapsed));
    }

    /// Records a failed cell for `name`, keeping the series aligned
    pub fn record_failure(&self, name: &str, reason: impl Into<String>) {
        self.push(name, Sample::Failed(reason.into()));
    }

    fn push(&self, name: &str, sample: Sample) {
        let mut series = self.series.write().unwrap_or_else(PoisonError::into_inner);
        match series.iter_mut().find(|(key, _)| key == name) {
            Some((_, samples)) => samples.push(sample),
            None => series.push((name.to_string(), vec![sample])),
        }
    }

    /// Resets every series to empty, keeping the known names
    pub fn clear(&self) {
        let mut series = self.series.write().unwrap_or_else(PoisonError::into_inner);
        for (_, samples) in series.iter_mut() {
            samples.clear();
        }
    }

    /// Whether no samples have been recorded yet
    pub fn is_empty(&self) -> bool {
        let series = self.series.read().unwrap_or_else(PoisonError::into_inner);
        series.iter().all(|(_, samples)| samples.is_empty())
    }

    /// Deep copy for presentation-side readers
    pub fn snapshot(&self) -> StoreSnapshot {
        let series = self.series.read().unwrap_or_else(PoisonError::into_inner);
        StoreSnapshot {
            series: series
                .iter()
                .map(|(name, samples)| SeriesSnapshot {
                    name: name.clone(),
                    samples: samples.clone(),
                })
                .collect(),
        }
    }
}
