//! Per-size batch dispatch and as-completed collection

use crate::config::BenchConfig;
use crate::error::{EngineError, Result};
use crate::generator::{DataGenerator, Dataset};
use crate::policy::ActivationPolicy;
use crate::sink::PresentationSink;
use crate::store::ResultStore;
use sortbench_algos::Sorter;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// What one worker reports back: elapsed time or a failure reason
type WorkerReport = (&'static str, std::result::Result<Duration, String>);

/// Outcome statistics for one full run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of sizes processed
    pub sizes_completed: usize,
    /// Samples recorded across all strategies, failures included
    pub samples_recorded: usize,
    /// Failed cells among the recorded samples
    pub failures: usize,
    /// Wall time of the whole run
    pub total_elapsed: Duration,
}

/// Executes the benchmark: one batch of isolated workers per input size
///
/// Sizes run in ascending order. Within a size, every active strategy
/// sorts its own copy of one shared dataset on its own worker thread, and
/// results land in the store in completion order. The next size starts
/// only after the whole batch has reported.
pub struct BenchRunner {
    config: BenchConfig,
    registry: Vec<Arc<dyn Sorter>>,
    policy: ActivationPolicy,
}

impl BenchRunner {
    /// Builds a runner over `registry` after validating `config`
    pub fn new(config: BenchConfig, registry: Vec<Arc<dyn Sorter>>) -> Result<Self> {
        config.validate()?;
        if registry.is_empty() {
            return Err(EngineError::InvalidArgument(
                "strategy registry is empty".into(),
            ));
        }
        let policy = ActivationPolicy::new(config.large_input_threshold);
        Ok(Self {
            config,
            registry,
            policy,
        })
    }

    /// Borrows the runner's configuration
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Names of every registered strategy, in presentation order
    pub fn strategy_names(&self) -> Vec<String> {
        self.registry
            .iter()
            .map(|sorter| sorter.name().to_string())
            .collect()
    }

    /// Total number of cells a full run records, for progress displays
    pub fn planned_samples(&self) -> usize {
        self.config
            .sizes
            .iter()
            .map(|&size| self.policy.active(&self.registry, size).len())
            .sum()
    }

    /// Runs every size in ascending order, appending into `store` and
    /// notifying `sink` after each completed cell
    ///
    /// A failing or panicking strategy is recorded against its own cell
    /// and never disturbs siblings or later sizes. Errors from this
    /// function are harness faults, not strategy failures.
    pub fn run(&self, store: &ResultStore, sink: &mut dyn PresentationSink) -> Result<RunSummary> {
        let run_started = Instant::now();
        let mut generator = DataGenerator::new(self.config.value_range.clone(), self.config.seed)?;
        let mut samples_recorded = 0usize;
        let mut failures = 0usize;

        for (index, &size) in self.config.sizes.iter().enumerate() {
            let active = self.policy.active(&self.registry, size);
            log::info!(
                "size {} ({}/{}): {} strategies active",
                size,
                index + 1,
                self.config.sizes.len(),
                active.len()
            );
            if active.is_empty() {
                continue;
            }

            let dataset = Arc::new(generator.generate(size));
            let reports = self.dispatch(&active, &dataset)?;
            for _ in 0..active.len() {
                let (name, outcome) = reports
                    .recv()
                    .map_err(|_| EngineError::WorkerLost { size })?;
                match outcome {
                    Ok(elapsed) => {
                        log::debug!(
                            "{} sorted {} values in {:.7}s",
                            name,
                            size,
                            elapsed.as_secs_f64()
                        );
                        store.append(name, elapsed);
                    }
                    Err(reason) => {
                        log::warn!("{} failed at size {}: {}", name, size, reason);
                        store.record_failure(name, reason);
                        failures += 1;
                    }
                }
                samples_recorded += 1;
                sink.update_series(store.snapshot());
                sink.refresh_table();
            }
        }

        let summary = RunSummary {
            sizes_completed: self.config.sizes.len(),
            samples_recorded,
            failures,
            total_elapsed: run_started.elapsed(),
        };
        log::info!(
            "run complete: {} samples, {} failures, {:.3}s",
            summary.samples_recorded,
            summary.failures,
            summary.total_elapsed.as_secs_f64()
        );
        Ok(summary)
    }

    /// Spawns one worker per active strategy on a fresh pool
    ///
    /// Workers report over the returned channel as they finish, so the
    /// caller drains results in completion order. Receiving exactly
    /// `active.len()` reports is the batch barrier.
    fn dispatch(
        &self,
        active: &[Arc<dyn Sorter>],
        dataset: &Arc<Dataset>,
    ) -> Result<Receiver<WorkerReport>> {
        let cap = self.config.max_threads.unwrap_or_else(num_cpus::get).max(1);
        // A panic escaping a spawned job would otherwise abort the process;
        // with a handler it surfaces as a lost worker at the receive side.
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(active.len().min(cap))
            .panic_handler(|payload| {
                log::error!("benchmark worker panicked: {}", panic_reason(payload.as_ref()));
            })
            .build()
            .map_err(|error| EngineError::ThreadPool(error.to_string()))?;

        let (report_tx, report_rx) = mpsc::channel();
        for sorter in active {
            let report_tx = report_tx.clone();
            let sorter = Arc::clone(sorter);
            let dataset = Arc::clone(dataset);
            pool.spawn(move || {
                let outcome = timed_sort(sorter.as_ref(), &dataset);
                // The receiver outlives the batch, but ignore a hangup
                // in case the run was torn down early.
                let _ = report_tx.send((sorter.name(), outcome));
            });
        }
        // Dropping the pool handle is fine: spawned jobs still run to
        // completion and the worker threads wind down afterwards.
        Ok(report_rx)
    }
}

/// Times one strategy against its own copy of the dataset
///
/// The copy happens before the clock starts, so only the sort itself is
/// measured. A panic inside the strategy is captured and reported as a
/// failure instead of taking the batch down.
fn timed_sort(sorter: &dyn Sorter, dataset: &[u32]) -> std::result::Result<Duration, String> {
    let mut work = dataset.to_vec();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let clock = Instant::now();
        sorter.sort(&mut work).map(|()| clock.elapsed())
    }));
    match outcome {
        Ok(Ok(elapsed)) => Ok(elapsed),
        Ok(Err(error)) => Err(error.to_string()),
        Err(payload) => Err(panic_reason(payload.as_ref())),
    }
}

/// Best-effort human-readable reason from a panic payload
pub(crate) fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panicked".to_string()
    }
}
