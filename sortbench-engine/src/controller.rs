//! Run triggering, the background thread, and the in-progress guard

use crate::config::BenchConfig;
use crate::error::{EngineError, Result};
use crate::runner::{panic_reason, BenchRunner, RunSummary};
use crate::sink::{EventSink, PresentationSink, UiEvent};
use crate::store::{ResultStore, StoreSnapshot};
use sortbench_algos::Sorter;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Owns the result store and serializes benchmark runs
///
/// Triggering while a run is in flight fails with
/// [`EngineError::RunInProgress`] instead of racing the store reset
/// against the previous run's appends.
pub struct BenchController {
    runner: Arc<BenchRunner>,
    store: Arc<ResultStore>,
    running: Arc<AtomicBool>,
}

impl BenchController {
    /// Controller over `config` and `registry`
    pub fn new(config: BenchConfig, registry: Vec<Arc<dyn Sorter>>) -> Result<Self> {
        let runner = BenchRunner::new(config, registry)?;
        let store = Arc::new(ResultStore::new(runner.strategy_names()));
        Ok(Self {
            runner: Arc::new(runner),
            store,
            running: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Borrows the active configuration
    pub fn config(&self) -> &BenchConfig {
        self.runner.config()
    }

    /// Read-consistent view of the current results
    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    /// Number of cells a full run records, for progress displays
    pub fn planned_samples(&self) -> usize {
        self.runner.planned_samples()
    }

    /// Whether a run is currently in flight
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Starts one benchmark run on a background thread
    ///
    /// Resets the store and posts the empty chart and table state before
    /// the runner thread exists, so those events always precede the first
    /// measurement. The returned handle drains events and joins the run.
    pub fn trigger(&self) -> Result<RunHandle> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(EngineError::RunInProgress);
        }

        self.store.clear();

        let (events_tx, events_rx) = mpsc::channel();
        let mut sink = EventSink::new(events_tx);
        sink.update_series(self.store.snapshot());
        sink.refresh_table();

        let runner = Arc::clone(&self.runner);
        let store = Arc::clone(&self.store);
        let guard = RunningGuard(Arc::clone(&self.running));
        let worker = thread::spawn(move || {
            let _guard = guard;
            runner.run(&store, &mut sink)
        });

        Ok(RunHandle {
            events: events_rx,
            worker,
        })
    }
}

/// Clears the running flag when the run thread exits, however it exits
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Handle to one in-flight benchmark run
pub struct RunHandle {
    events: Receiver<UiEvent>,
    worker: JoinHandle<Result<RunSummary>>,
}

impl RunHandle {
    /// Next event, blocking; `None` once the run is over and the queue drained
    pub fn next_event(&self) -> Option<UiEvent> {
        self.events.recv().ok()
    }

    /// Non-blocking variant of [`RunHandle::next_event`]
    pub fn try_next_event(&self) -> Option<UiEvent> {
        self.events.try_recv().ok()
    }

    /// Waits for the background run and returns its summary
    ///
    /// A panic on the run thread surfaces as
    /// [`EngineError::RunPanicked`] rather than disappearing silently.
    pub fn join(self) -> Result<RunSummary> {
        match self.worker.join() {
            Ok(result) => result,
            Err(payload) => Err(EngineError::RunPanicked(panic_reason(payload.as_ref()))),
        }
    }
}
