//! The presentation-sink contract and its engine-side implementations

use crate::store::StoreSnapshot;
use std::sync::mpsc::Sender;

/// Events posted to the interactive side of a run
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The chart series changed; render from this snapshot
    Series(StoreSnapshot),
    /// The tabular view should re-render from the latest snapshot
    Table,
}

/// Receives incremental result updates from the runner
///
/// [`PresentationSink::update_series`] feeds a chart one line per strategy
/// (x = size step index, y = elapsed seconds) and fires once per recorded
/// cell; [`PresentationSink::refresh_table`] asks the tabular view to
/// re-render. Implementations must not block for long: the runner calls
/// both between measurements.
pub trait PresentationSink: Send {
    /// Reacts to a changed result store
    fn update_series(&mut self, snapshot: StoreSnapshot);

    /// Re-renders the tabular view
    fn refresh_table(&mut self);
}

/// Posts [`UiEvent`]s into a channel drained by the interactive thread
///
/// A disconnected receiver is ignored: the run keeps recording into the
/// store even when nobody is listening anymore.
#[derive(Debug)]
pub struct EventSink {
    events: Sender<UiEvent>,
}

impl EventSink {
    /// Sink posting into `events`
    pub fn new(events: Sender<UiEvent>) -> Self {
        Self { events }
    }

    fn post(&self, event: UiEvent) {
        if self.events.send(event).is_err() {
            log::debug!("presentation side hung up, dropping event");
        }
    }
}

impl PresentationSink for EventSink {
    fn update_series(&mut self, snapshot: StoreSnapshot) {
        self.post(UiEvent::Series(snapshot));
    }

    fn refresh_table(&mut self) {
        self.post(UiEvent::Table);
    }
}

/// Sink that discards every notification, for headless runs and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn update_series(&mut self, _snapshot: StoreSnapshot) {}

    fn refresh_table(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn event_sink_posts_in_call_order() {
        let (tx, rx) = mpsc::channel();
        let mut sink = EventSink::new(tx);

        sink.update_series(StoreSnapshot::default());
        sink.refresh_table();

        assert_eq!(rx.recv().unwrap(), UiEvent::Series(StoreSnapshot::default()));
        assert_eq!(rx.recv().unwrap(), UiEvent::Table);
    }

    #[test]
    fn event_sink_survives_a_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        let mut sink = EventSink::new(tx);
        drop(rx);

        sink.update_series(StoreSnapshot::default());
        sink.refresh_table();
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.update_series(StoreSnapshot::default());
        sink.refresh_table();
    }
}
