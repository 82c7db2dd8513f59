//! Recorder that captures every action a bot under test emits.

use std::time::Duration;

use parking_lot::Mutex;
use parley_core::Action;
use tracing::debug;

use crate::record::RecordedAction;

/// Captures the sequence of actions emitted by a bot under test.
///
/// The test harness stands this in for the real connector bus: each
/// intercepted action is recorded together with its emission delay, and
/// the test inspects the resulting [`RecordedAction`]s afterwards.
/// Interior mutability lets the harness hold a shared reference while
/// recording.
#[derive(Debug, Default)]
pub struct BusRecorder {
    records: Mutex<Vec<RecordedAction>>,
}

impl BusRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one emitted action with its delay.
    pub fn record(&self, action: Action, delay: Duration) {
        debug!(?delay, ?action, "recorded bot action");
        self.records.lock().push(RecordedAction::new(action, delay));
    }

    /// All records so far, in emission order.
    #[must_use]
    pub fn records(&self) -> Vec<RecordedAction> {
        self.records.lock().clone()
    }

    /// The record at `index`, if one exists.
    #[must_use]
    pub fn record_at(&self, index: usize) -> Option<RecordedAction> {
        self.records.lock().get(index).cloned()
    }

    /// The first recorded action, if any.
    #[must_use]
    pub fn first_answer(&self) -> Option<RecordedAction> {
        self.records.lock().first().cloned()
    }

    /// The most recent recorded action, if any.
    #[must_use]
    pub fn last_answer(&self) -> Option<RecordedAction> {
        self.records.lock().last().cloned()
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Assert that exactly `expected` actions were recorded.
    ///
    /// # Panics
    ///
    /// Panics if the count differs.
    pub fn assert_answers_count(&self, expected: usize) {
        let actual = self.len();
        assert_eq!(actual, expected, "expected {expected} answers, got {actual}");
    }

    /// Drop all records, keeping the recorder usable.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_emission_order() {
        let recorder = BusRecorder::new();
        assert!(recorder.is_empty());

        recorder.record(Action::sentence("first"), Duration::ZERO);
        recorder.record(Action::sentence("second"), Duration::from_millis(300));

        recorder.assert_answers_count(2);
        recorder.first_answer().unwrap().assert_text("first");
        recorder.last_answer().unwrap().assert_text("second");
        assert_eq!(
            recorder.last_answer().unwrap().delay(),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn record_at_out_of_range_is_none() {
        let recorder = BusRecorder::new();
        recorder.record(Action::sentence("only"), Duration::ZERO);
        assert!(recorder.record_at(0).is_some());
        assert!(recorder.record_at(1).is_none());
    }

    #[test]
    #[should_panic(expected = "expected 3 answers, got 1")]
    fn assert_answers_count_fails_on_mismatch() {
        let recorder = BusRecorder::new();
        recorder.record(Action::sentence("only"), Duration::ZERO);
        recorder.assert_answers_count(3);
    }

    #[test]
    fn clear_empties_the_recorder() {
        let recorder = BusRecorder::new();
        recorder.record(Action::sentence("x"), Duration::ZERO);
        recorder.clear();
        assert!(recorder.is_empty());
        assert!(recorder.first_answer().is_none());
        assert!(recorder.last_answer().is_none());
    }
}
