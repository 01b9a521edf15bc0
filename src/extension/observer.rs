//! Event sinks for the extenders.
//!
//! The extenders never log on their own. Callers that want diagnostics
//! pass an observer; every hook has an empty default so an observer
//! only implements what it needs.

use crate::dominance::KanetCondition;

/// Receives progress events from an extender.
pub trait ExtensionObserver {
    /// Called before pass `pass` (1-based) starts.
    fn on_pass_start(&mut self, _pass: usize) {}

    /// Called after `before → after` has been committed to the relation.
    fn on_edge_inserted(&mut self, _before: usize, _after: usize, _condition: KanetCondition) {}

    /// Called when every pair of a batch passed and the batch was committed.
    fn on_batch_accepted(&mut self, _batch: &[(usize, usize)]) {}

    /// Called when `failed` broke a batch and the whole batch was discarded.
    fn on_batch_rejected(&mut self, _batch: &[(usize, usize)], _failed: (usize, usize)) {}

    /// Called after pass `pass` with the number of direct edges it added.
    fn on_pass_end(&mut self, _pass: usize, _inserted: usize) {}

    /// Observer name.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn ExtensionObserver + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExtensionObserver({})", self.name())
    }
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpObserver;

impl ExtensionObserver for NoOpObserver {
    fn name(&self) -> &str {
        "NoOpObserver"
    }
}

/// A recorded extender event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionEvent {
    PassStarted {
        pass: usize,
    },
    EdgeInserted {
        before: usize,
        after: usize,
        condition: KanetCondition,
    },
    BatchAccepted {
        batch: Vec<(usize, usize)>,
    },
    BatchRejected {
        batch: Vec<(usize, usize)>,
        failed: (usize, usize),
    },
    PassFinished {
        pass: usize,
        inserted: usize,
    },
}

/// Records every event in memory, in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<ExtensionEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events.
    pub fn events(&self) -> &[ExtensionEvent] {
        &self.events
    }

    /// Inserted edges with the condition that justified each.
    pub fn inserted_edges(&self) -> Vec<(usize, usize, KanetCondition)> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                ExtensionEvent::EdgeInserted {
                    before,
                    after,
                    condition,
                } => Some((before, after, condition)),
                _ => None,
            })
            .collect()
    }

    /// Batches that were discarded, with the pair that failed.
    pub fn rejected_batches(&self) -> Vec<(&[(usize, usize)], (usize, usize))> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ExtensionEvent::BatchRejected { batch, failed } => Some((batch.as_slice(), *failed)),
                _ => None,
            })
            .collect()
    }

    /// Clears the log.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ExtensionObserver for EventLog {
    fn on_pass_start(&mut self, pass: usize) {
        self.events.push(ExtensionEvent::PassStarted { pass });
    }

    fn on_edge_inserted(&mut self, before: usize, after: usize, condition: KanetCondition) {
        self.events.push(ExtensionEvent::EdgeInserted {
            before,
            after,
            condition,
        });
    }

    fn on_batch_accepted(&mut self, batch: &[(usize, usize)]) {
        self.events.push(ExtensionEvent::BatchAccepted {
            batch: batch.to_vec(),
        });
    }

    fn on_batch_rejected(&mut self, batch: &[(usize, usize)], failed: (usize, usize)) {
        self.events.push(ExtensionEvent::BatchRejected {
            batch: batch.to_vec(),
            failed,
        });
    }

    fn on_pass_end(&mut self, pass: usize, inserted: usize) {
        self.events
            .push(ExtensionEvent::PassFinished { pass, inserted });
    }

    fn name(&self) -> &str {
        "EventLog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_pass_start(1);
        log.on_edge_inserted(2, 0, KanetCondition::K4);
        log.on_batch_rejected(&[(0, 1)], (0, 1));
        log.on_pass_end(1, 1);

        assert_eq!(log.events().len(), 4);
        assert_eq!(log.events()[0], ExtensionEvent::PassStarted { pass: 1 });
        assert_eq!(log.inserted_edges(), vec![(2, 0, KanetCondition::K4)]);
        assert_eq!(log.rejected_batches(), vec![(&[(0, 1)][..], (0, 1))]);

        log.clear();
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_no_op_observer_name() {
        let observer: &dyn ExtensionObserver = &NoOpObserver;
        assert_eq!(format!("{observer:?}"), "ExtensionObserver(NoOpObserver)");
    }
}
