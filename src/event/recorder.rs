//! In-memory sink that keeps every event it handles.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::envelope::Event;
use super::handler::Handler;
use crate::error::{Error, Result};

/// Terminal handler that records events in dispatch order
#[derive(Debug)]
pub struct Recorder<P = serde_json::Value> {
    events: Mutex<Vec<Event<P>>>,
}

impl<P> Default for Recorder<P> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<P> Recorder<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A handler that panicked mid-dispatch must not hide what was recorded
    fn lock(&self) -> MutexGuard<'_, Vec<Event<P>>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: Clone> Recorder<P> {
    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<Event<P>> {
        self.lock().clone()
    }

    /// Most recent event with the given `EventID`
    pub fn find(&self, id: &str) -> Result<Event<P>> {
        self.lock()
            .iter()
            .rev()
            .find(|event| event.id() == id)
            .cloned()
            .ok_or(Error::EventNotFound)
    }
}

impl<P> Handler<P> for Recorder<P> {
    fn handle(&self, event: Event<P>) {
        self.lock().push(event);
    }
}
