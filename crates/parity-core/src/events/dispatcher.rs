//! `EventDispatcher`: fans events out to registered handlers in order.

use std::sync::Arc;

use crate::errors::ParityError;
use crate::types::{Identifier, SymbolPath};

use super::handler::{ParityEventHandler, RunFinished, RunStarted};

#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ParityEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn ParityEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn emit_run_started(&self, event: &RunStarted) {
        for h in &self.handlers {
            h.on_run_started(event);
        }
    }

    pub fn emit_entry_verified(&self, index: usize, group: &SymbolPath, member: &Identifier, value: i64) {
        for h in &self.handlers {
            h.on_entry_verified(index, group, member, value);
        }
    }

    pub fn emit_entry_failed(&self, index: usize, error: &ParityError) {
        for h in &self.handlers {
            h.on_entry_failed(index, error);
        }
    }

    pub fn emit_run_finished(&self, event: &RunFinished) {
        for h in &self.handlers {
            h.on_run_finished(event);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counter {
        verified: AtomicUsize,
        finished: AtomicUsize,
    }

    impl ParityEventHandler for Counter {
        fn on_entry_verified(&self, _: usize, _: &SymbolPath, _: &Identifier, _: i64) {
            self.verified.fetch_add(1, Ordering::SeqCst);
        }

        fn on_run_finished(&self, _: &RunFinished) {
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_dispatch_reaches_every_handler() {
        let a = Arc::new(Counter::default());
        let b = Arc::new(Counter::default());
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(a.clone());
        dispatcher.register(b.clone());

        let group = SymbolPath::parse("Access").unwrap();
        let member = Identifier::new("Random").unwrap();
        dispatcher.emit_entry_verified(0, &group, &member, 0);
        dispatcher.emit_run_finished(&RunFinished { checked: 1, passed: 1, failed: 0 });

        assert_eq!(a.verified.load(Ordering::SeqCst), 1);
        assert_eq!(b.finished.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.handler_count(), 2);
    }
}
