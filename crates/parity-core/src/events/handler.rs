//! `ParityEventHandler`: every method defaults to a no-op.

use crate::config::FailurePolicy;
use crate::errors::ParityError;
use crate::types::{Identifier, SymbolPath};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStarted {
    pub entries: usize,
    pub policy: FailurePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFinished {
    pub checked: usize,
    pub passed: usize,
    pub failed: usize,
}

pub trait ParityEventHandler: Send + Sync {
    fn on_run_started(&self, _event: &RunStarted) {}

    fn on_entry_verified(&self, _index: usize, _group: &SymbolPath, _member: &Identifier, _value: i64) {}

    fn on_entry_failed(&self, _index: usize, _error: &ParityError) {}

    fn on_run_finished(&self, _event: &RunFinished) {}
}
