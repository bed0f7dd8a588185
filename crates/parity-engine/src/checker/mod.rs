//! Parity checker: walks the registry in order, resolves each entry, and
//! compares the two integers by exact equality.
//!
//! Fail-fast by default: the first failing entry in registry order ends the
//! run. `FailurePolicy::CollectAll` checks every entry instead (optionally
//! capped by `max_failures`) and reports all failures together.

mod report;

pub use report::{EntryFailure, VerificationReport, VerificationSummary};

use parity_core::config::{FailurePolicy, VerificationConfig};
use parity_core::events::{EventDispatcher, RunFinished, RunStarted};
use parity_core::types::collections::FxHashSet;
use parity_core::{BindingRuntime, ParityError};

use crate::registry::{MappingEntry, MappingRegistry};
use crate::resolver::ValueResolver;

pub struct ParityChecker<'r> {
    resolver: ValueResolver<'r>,
    policy: FailurePolicy,
    max_failures: Option<usize>,
    dispatcher: EventDispatcher,
}

impl<'r> ParityChecker<'r> {
    /// Fail-fast checker with no event handlers.
    pub fn new(runtime: &'r dyn BindingRuntime) -> Self {
        Self {
            resolver: ValueResolver::new(runtime),
            policy: FailurePolicy::default(),
            max_failures: None,
            dispatcher: EventDispatcher::new(),
        }
    }

    pub fn from_config(runtime: &'r dyn BindingRuntime, config: &VerificationConfig) -> Self {
        Self::new(runtime)
            .with_policy(config.failure_policy)
            .with_max_failures(config.max_failures)
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Cap on collected failures. Ignored under fail-fast.
    pub fn with_max_failures(mut self, max_failures: Option<usize>) -> Self {
        self.max_failures = max_failures;
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn with_resolver(mut self, resolver: ValueResolver<'r>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Check one entry. Returns the binding's value when it matches.
    pub fn check_entry(&self, entry: &MappingEntry) -> Result<i64, ParityError> {
        let resolved = self.resolver.resolve_entry(entry)?;
        if resolved.matches() {
            Ok(resolved.binding)
        } else {
            Err(ParityError::ValueMismatch {
                group: entry.binding_group.clone(),
                member: entry.member_name.clone(),
                expected: resolved.native,
                actual: resolved.binding,
            })
        }
    }

    /// Fail-fast verification regardless of the configured policy.
    pub fn verify(&self, registry: &MappingRegistry) -> Result<VerificationSummary, ParityError> {
        let report = self.execute(registry, FailurePolicy::FailFast, None);
        match report.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(VerificationSummary {
                checked: report.checked,
                groups: report.groups,
            }),
        }
    }

    /// Run under the configured policy and return the full report.
    pub fn run(&self, registry: &MappingRegistry) -> VerificationReport {
        self.execute(registry, self.policy, self.max_failures)
    }

    fn execute(
        &self,
        registry: &MappingRegistry,
        policy: FailurePolicy,
        max_failures: Option<usize>,
    ) -> VerificationReport {
        let _span = tracing::info_span!("parity_run", entries = registry.len(), policy = %policy)
            .entered();

        self.dispatcher.emit_run_started(&RunStarted {
            entries: registry.len(),
            policy,
        });

        let mut failures = Vec::new();
        let mut groups = FxHashSet::default();
        let mut checked = 0;

        for (index, entry) in registry.iter().enumerate() {
            checked += 1;
            groups.insert(&entry.binding_group);

            match self.check_entry(entry) {
                Ok(value) => {
                    tracing::debug!(
                        index,
                        group = %entry.binding_group,
                        member = %entry.member_name,
                        value,
                        "mapping verified"
                    );
                    self.dispatcher.emit_entry_verified(
                        index,
                        &entry.binding_group,
                        &entry.member_name,
                        value,
                    );
                }
                Err(error) => {
                    let failure = EntryFailure::new(index, entry, error);
                    tracing::warn!(
                        index,
                        code = failure.code,
                        kind = %failure.kind,
                        "{}",
                        failure.message
                    );
                    self.dispatcher.emit_entry_failed(index, &failure.error);
                    failures.push(failure);

                    let stop = match policy {
                        FailurePolicy::FailFast => true,
                        FailurePolicy::CollectAll => {
                            max_failures.is_some_and(|max| failures.len() >= max)
                        }
                    };
                    if stop {
                        break;
                    }
                }
            }
        }

        let passed = checked - failures.len();
        let report = VerificationReport {
            policy,
            total_entries: registry.len(),
            checked,
            passed,
            groups: groups.len(),
            truncated: checked < registry.len(),
            failures,
        };

        self.dispatcher.emit_run_finished(&RunFinished {
            checked: report.checked,
            passed: report.passed,
            failed: report.failed(),
        });

        if report.is_success() {
            tracing::info!(
                checked = report.checked,
                groups = report.groups,
                "binding parity verified"
            );
        } else {
            tracing::info!(
                checked = report.checked,
                failed = report.failed(),
                truncated = report.truncated,
                "binding parity check failed"
            );
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use parity_core::errors::{AccessorError, ErrorCode, FailureKind};
    use parity_core::events::ParityEventHandler;
    use parity_core::traits::{DynamicGroup, OpaqueGroup};
    use parity_core::{Identifier, SymbolPath, SymbolTable};

    use super::*;

    fn path(s: &str) -> SymbolPath {
        SymbolPath::parse(s).unwrap()
    }

    fn letters() -> SymbolTable {
        SymbolTable::new().with_group(
            DynamicGroup::new(path("Letters"))
                .with_value("A", 1)
                .with_value("B", 3)
                .with_value("C", 6),
        )
    }

    fn letters_registry() -> MappingRegistry {
        MappingRegistry::builder()
            .entry(1, "Letters", "A")
            .entry(2, "Letters", "B")
            .entry(5, "Letters", "C")
            .build()
            .unwrap()
    }

    #[test]
    fn test_first_failure_in_registry_order_is_reported() {
        let rt = letters();
        let err = ParityChecker::new(&rt).verify(&letters_registry()).unwrap_err();
        assert_eq!(
            err,
            ParityError::ValueMismatch {
                group: path("Letters"),
                member: Identifier::new("B").unwrap(),
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_fail_fast_stops_after_first_failure() {
        let rt = letters();
        let report = ParityChecker::new(&rt).run(&letters_registry());
        assert_eq!(report.checked, 2);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed(), 1);
        assert!(report.truncated);
    }

    #[test]
    fn test_collect_all_reports_every_failure() {
        let rt = letters();
        let report = ParityChecker::new(&rt)
            .with_policy(FailurePolicy::CollectAll)
            .run(&letters_registry());
        assert_eq!(report.checked, 3);
        assert!(!report.truncated);
        let indexes: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
        assert_eq!(indexes, vec![1, 2]);
    }

    #[test]
    fn test_collect_all_honours_max_failures() {
        let rt = letters();
        let report = ParityChecker::new(&rt)
            .with_policy(FailurePolicy::CollectAll)
            .with_max_failures(Some(1))
            .run(&letters_registry());
        assert_eq!(report.failed(), 1);
        assert!(report.truncated);
    }

    #[test]
    fn test_access_random_end_to_end() {
        let registry = MappingRegistry::builder()
            .entry(0, "Access", "Random")
            .build()
            .unwrap();

        let good = SymbolTable::new()
            .with_group(DynamicGroup::new(path("Access")).with_value("Random", 0));
        let summary = ParityChecker::new(&good).verify(&registry).unwrap();
        assert_eq!(summary, VerificationSummary { checked: 1, groups: 1 });

        let drifted = SymbolTable::new()
            .with_group(DynamicGroup::new(path("Access")).with_value("Random", 1));
        let err = ParityChecker::new(&drifted).verify(&registry).unwrap_err();
        assert_eq!(err.to_string(), "Access:Random is not equal to expected value (0)");
        assert_eq!(err.kind(), FailureKind::ValueMismatch);
    }

    #[test]
    fn test_structural_defects_are_distinguished() {
        let rt = SymbolTable::new()
            .with_group(OpaqueGroup::new(path("Handle"), ["Default"]))
            .with_group(
                DynamicGroup::new(path("Access"))
                    .with_accessor("Random", || Err(AccessorError::new("boom"))),
            );
        let registry = MappingRegistry::builder()
            .entry(0, "Missing", "X")
            .entry(0, "Handle", "Other")
            .entry(0, "Handle", "Default")
            .entry(0, "Access", "Random")
            .build()
            .unwrap();

        let report = ParityChecker::new(&rt)
            .with_policy(FailurePolicy::CollectAll)
            .run(&registry);
        let kinds: Vec<FailureKind> = report.failures.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FailureKind::UnknownGroup,
                FailureKind::UnknownMember,
                FailureKind::NoAccessor,
                FailureKind::AccessorFailed,
            ]
        );
        assert_eq!(report.drift().count(), 0);
        assert_eq!(report.failures[2].code, "PARITY_NO_ACCESSOR");
    }

    #[test]
    fn test_runs_are_deterministic() {
        let rt = letters();
        let checker = ParityChecker::new(&rt).with_policy(FailurePolicy::CollectAll);
        let first = checker.run(&letters_registry());
        let second = checker.run(&letters_registry());
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_empty_registry_passes() {
        let rt = letters();
        let summary = ParityChecker::new(&rt)
            .verify(&MappingRegistry::default())
            .unwrap();
        assert_eq!(summary.checked, 0);
    }

    #[derive(Default)]
    struct Recorder {
        verified: AtomicUsize,
        failed: Mutex<Vec<usize>>,
        finished: Mutex<Option<RunFinished>>,
    }

    impl ParityEventHandler for Recorder {
        fn on_entry_verified(&self, _: usize, _: &SymbolPath, _: &Identifier, _: i64) {
            self.verified.fetch_add(1, Ordering::SeqCst);
        }

        fn on_entry_failed(&self, index: usize, _: &ParityError) {
            self.failed.lock().unwrap().push(index);
        }

        fn on_run_finished(&self, event: &RunFinished) {
            *self.finished.lock().unwrap() = Some(event.clone());
        }
    }

    #[test]
    fn test_events_follow_the_run() {
        let rt = letters();
        let recorder = Arc::new(Recorder::default());
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(recorder.clone());

        ParityChecker::new(&rt)
            .with_policy(FailurePolicy::CollectAll)
            .with_dispatcher(dispatcher)
            .run(&letters_registry());

        assert_eq!(recorder.verified.load(Ordering::SeqCst), 1);
        assert_eq!(*recorder.failed.lock().unwrap(), vec![1, 2]);
        assert_eq!(
            *recorder.finished.lock().unwrap(),
            Some(RunFinished { checked: 3, passed: 1, failed: 2 })
        );
    }
}
