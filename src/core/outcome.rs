//! Invocation outcomes and the per-run report
//!
//! An export invocation either succeeds or fails; there is a single failure
//! category regardless of whether the exporter could not be launched or ran
//! and exited unsuccessfully. The detail text carries the difference.

use crate::domain::ModelId;
use thiserror::Error;

/// A failed export invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to export model {model}: {detail}")]
pub struct ExportFailure {
    /// Model whose export failed
    pub model: ModelId,

    /// Human-readable description of what went wrong
    pub detail: String,
}

impl ExportFailure {
    /// Creates a new failure for `model`
    pub fn new(model: ModelId, detail: impl Into<String>) -> Self {
        Self {
            model,
            detail: detail.into(),
        }
    }
}

/// Result of one exporter invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// The exporter exited successfully
    Succeeded,

    /// The exporter could not be launched or exited unsuccessfully
    Failed(ExportFailure),
}

impl InvocationOutcome {
    /// Returns true for `Succeeded`
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Succeeded)
    }

    /// Returns the failure, if any
    pub fn failure(&self) -> Option<&ExportFailure> {
        match self {
            InvocationOutcome::Succeeded => None,
            InvocationOutcome::Failed(failure) => Some(failure),
        }
    }
}

/// Ordered record of every invocation in a run
///
/// The CLI never prints a tally from this; it exists for library callers.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    outcomes: Vec<(ModelId, InvocationOutcome)>,
}

impl RunReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the outcome for `model`
    pub fn record(&mut self, model: ModelId, outcome: InvocationOutcome) {
        self.outcomes.push((model, outcome));
    }

    /// Outcomes in invocation order
    pub fn outcomes(&self) -> &[(ModelId, InvocationOutcome)] {
        &self.outcomes
    }

    /// Number of invocations attempted
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Failures in invocation order
    pub fn failures(&self) -> impl Iterator<Item = &ExportFailure> {
        self.outcomes.iter().filter_map(|(_, o)| o.failure())
    }

    /// Returns true if no invocation failed
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|(_, o)| o.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ModelId {
        ModelId::new(s).unwrap()
    }

    #[test]
    fn test_failure_display_names_model_and_detail() {
        let failure = ExportFailure::new(id("B"), "returned non-zero exit status 1");
        assert_eq!(
            failure.to_string(),
            "Failed to export model B: returned non-zero exit status 1"
        );
    }

    #[test]
    fn test_report_tracks_order_and_failures() {
        let mut report = RunReport::new();
        report.record(id("A"), InvocationOutcome::Succeeded);
        report.record(
            id("B"),
            InvocationOutcome::Failed(ExportFailure::new(id("B"), "boom")),
        );
        report.record(id("C"), InvocationOutcome::Succeeded);

        assert_eq!(report.attempted(), 3);
        assert!(!report.all_succeeded());
        let failed: Vec<&str> = report.failures().map(|f| f.model.as_str()).collect();
        assert_eq!(failed, vec!["B"]);
    }

    #[test]
    fn test_empty_report_all_succeeded() {
        let report = RunReport::new();
        assert_eq!(report.attempted(), 0);
        assert!(report.all_succeeded());
    }
}
