//! Diagnostic collector accumulated during one traversal.

use crate::types::{Severity, Violation};
use serde::{Deserialize, Serialize};

/// An append-only ordered sequence of violations from one analysis pass.
///
/// Created fresh per pass by the engine, filled in traversal order, and
/// handed to the host after the walk completes. No deduplication is
/// performed: two matchers reporting the same span both surface, and the
/// host is free to collapse them.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DiagnosticCollector {
    violations: Vec<Violation>,
}

impl DiagnosticCollector {
    /// Creates a new empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation, taking ownership of it.
    pub fn append(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// All collected violations, in traversal order.
    #[must_use]
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the collector, returning the ordered violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Number of collected violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if nothing was collected. An empty pass is a
    /// successful pass.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if there are any error-level violations.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns violations filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Counts violations as (errors, warnings).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        let warnings = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
            .count();
        (errors, warnings)
    }

    /// Formats a summary report for terminal output.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for violation in &self.violations {
            let _ = write!(report, "{}", violation.format());
        }

        let (errors, warnings) = self.count_by_severity();
        let _ = writeln!(report, "\nFound {errors} error(s), {warnings} warning(s)");
        report
    }
}
