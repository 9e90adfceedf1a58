//! Matcher that flags strong `self` captures in trailing closures.
//!
//! # Rationale
//!
//! A trailing closure handed to an escaping callback keeps `self` alive
//! for as long as the callback is retained. Capturing `self` weakly (or
//! unowned) breaks the retain cycle; a bare `self` reference inside the
//! closure body is the usual way the cycle sneaks in.
//!
//! # Configuration
//!
//! - `callee(..)`: restrict the check to specific callee names. With no
//!   names configured, every call with a trailing closure is checked.

use treelint_core::ast::CaptureSpecifier;
use treelint_core::{identifier_references, CallShape, Matcher, Severity, Violation};

/// Matcher code for require-weak-self.
pub const CODE: &str = "TL002";

/// Matcher name for require-weak-self.
pub const NAME: &str = "require-weak-self";

const MESSAGE: &str =
    "closure captures `self` strongly; capture `[weak self]` or `[unowned self]` to avoid a retain cycle";

/// Flags trailing closures that reference `self` without a weak or
/// unowned capture.
#[derive(Debug, Clone)]
pub struct RequireWeakSelf {
    /// Callee names to check. Empty means every call is checked.
    pub callees: Vec<String>,
    /// Severity for emitted violations.
    pub severity: Severity,
}

impl Default for RequireWeakSelf {
    fn default() -> Self {
        Self::new()
    }
}

impl RequireWeakSelf {
    /// Creates a new matcher checking every call with a trailing closure.
    #[must_use]
    pub fn new() -> Self {
        Self {
            callees: Vec::new(),
            severity: Severity::Warning,
        }
    }

    /// Restricts the check to calls with the given callee name. May be
    /// chained to allow several names.
    #[must_use]
    pub fn callee(mut self, name: impl Into<String>) -> Self {
        self.callees.push(name.into());
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Matcher for RequireWeakSelf {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags trailing closures that reference self without a weak or unowned capture"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn detect(&self, call: &CallShape) -> Vec<Violation> {
        if !self.callees.is_empty() {
            match call.callee_name() {
                Some(name) if self.callees.iter().any(|c| c == name) => {}
                _ => return Vec::new(),
            }
        }

        let Some(closure) = call.trailing_closure() else {
            return Vec::new();
        };

        let breaks_cycle = closure.captures().iter().any(|c| {
            c.name == "self"
                && matches!(
                    c.specifier,
                    Some(CaptureSpecifier::Weak | CaptureSpecifier::Unowned)
                )
        });
        if breaks_cycle {
            return Vec::new();
        }

        closure
            .body()
            .iter()
            .flat_map(|stmt| identifier_references(stmt, "self"))
            .map(|span| Violation::new(CODE, NAME, self.severity, span, MESSAGE))
            .collect()
    }
}
