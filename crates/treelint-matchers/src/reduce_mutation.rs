//! Matcher that flags mutable shadowing of a reduce accumulator.
//!
//! # Rationale
//!
//! Re-declaring the accumulator parameter as a mutable local
//! (`var acc = acc`) inside a `reduce` closure copies the carried value
//! so it can be reassigned, which defeats the point of the fold: the
//! accumulating variant (`reduce(into:)`) mutates in place without the
//! copy. The accumulating variant itself is exempt, since its mutation
//! is by design.
//!
//! # Limitations
//!
//! Detection is by identifier equality on raw names, not data-flow
//! resolution. A renamed intermediate alias (`let tmp = acc; var acc =
//! tmp`) is not tracked and will not be reported.

use treelint_core::{declarations_in, CallShape, Matcher, Severity, Violation};

/// Matcher code for no-shadowed-accumulator.
pub const CODE: &str = "TL001";

/// Matcher name for no-shadowed-accumulator.
pub const NAME: &str = "no-shadowed-accumulator";

const MESSAGE: &str =
    "reduce accumulator is shadowed by a mutable local binding; use the accumulating variant to mutate in place";

/// Flags `reduce` closures that re-declare the accumulator parameter as
/// a mutable binding.
#[derive(Debug, Clone)]
pub struct NoShadowedAccumulator {
    /// Severity for emitted violations.
    pub severity: Severity,
}

impl Default for NoShadowedAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl NoShadowedAccumulator {
    /// Creates a new matcher with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Matcher for NoShadowedAccumulator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags reduce closures that shadow the accumulator with a mutable binding"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn detect(&self, call: &CallShape) -> Vec<Violation> {
        if call.callee_name() != Some("reduce") {
            return Vec::new();
        }

        let arguments = call.arguments();
        if arguments.len() != 2 {
            return Vec::new();
        }

        // The accumulating variant labels its first argument `into` and
        // mutates in place by design. The exemption is purely syntactic:
        // only the label is checked, never the argument itself.
        if call.argument_label(0) == Some("into") {
            return Vec::new();
        }

        let Some(closure) = call.trailing_closure() else {
            return Vec::new();
        };

        // Typed or destructured signatures leave the accumulator name
        // unresolvable; without a name there is nothing to compare.
        let Some(accumulator) = closure.first_shorthand_parameter() else {
            return Vec::new();
        };

        declarations_in(closure.body())
            .filter(|binding| {
                binding.is_mutable() && binding.initializer_identifier() == Some(accumulator)
            })
            .map(|binding| {
                Violation::new(CODE, NAME, self.severity, binding.name_span(), MESSAGE)
            })
            .collect()
    }
}
