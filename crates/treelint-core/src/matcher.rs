//! Matcher trait for defining pattern detectors.

use crate::query::CallShape;
use crate::types::{Severity, Violation};

/// A structural pattern detector evaluated at call nodes.
///
/// Implement this trait to recognize one anti-pattern. A matcher is a
/// pure read-only predicate over the call shape it is handed: it never
/// mutates the tree, and returning no violations is the normal outcome,
/// not an error.
///
/// # Example
///
/// ```ignore
/// use treelint_core::{CallShape, Matcher, Severity, Violation};
///
/// pub struct NoForceApply;
///
/// impl Matcher for NoForceApply {
///     fn name(&self) -> &'static str { "no-force-apply" }
///     fn code(&self) -> &'static str { "TL009" }
///
///     fn detect(&self, call: &CallShape) -> Vec<Violation> {
///         if call.callee_name() == Some("forceApply") {
///             vec![Violation::new(
///                 self.code(),
///                 self.name(),
///                 self.default_severity(),
///                 call.span(),
///                 "forceApply bypasses validation",
///             )]
///         } else {
///             Vec::new()
///         }
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Returns the kebab-case name of this matcher (e.g., "no-shadowed-accumulator").
    fn name(&self) -> &'static str;

    /// Returns the matcher code (e.g., "TL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this matcher detects.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this matcher.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Evaluates this matcher against one call node.
    ///
    /// # Returns
    ///
    /// All violations the pattern produces at this call, in source
    /// order. An empty vector means the pattern did not match.
    fn detect(&self, call: &CallShape) -> Vec<Violation>;
}

/// Type alias for boxed Matcher trait objects.
pub type MatcherBox = Box<dyn Matcher>;
