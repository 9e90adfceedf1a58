//! Matcher presets for common configurations.

use crate::{NoShadowedAccumulator, RequireWeakSelf};
use treelint_core::MatcherBox;

/// Returns the recommended set of matchers.
///
/// Includes:
/// - `no-shadowed-accumulator` (TL001) - Flags mutable accumulator shadowing in reduce closures
#[must_use]
pub fn recommended_matchers() -> Vec<MatcherBox> {
    vec![Box::new(NoShadowedAccumulator::new())]
}

/// Returns all available matchers.
///
/// Adds to the recommended set:
/// - `require-weak-self` (TL002) - Flags strong self captures in trailing closures
#[must_use]
pub fn all_matchers() -> Vec<MatcherBox> {
    vec![
        Box::new(NoShadowedAccumulator::new()),
        Box::new(RequireWeakSelf::new()),
    ]
}
