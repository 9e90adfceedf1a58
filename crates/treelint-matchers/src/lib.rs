//! # treelint-matchers
//!
//! Built-in pattern matchers for treelint.
//!
//! ## Available Matchers
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TL001 | `no-shadowed-accumulator` | Flags mutable re-declaration of a reduce accumulator |
//! | TL002 | `require-weak-self` | Flags strong `self` captures in trailing closures |
//!
//! ## Usage
//!
//! ```ignore
//! use treelint_core::Engine;
//! use treelint_matchers::{NoShadowedAccumulator, RequireWeakSelf};
//!
//! let engine = Engine::builder()
//!     .matcher(NoShadowedAccumulator::new())
//!     .matcher(RequireWeakSelf::new())
//!     .build();
//! let collector = engine.run(&tree);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod presets;
mod reduce_mutation;
mod weak_self_capture;

pub use presets::{all_matchers, recommended_matchers};
pub use reduce_mutation::NoShadowedAccumulator;
pub use weak_self_capture::RequireWeakSelf;

/// Re-export core types for convenience.
pub use treelint_core::{Matcher, Severity, Violation};
