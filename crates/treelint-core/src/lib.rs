//! # treelint-core
//!
//! Core engine for syntax-tree pattern matching and violation reporting.
//!
//! The engine consumes an already-built immutable syntax tree from an
//! external parser, walks it once, evaluates registered pattern
//! matchers at every call node, and hands the ordered violations back
//! to the host. It includes:
//!
//! - [`SyntaxNode`] / [`NodeKind`] — the tree data model
//! - [`CallShape`], [`ClosureShape`], [`VariableBinding`] — query views
//! - [`Matcher`] trait for pattern detectors
//! - [`Engine`] for orchestrating one traversal
//! - [`DiagnosticCollector`] / [`Violation`] for reporting
//!
//! ## Example
//!
//! ```ignore
//! use treelint_core::Engine;
//!
//! let engine = Engine::builder()
//!     .matcher(MyMatcher::new())
//!     .config(config)
//!     .build();
//!
//! let collector = engine.run(&tree);
//! for violation in collector.all() {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
mod collector;
mod config;
mod engine;
mod matcher;
mod query;
mod types;
mod visitor;

pub use ast::{NodeKind, SyntaxNode};
pub use collector::DiagnosticCollector;
pub use config::{Config, ConfigError, MatcherConfig};
pub use engine::{Engine, EngineBuilder};
pub use matcher::{Matcher, MatcherBox};
pub use query::{
    declarations_in, identifier_references, CallShape, ClosureShape, VariableBinding,
};
pub use types::{Severity, Span, Violation, ViolationDiagnostic};
pub use visitor::visit;
