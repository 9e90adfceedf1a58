//! Core types for violations and severities.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

/// Severity level for violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A byte range in the analyzed source.
///
/// Offsets are produced by the external parser when it builds the tree.
/// Mapping an offset back to line/column is the host's concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// Length of the range in bytes.
    pub len: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

/// A violation found during analysis.
///
/// Immutable once created; ownership moves into the
/// [`DiagnosticCollector`](crate::DiagnosticCollector). The span always
/// points at the offending reference itself (e.g. a re-declared name),
/// never at the root node of the matched pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Matcher code (e.g., "TL001").
    pub code: String,
    /// Matcher name (e.g., "no-shadowed-accumulator").
    pub matcher: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Span of the offending reference.
    pub span: Span,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        matcher: impl Into<String>,
        severity: Severity,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            matcher: matcher.into(),
            severity,
            span,
            message: message.into(),
        }
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "{} {} at offset {}\n  {}: {}\n",
            self.code, self.matcher, self.span.offset, self.severity, self.message
        )
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "offset {}: {} [{}] {}",
            self.span.offset, self.severity, self.code, self.message
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            span: SourceSpan::from((v.span.offset, v.span.len)),
            label_message: v.matcher.clone(),
        }
    }
}
