//! Engine orchestrating matcher execution over one tree.

use crate::collector::DiagnosticCollector;
use crate::config::Config;
use crate::matcher::{Matcher, MatcherBox};
use crate::query::CallShape;
use crate::visitor::visit;
use crate::SyntaxNode;

use tracing::{debug, info};

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    matchers: Vec<MatcherBox>,
    config: Option<Config>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a matcher. Matchers run in registration order at every
    /// call node.
    #[must_use]
    pub fn matcher<M: Matcher + 'static>(mut self, matcher: M) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    /// Registers a boxed matcher.
    #[must_use]
    pub fn matcher_box(mut self, matcher: MatcherBox) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            matchers: self.matchers,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs every registered matcher over one syntax tree.
///
/// The engine holds no state across runs: each [`Engine::run`] walks the
/// tree once, fills a fresh [`DiagnosticCollector`], and returns it. The
/// tree is only borrowed and never mutated. A run cannot fail; a walk
/// that matches nothing returns an empty collector.
///
/// Use [`Engine::builder()`] to construct an instance.
pub struct Engine {
    matchers: Vec<MatcherBox>,
    config: Config,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered matchers.
    #[must_use]
    pub fn matcher_count(&self) -> usize {
        self.matchers.len()
    }

    /// Walks the tree rooted at `root` and collects violations.
    ///
    /// Every call node is visited exactly once, in depth-first
    /// left-to-right order; at each one, every enabled matcher runs in
    /// registration order and its violations are appended with any
    /// configured severity override applied.
    pub fn run(&self, root: &SyntaxNode) -> DiagnosticCollector {
        debug!("starting traversal with {} matcher(s)", self.matchers.len());

        let mut collector = DiagnosticCollector::new();
        visit(root, &mut |node| {
            let Some(call) = CallShape::from_node(node) else {
                return;
            };
            for matcher in &self.matchers {
                if !self.config.is_matcher_enabled(matcher.name()) {
                    debug!("skipping disabled matcher: {}", matcher.name());
                    continue;
                }

                let mut violations = matcher.detect(&call);
                if let Some(severity) = self.config.matcher_severity(matcher.name()) {
                    for v in &mut violations {
                        v.severity = severity;
                    }
                }
                for v in violations {
                    collector.append(v);
                }
            }
        });

        info!("traversal complete: {} violation(s)", collector.len());
        collector
    }
}
