//! Tree query primitives.
//!
//! Pure borrowing views over [`SyntaxNode`]s. Every accessor that cannot
//! resolve its target returns `None` or an empty sequence; a failed
//! query is normal control flow, never an error. Nothing here mutates
//! the tree or allocates persistent state.

use crate::ast::{Argument, CallExpr, Capture, ClosureExpr, NodeKind, ParameterList, SyntaxNode, VarDecl};
use crate::types::Span;

/// A read-only view over a call node.
#[derive(Debug, Clone, Copy)]
pub struct CallShape<'a> {
    node: &'a SyntaxNode,
    call: &'a CallExpr,
}

impl<'a> CallShape<'a> {
    /// Views a node as a call. Returns `None` for any other node kind.
    #[must_use]
    pub fn from_node(node: &'a SyntaxNode) -> Option<Self> {
        match &node.kind {
            NodeKind::Call(call) => Some(Self { node, call }),
            _ => None,
        }
    }

    /// Span of the whole call expression.
    #[must_use]
    pub fn span(&self) -> Span {
        self.node.span
    }

    /// Resolves the name being called.
    ///
    /// Works for bare identifiers (`reduce(..)`) and member accesses
    /// (`input.reduce(..)`). Computed callees (e.g. the result of
    /// another call) cannot be named and yield `None`.
    #[must_use]
    pub fn callee_name(&self) -> Option<&'a str> {
        match &self.call.callee.kind {
            NodeKind::Identifier(name) => Some(name),
            NodeKind::Member { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The ordered argument list.
    #[must_use]
    pub fn arguments(&self) -> &'a [Argument] {
        &self.call.arguments
    }

    /// Label of the argument at `index`, if both exist.
    #[must_use]
    pub fn argument_label(&self, index: usize) -> Option<&'a str> {
        self.call.arguments.get(index)?.label.as_deref()
    }

    /// The call's trailing closure.
    ///
    /// Only succeeds when the last argument's expression is literally a
    /// closure node; a reference to a closure stored elsewhere does not
    /// count.
    #[must_use]
    pub fn trailing_closure(&self) -> Option<ClosureShape<'a>> {
        let last = self.call.arguments.last()?;
        ClosureShape::from_node(&last.value)
    }
}

/// A read-only view over a closure literal.
#[derive(Debug, Clone, Copy)]
pub struct ClosureShape<'a> {
    node: &'a SyntaxNode,
    closure: &'a ClosureExpr,
}

impl<'a> ClosureShape<'a> {
    /// Views a node as a closure literal. Returns `None` otherwise.
    #[must_use]
    pub fn from_node(node: &'a SyntaxNode) -> Option<Self> {
        match &node.kind {
            NodeKind::Closure(closure) => Some(Self { node, closure }),
            _ => None,
        }
    }

    /// Span of the whole closure literal.
    #[must_use]
    pub fn span(&self) -> Span {
        self.node.span
    }

    /// First positional parameter name, when the signature uses
    /// unannotated shorthand parameters.
    ///
    /// Returns `None` when the closure has no explicit parameter list or
    /// uses typed/destructured parameters, which name queries cannot
    /// reason about.
    #[must_use]
    pub fn first_shorthand_parameter(&self) -> Option<&'a str> {
        match &self.closure.parameters {
            ParameterList::Shorthand(params) => params.first().map(|p| p.name.as_str()),
            ParameterList::Absent | ParameterList::Patterned => None,
        }
    }

    /// The closure's immediate body statements.
    #[must_use]
    pub fn body(&self) -> &'a [SyntaxNode] {
        &self.closure.body
    }

    /// The closure's explicit capture list.
    #[must_use]
    pub fn captures(&self) -> &'a [Capture] {
        &self.closure.captures
    }
}

/// A read-only view over one local variable declaration.
#[derive(Debug, Clone, Copy)]
pub struct VariableBinding<'a> {
    decl: &'a VarDecl,
}

impl<'a> VariableBinding<'a> {
    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.decl.name
    }

    /// Span of the declared name token.
    #[must_use]
    pub fn name_span(&self) -> Span {
        self.decl.name_span
    }

    /// Whether the binding is reassignable.
    #[must_use]
    pub fn is_mutable(&self) -> bool {
        self.decl.mutable
    }

    /// The initializer's identifier name, when the initializer is a bare
    /// identifier reference.
    ///
    /// This is textual identifier equality, not scope resolution:
    /// `var x = acc` resolves to `acc`, while `var x = acc.copy()` or a
    /// missing initializer resolve to `None`.
    #[must_use]
    pub fn initializer_identifier(&self) -> Option<&'a str> {
        match &self.decl.initializer.as_deref()?.kind {
            NodeKind::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

/// Lazily yields the variable declarations directly inside a statement
/// list.
///
/// Deliberately non-recursive: declarations inside nested closures or
/// other sub-expressions are out of scope, only the immediate body
/// counts.
pub fn declarations_in(
    statements: &[SyntaxNode],
) -> impl Iterator<Item = VariableBinding<'_>> + '_ {
    statements.iter().filter_map(|stmt| match &stmt.kind {
        NodeKind::VarDecl(decl) => Some(VariableBinding { decl }),
        _ => None,
    })
}

/// Collects the spans of every reference to `name` under `node`, in
/// source order.
///
/// Recurses through sub-expressions but stops at nested closures that
/// rebind `name` (through their capture list or a shorthand parameter),
/// since references inside those refer to the rebound value.
#[must_use]
pub fn identifier_references(node: &SyntaxNode, name: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    collect_references(node, name, &mut spans);
    spans
}

fn collect_references(node: &SyntaxNode, name: &str, spans: &mut Vec<Span>) {
    match &node.kind {
        NodeKind::Identifier(ident) if ident == name => spans.push(node.span),
        NodeKind::Closure(closure) if rebinds(closure, name) => return,
        _ => {}
    }
    for child in node.children() {
        collect_references(child, name, spans);
    }
}

fn rebinds(closure: &ClosureExpr, name: &str) -> bool {
    if closure.captures.iter().any(|c| c.name == name) {
        return true;
    }
    match &closure.parameters {
        ParameterList::Shorthand(params) => params.iter().any(|p| p.name == name),
        ParameterList::Absent | ParameterList::Patterned => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ShorthandParam;

    fn sp(offset: usize) -> Span {
        Span::new(offset, 1)
    }

    fn reduce_call(second: SyntaxNode) -> SyntaxNode {
        SyntaxNode::call(
            Span::new(0, 40),
            SyntaxNode::member(sp(0), SyntaxNode::identifier(sp(0), "input"), "reduce"),
            vec![
                Argument::unlabeled(SyntaxNode::int(sp(10), 0)),
                Argument::unlabeled(second),
            ],
        )
    }

    #[test]
    fn from_node_rejects_non_calls() {
        let ident = SyntaxNode::identifier(sp(0), "x");
        assert!(CallShape::from_node(&ident).is_none());
    }

    #[test]
    fn callee_name_resolves_member_and_identifier() {
        let member_call = reduce_call(SyntaxNode::int(sp(12), 1));
        let shape = CallShape::from_node(&member_call).expect("call");
        assert_eq!(shape.callee_name(), Some("reduce"));

        let free_call = SyntaxNode::call(
            Span::new(0, 10),
            SyntaxNode::identifier(sp(0), "reduce"),
            vec![],
        );
        let shape = CallShape::from_node(&free_call).expect("call");
        assert_eq!(shape.callee_name(), Some("reduce"));
    }

    #[test]
    fn callee_name_fails_for_computed_callee() {
        let computed = SyntaxNode::call(
            Span::new(0, 20),
            SyntaxNode::call(sp(0), SyntaxNode::identifier(sp(0), "make"), vec![]),
            vec![],
        );
        let shape = CallShape::from_node(&computed).expect("call");
        assert_eq!(shape.callee_name(), None);
    }

    #[test]
    fn trailing_closure_requires_literal_closure() {
        let with_closure = reduce_call(SyntaxNode::closure(
            Span::new(12, 20),
            vec![],
            ParameterList::Absent,
            vec![],
        ));
        let shape = CallShape::from_node(&with_closure).expect("call");
        assert!(shape.trailing_closure().is_some());

        let with_reference = reduce_call(SyntaxNode::identifier(sp(12), "combiner"));
        let shape = CallShape::from_node(&with_reference).expect("call");
        assert!(shape.trailing_closure().is_none());
    }

    #[test]
    fn first_shorthand_parameter_rejects_patterned_signatures() {
        let shorthand = SyntaxNode::closure(
            Span::new(0, 10),
            vec![],
            ParameterList::Shorthand(vec![
                ShorthandParam::new("acc", sp(2)),
                ShorthandParam::new("x", sp(7)),
            ]),
            vec![],
        );
        let shape = ClosureShape::from_node(&shorthand).expect("closure");
        assert_eq!(shape.first_shorthand_parameter(), Some("acc"));

        let patterned = SyntaxNode::closure(Span::new(0, 10), vec![], ParameterList::Patterned, vec![]);
        let shape = ClosureShape::from_node(&patterned).expect("closure");
        assert_eq!(shape.first_shorthand_parameter(), None);
    }

    #[test]
    fn declarations_in_is_immediate_scope_only() {
        let nested = SyntaxNode::closure(
            Span::new(10, 20),
            vec![],
            ParameterList::Absent,
            vec![SyntaxNode::var_decl(sp(12), "inner", sp(16), true, None)],
        );
        let statements = vec![
            SyntaxNode::var_decl(sp(0), "outer", sp(4), false, None),
            nested,
        ];
        let names: Vec<&str> = declarations_in(&statements).map(|b| b.name()).collect();
        assert_eq!(names, vec!["outer"]);
    }

    #[test]
    fn declarations_in_is_restartable() {
        let statements = vec![SyntaxNode::var_decl(sp(0), "a", sp(4), true, None)];
        assert_eq!(declarations_in(&statements).count(), 1);
        assert_eq!(declarations_in(&statements).count(), 1);
    }

    #[test]
    fn initializer_identifier_requires_bare_identifier() {
        let bare = SyntaxNode::var_decl(
            sp(0),
            "copy",
            sp(4),
            true,
            Some(SyntaxNode::identifier(sp(11), "acc")),
        );
        let binding = declarations_in(std::slice::from_ref(&bare))
            .next()
            .expect("binding");
        assert_eq!(binding.initializer_identifier(), Some("acc"));

        let computed = SyntaxNode::var_decl(
            sp(0),
            "copy",
            sp(4),
            true,
            Some(SyntaxNode::binary(
                sp(11),
                SyntaxNode::identifier(sp(11), "acc"),
                "+",
                SyntaxNode::int(sp(17), 1),
            )),
        );
        let binding = declarations_in(std::slice::from_ref(&computed))
            .next()
            .expect("binding");
        assert_eq!(binding.initializer_identifier(), None);
    }

    #[test]
    fn identifier_references_stop_at_rebinding_closures() {
        let shielded = SyntaxNode::closure(
            Span::new(20, 10),
            vec![Capture::weak("self")],
            ParameterList::Absent,
            vec![SyntaxNode::identifier(sp(24), "self")],
        );
        let open = SyntaxNode::closure(
            Span::new(40, 10),
            vec![],
            ParameterList::Absent,
            vec![SyntaxNode::identifier(sp(44), "self")],
        );
        let body = SyntaxNode::closure(
            Span::new(0, 60),
            vec![],
            ParameterList::Absent,
            vec![SyntaxNode::identifier(sp(2), "self"), shielded, open],
        );

        let spans = identifier_references(&body, "self");
        let offsets: Vec<usize> = spans.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![2, 44]);
    }
}
