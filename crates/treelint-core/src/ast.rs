//! Syntax-tree data model.
//!
//! The tree is produced by an external parser and handed to the engine
//! as an immutable value; the engine only ever borrows it. Node kinds
//! form a closed tagged union over the analyzed grammar: calls,
//! closures, variable declarations, identifier references, and the
//! expression shapes needed to carry them.

use crate::types::Span;

/// One node of the externally built syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Byte range this node covers in the source.
    pub span: Span,
    /// The node's shape.
    pub kind: NodeKind,
}

/// The closed set of node shapes the engine understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A function or method call.
    Call(CallExpr),
    /// A closure literal.
    Closure(ClosureExpr),
    /// A local variable declaration.
    VarDecl(VarDecl),
    /// A bare identifier reference.
    Identifier(String),
    /// A member access (`base.name`).
    Member {
        /// Expression the member is accessed on.
        base: Box<SyntaxNode>,
        /// Member name.
        name: String,
    },
    /// A literal value.
    Literal(Literal),
    /// An assignment statement (`target = value`).
    Assign {
        /// Assignment target.
        target: Box<SyntaxNode>,
        /// Assigned value.
        value: Box<SyntaxNode>,
    },
    /// A binary operation (`lhs op rhs`).
    Binary {
        /// Left operand.
        lhs: Box<SyntaxNode>,
        /// Operator token text.
        op: String,
        /// Right operand.
        rhs: Box<SyntaxNode>,
    },
    /// A return statement with an optional value.
    Return(Option<Box<SyntaxNode>>),
}

/// A call expression: callee plus labeled arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    /// The expression being called.
    pub callee: Box<SyntaxNode>,
    /// Ordered argument list.
    pub arguments: Vec<Argument>,
}

/// One call argument: an optional label and the argument expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Argument label, if the call site spells one.
    pub label: Option<String>,
    /// The argument expression.
    pub value: SyntaxNode,
}

impl Argument {
    /// Creates an unlabeled argument.
    #[must_use]
    pub fn unlabeled(value: SyntaxNode) -> Self {
        Self { label: None, value }
    }

    /// Creates a labeled argument.
    #[must_use]
    pub fn labeled(label: impl Into<String>, value: SyntaxNode) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }
}

/// A closure literal: capture list, parameter signature, body statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureExpr {
    /// Explicit capture list, in declaration order.
    pub captures: Vec<Capture>,
    /// Parameter signature.
    pub parameters: ParameterList,
    /// Body statements, in source order.
    pub body: Vec<SyntaxNode>,
}

/// A closure's parameter signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterList {
    /// No explicit parameter list was written.
    Absent,
    /// Bare positional names with no type annotations.
    Shorthand(Vec<ShorthandParam>),
    /// Typed or destructured parameters; opaque to name queries.
    Patterned,
}

/// One shorthand closure parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShorthandParam {
    /// Parameter name.
    pub name: String,
    /// Span of the name token.
    pub span: Span,
}

impl ShorthandParam {
    /// Creates a shorthand parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// One entry in a closure capture list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Ownership specifier, if one was written.
    pub specifier: Option<CaptureSpecifier>,
    /// Captured name.
    pub name: String,
}

impl Capture {
    /// Creates a strong (unspecified) capture.
    #[must_use]
    pub fn strong(name: impl Into<String>) -> Self {
        Self {
            specifier: None,
            name: name.into(),
        }
    }

    /// Creates a weak capture.
    #[must_use]
    pub fn weak(name: impl Into<String>) -> Self {
        Self {
            specifier: Some(CaptureSpecifier::Weak),
            name: name.into(),
        }
    }

    /// Creates an unowned capture.
    #[must_use]
    pub fn unowned(name: impl Into<String>) -> Self {
        Self {
            specifier: Some(CaptureSpecifier::Unowned),
            name: name.into(),
        }
    }
}

/// Ownership specifier on a capture-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSpecifier {
    /// `weak` capture.
    Weak,
    /// `unowned` capture.
    Unowned,
}

/// A local variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    /// Declared name.
    pub name: String,
    /// Span of the declared name token, distinct from the whole
    /// declaration's span so reports can point at the name itself.
    pub name_span: Span,
    /// Whether the binding is reassignable.
    pub mutable: bool,
    /// Initializer expression, if present.
    pub initializer: Option<Box<SyntaxNode>>,
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Integer literal.
    Int(i64),
    /// String literal.
    Str(String),
    /// Boolean literal.
    Bool(bool),
}

impl SyntaxNode {
    /// Creates a node from a span and kind.
    #[must_use]
    pub fn new(span: Span, kind: NodeKind) -> Self {
        Self { span, kind }
    }

    /// Creates an identifier reference node.
    #[must_use]
    pub fn identifier(span: Span, name: impl Into<String>) -> Self {
        Self::new(span, NodeKind::Identifier(name.into()))
    }

    /// Creates a member-access node.
    #[must_use]
    pub fn member(span: Span, base: SyntaxNode, name: impl Into<String>) -> Self {
        Self::new(
            span,
            NodeKind::Member {
                base: Box::new(base),
                name: name.into(),
            },
        )
    }

    /// Creates a call node.
    #[must_use]
    pub fn call(span: Span, callee: SyntaxNode, arguments: Vec<Argument>) -> Self {
        Self::new(
            span,
            NodeKind::Call(CallExpr {
                callee: Box::new(callee),
                arguments,
            }),
        )
    }

    /// Creates a closure literal node.
    #[must_use]
    pub fn closure(
        span: Span,
        captures: Vec<Capture>,
        parameters: ParameterList,
        body: Vec<SyntaxNode>,
    ) -> Self {
        Self::new(
            span,
            NodeKind::Closure(ClosureExpr {
                captures,
                parameters,
                body,
            }),
        )
    }

    /// Creates a variable-declaration node.
    #[must_use]
    pub fn var_decl(
        span: Span,
        name: impl Into<String>,
        name_span: Span,
        mutable: bool,
        initializer: Option<SyntaxNode>,
    ) -> Self {
        Self::new(
            span,
            NodeKind::VarDecl(VarDecl {
                name: name.into(),
                name_span,
                mutable,
                initializer: initializer.map(Box::new),
            }),
        )
    }

    /// Creates an integer-literal node.
    #[must_use]
    pub fn int(span: Span, value: i64) -> Self {
        Self::new(span, NodeKind::Literal(Literal::Int(value)))
    }

    /// Creates an assignment node.
    #[must_use]
    pub fn assign(span: Span, target: SyntaxNode, value: SyntaxNode) -> Self {
        Self::new(
            span,
            NodeKind::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
        )
    }

    /// Creates a binary-operation node.
    #[must_use]
    pub fn binary(span: Span, lhs: SyntaxNode, op: impl Into<String>, rhs: SyntaxNode) -> Self {
        Self::new(
            span,
            NodeKind::Binary {
                lhs: Box::new(lhs),
                op: op.into(),
                rhs: Box::new(rhs),
            },
        )
    }

    /// Creates a return-statement node.
    #[must_use]
    pub fn ret(span: Span, value: Option<SyntaxNode>) -> Self {
        Self::new(span, NodeKind::Return(value.map(Box::new)))
    }

    /// Returns this node's direct children in left-to-right source order.
    ///
    /// Traversal over the whole tree is built on this single seam, which
    /// keeps visit order deterministic.
    #[must_use]
    pub fn children(&self) -> Vec<&SyntaxNode> {
        match &self.kind {
            NodeKind::Call(call) => {
                let mut out = vec![call.callee.as_ref()];
                out.extend(call.arguments.iter().map(|a| &a.value));
                out
            }
            NodeKind::Closure(closure) => closure.body.iter().collect(),
            NodeKind::VarDecl(decl) => decl
                .initializer
                .as_deref()
                .map(|init| vec![init])
                .unwrap_or_default(),
            NodeKind::Member { base, .. } => vec![base.as_ref()],
            NodeKind::Assign { target, value } => vec![target.as_ref(), value.as_ref()],
            NodeKind::Binary { lhs, rhs, .. } => vec![lhs.as_ref(), rhs.as_ref()],
            NodeKind::Return(value) => value.as_deref().map(|v| vec![v]).unwrap_or_default(),
            NodeKind::Identifier(_) | NodeKind::Literal(_) => Vec::new(),
        }
    }
}
