//! Statement nodes.

use crate::{ExprId, Span, StmtId, VarId};

/// A statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    /// Full extent; for `Compound` this covers the braces.
    pub span: Span,
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Compound(Vec<StmtId>),
    Expr(ExprId),
    /// Declaration of one or more local variables.
    Decl(Vec<VarId>),
    Return(Option<ExprId>),
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
        /// The `)` closing the condition.
        rparen: Span,
    },
    For {
        init: Option<StmtId>,
        cond: Option<ExprId>,
        inc: Option<ExprId>,
        body: StmtId,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    Do {
        body: StmtId,
        cond: ExprId,
    },
    /// `for (var : range) body`.
    RangeFor {
        var: VarId,
        range: ExprId,
        body: StmtId,
    },
    Break,
    Continue,
    Null,
    /// A statement the front end does not model.
    Other {
        stmts: Vec<StmtId>,
        exprs: Vec<ExprId>,
    },
}

impl StmtKind {
    /// Whether this statement repeats its body.
    pub fn is_loop(&self) -> bool {
        matches!(
            self,
            StmtKind::For { .. }
                | StmtKind::While { .. }
                | StmtKind::Do { .. }
                | StmtKind::RangeFor { .. }
        )
    }
}
