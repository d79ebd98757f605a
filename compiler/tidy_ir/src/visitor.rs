//! Syntax tree visitor.
//!
//! Nodes are visited by id so visitors can record identities (parent maps,
//! reference sets) without comparing node contents.
//!
//! Default implementations call `walk_*` functions that traverse children in
//! source order. Override `visit_*` methods to add behavior at specific
//! nodes, and call the matching `walk_*` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountDeletes {
//!     count: usize,
//! }
//!
//! impl<'tu> Visitor<'tu> for CountDeletes {
//!     fn visit_expr(&mut self, tu: &'tu TranslationUnit, id: ExprId) {
//!         if matches!(tu.expr(id).kind, ExprKind::Delete { .. }) {
//!             self.count += 1;
//!         }
//!         walk_expr(self, tu, id);
//!     }
//! }
//! ```

use crate::ast::{ExprKind, StmtKind, TranslationUnit};
use crate::{ExprId, FunctionId, StmtId, VarId};

/// Syntax tree visitor.
pub trait Visitor<'tu> {
    /// Visit a function declaration: its parameters, then its body.
    fn visit_function(&mut self, tu: &'tu TranslationUnit, id: FunctionId) {
        walk_function(self, tu, id);
    }

    /// Visit a statement.
    fn visit_stmt(&mut self, tu: &'tu TranslationUnit, id: StmtId) {
        walk_stmt(self, tu, id);
    }

    /// Visit an expression.
    fn visit_expr(&mut self, tu: &'tu TranslationUnit, id: ExprId) {
        walk_expr(self, tu, id);
    }

    /// Visit a variable declaration (and its initializer).
    fn visit_var(&mut self, tu: &'tu TranslationUnit, id: VarId) {
        walk_var(self, tu, id);
    }
}

/// Walk a function's parameters and body.
pub fn walk_function<'tu, V: Visitor<'tu> + ?Sized>(
    visitor: &mut V,
    tu: &'tu TranslationUnit,
    id: FunctionId,
) {
    let function = tu.function(id);
    for &param in &function.params {
        visitor.visit_var(tu, param);
    }
    if let Some(body) = function.body {
        visitor.visit_stmt(tu, body);
    }
}

/// Walk a variable's initializer.
pub fn walk_var<'tu, V: Visitor<'tu> + ?Sized>(visitor: &mut V, tu: &'tu TranslationUnit, id: VarId) {
    if let Some(init) = tu.var(id).init {
        visitor.visit_expr(tu, init);
    }
}

/// Walk the children of a statement.
pub fn walk_stmt<'tu, V: Visitor<'tu> + ?Sized>(
    visitor: &mut V,
    tu: &'tu TranslationUnit,
    id: StmtId,
) {
    match &tu.stmt(id).kind {
        StmtKind::Compound(stmts) => {
            for &stmt in stmts {
                visitor.visit_stmt(tu, stmt);
            }
        }
        StmtKind::Expr(expr) => visitor.visit_expr(tu, *expr),
        StmtKind::Decl(vars) => {
            for &var in vars {
                visitor.visit_var(tu, var);
            }
        }
        StmtKind::Return(value) => {
            if let Some(value) = value {
                visitor.visit_expr(tu, *value);
            }
        }
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
            ..
        } => {
            visitor.visit_expr(tu, *cond);
            visitor.visit_stmt(tu, *then_branch);
            if let Some(else_branch) = else_branch {
                visitor.visit_stmt(tu, *else_branch);
            }
        }
        StmtKind::For {
            init,
            cond,
            inc,
            body,
        } => {
            if let Some(init) = init {
                visitor.visit_stmt(tu, *init);
            }
            if let Some(cond) = cond {
                visitor.visit_expr(tu, *cond);
            }
            if let Some(inc) = inc {
                visitor.visit_expr(tu, *inc);
            }
            visitor.visit_stmt(tu, *body);
        }
        StmtKind::While { cond, body } => {
            visitor.visit_expr(tu, *cond);
            visitor.visit_stmt(tu, *body);
        }
        StmtKind::Do { body, cond } => {
            visitor.visit_stmt(tu, *body);
            visitor.visit_expr(tu, *cond);
        }
        StmtKind::RangeFor { var, range, body } => {
            visitor.visit_expr(tu, *range);
            visitor.visit_var(tu, *var);
            visitor.visit_stmt(tu, *body);
        }
        StmtKind::Other { stmts, exprs } => {
            for &stmt in stmts {
                visitor.visit_stmt(tu, stmt);
            }
            for &expr in exprs {
                visitor.visit_expr(tu, expr);
            }
        }
        StmtKind::Break | StmtKind::Continue | StmtKind::Null => {}
    }
}

/// Walk the children of an expression.
pub fn walk_expr<'tu, V: Visitor<'tu> + ?Sized>(
    visitor: &mut V,
    tu: &'tu TranslationUnit,
    id: ExprId,
) {
    match &tu.expr(id).kind {
        ExprKind::Paren(inner)
        | ExprKind::ExplicitCast(inner)
        | ExprKind::ImplicitCast { operand: inner, .. }
        | ExprKind::Unary { operand: inner, .. }
        | ExprKind::Member { base: inner, .. }
        | ExprKind::Delete { operand: inner, .. } => visitor.visit_expr(tu, *inner),
        ExprKind::Binary { lhs, rhs, .. }
        | ExprKind::Assign { lhs, rhs, .. }
        | ExprKind::CompoundAssign { lhs, rhs, .. } => {
            visitor.visit_expr(tu, *lhs);
            visitor.visit_expr(tu, *rhs);
        }
        ExprKind::Conditional {
            cond,
            then_expr,
            else_expr,
        } => {
            visitor.visit_expr(tu, *cond);
            visitor.visit_expr(tu, *then_expr);
            visitor.visit_expr(tu, *else_expr);
        }
        ExprKind::Call { callee, args, .. } => {
            visitor.visit_expr(tu, *callee);
            for &arg in args {
                visitor.visit_expr(tu, arg);
            }
        }
        ExprKind::MemberCall { object, args, .. } => {
            visitor.visit_expr(tu, *object);
            for &arg in args {
                visitor.visit_expr(tu, arg);
            }
        }
        ExprKind::Construct { args, .. } | ExprKind::Other(args) => {
            for &arg in args {
                visitor.visit_expr(tu, arg);
            }
        }
        ExprKind::DeclRef(_)
        | ExprKind::IntLit(_)
        | ExprKind::BoolLit(_)
        | ExprKind::StringLit(_)
        | ExprKind::NullPtr
        | ExprKind::This => {}
    }
}
