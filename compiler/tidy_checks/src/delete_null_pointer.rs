//! `readability-delete-null-pointer`.
//!
//! `delete` on a null pointer does nothing, so guarding it is noise:
//!
//! ```text
//! if (p) delete p;                    // -> delete p;
//! if (p != nullptr) { delete p; }     // -> delete p;
//! ```
//!
//! An `if` with an `else` branch is still reported but left without edits.

use tidy_diagnostic::{CheckCode, Diagnostic, DiagnosticSink, TextEdit};
use tidy_ir::ast::{CastKind, ExprKind, StmtKind};
use tidy_ir::visitor::{walk_stmt, Visitor};
use tidy_ir::{ExprId, FileId, Span, StmtId, TranslationUnit, VarId};

use crate::{Check, CheckContext};

const MESSAGE: &str = "'if' statement is unnecessary; deleting null pointer has no effect";

/// The `readability-delete-null-pointer` check.
#[derive(Copy, Clone, Debug, Default)]
pub struct DeleteNullPointer;

impl Check for DeleteNullPointer {
    fn code(&self) -> CheckCode {
        CheckCode::DeleteNullPointer
    }

    fn check(&mut self, cx: &CheckContext<'_>, sink: &mut dyn DiagnosticSink) {
        let tu = cx.tu;
        for (_, function) in tu.functions() {
            let Some(body) = function.body else {
                continue;
            };
            let mut finder = GuardedDeleteFinder::default();
            finder.visit_stmt(tu, body);
            for guarded in finder.found {
                sink.report(guarded.into_diagnostic(function.file));
            }
        }
    }
}

/// An `if` whose only job is to guard a delete.
struct GuardedDelete {
    /// The whole `if` statement.
    span: Span,
    /// The `)` closing the condition.
    rparen: Span,
    has_else: bool,
    /// The braces around the delete, if any.
    braces: Option<Span>,
}

impl GuardedDelete {
    fn into_diagnostic(self, file: FileId) -> Diagnostic {
        let keyword = Span::new(self.span.start, self.span.start + 2);
        let diag = Diagnostic::warning(CheckCode::DeleteNullPointer)
            .with_message(MESSAGE)
            .at(file, keyword);
        if self.has_else {
            return diag;
        }

        let diag = diag
            .with_edit(TextEdit::delete(Span::new(self.span.start, self.rparen.end)).in_file(file));
        match self.braces {
            Some(braces) => diag
                .with_edit(TextEdit::delete(braces.first_byte()).in_file(file))
                .with_edit(TextEdit::delete(braces.last_byte()).in_file(file)),
            None => diag,
        }
    }
}

#[derive(Default)]
struct GuardedDeleteFinder {
    found: Vec<GuardedDelete>,
}

impl<'tu> Visitor<'tu> for GuardedDeleteFinder {
    fn visit_stmt(&mut self, tu: &'tu TranslationUnit, id: StmtId) {
        let stmt = tu.stmt(id);
        if let StmtKind::If {
            cond,
            then_branch,
            else_branch,
            rparen,
        } = &stmt.kind
        {
            if let Some(braces) = guarded_delete(tu, *cond, *then_branch) {
                tracing::debug!(stmt = id.raw(), "found null check guarding delete");
                self.found.push(GuardedDelete {
                    span: stmt.span,
                    rparen: *rparen,
                    has_else: else_branch.is_some(),
                    braces,
                });
            }
        }
        walk_stmt(self, tu, id);
    }
}

/// Whether `if (cond) then_branch` only guards deleting the tested
/// pointer. On a match, yields the span of the braces around the delete
/// (`None` when there are none).
fn guarded_delete(tu: &TranslationUnit, cond: ExprId, then_branch: StmtId) -> Option<Option<Span>> {
    let checked = checked_pointer(tu, cond)?;
    let then_stmt = tu.stmt(then_branch);
    let (deleted, braces) = match &then_stmt.kind {
        StmtKind::Compound(stmts) => match stmts.as_slice() {
            [only] => (deleted_pointer(tu, *only)?, Some(then_stmt.span)),
            _ => return None,
        },
        _ => (deleted_pointer(tu, then_branch)?, None),
    };
    (checked == deleted).then_some(braces)
}

/// The pointer tested by `p` or `p ==/!= nullptr` (either operand order).
fn checked_pointer(tu: &TranslationUnit, cond: ExprId) -> Option<VarId> {
    match &tu.expr(skip_parens(tu, cond)).kind {
        ExprKind::ImplicitCast {
            kind: CastKind::PointerToBoolean,
            operand,
        } => tu.referenced_var(*operand),
        ExprKind::Binary { op, lhs, rhs } if op.is_equality() => {
            if is_null_constant(tu, *lhs) {
                tu.referenced_var(*rhs)
            } else if is_null_constant(tu, *rhs) {
                tu.referenced_var(*lhs)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// The pointer deleted by the expression statement `stmt`.
fn deleted_pointer(tu: &TranslationUnit, stmt: StmtId) -> Option<VarId> {
    let StmtKind::Expr(expr) = tu.stmt(stmt).kind else {
        return None;
    };
    match &tu.expr(skip_parens(tu, expr)).kind {
        ExprKind::Delete { operand, .. } => tu.referenced_var(*operand),
        _ => None,
    }
}

fn is_null_constant(tu: &TranslationUnit, expr: ExprId) -> bool {
    matches!(
        tu.expr(skip_parens(tu, expr)).kind,
        ExprKind::ImplicitCast {
            kind: CastKind::NullToPointer,
            ..
        } | ExprKind::NullPtr
    )
}

fn skip_parens(tu: &TranslationUnit, mut expr: ExprId) -> ExprId {
    while let ExprKind::Paren(inner) = tu.expr(expr).kind {
        expr = inner;
    }
    expr
}

#[cfg(test)]
mod tests;
