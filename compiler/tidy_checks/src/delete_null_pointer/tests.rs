#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use tidy_ir::ast::BinaryOp;

use super::*;
use crate::test_helpers::{apply, run, Fixture};

/// `p` loaded as an rvalue.
fn load(fx: &mut Fixture, var: VarId) -> ExprId {
    let ty = fx.b.var_mut(var).ty;
    let r = fx.bare_ref(var);
    fx.expr(
        ExprKind::ImplicitCast {
            kind: CastKind::LValueToRValue,
            operand: r,
        },
        ty,
    )
}

/// `if (p)`.
fn truth_test(fx: &mut Fixture, var: VarId) -> ExprId {
    let loaded = load(fx, var);
    let bool_ty = fx.int();
    fx.expr(
        ExprKind::ImplicitCast {
            kind: CastKind::PointerToBoolean,
            operand: loaded,
        },
        bool_ty,
    )
}

/// `p != nullptr` (or `nullptr != p` when `flipped`).
fn null_compare(fx: &mut Fixture, var: VarId, flipped: bool) -> ExprId {
    let ptr_ty = fx.b.var_mut(var).ty;
    let loaded = load(fx, var);
    let null = fx.expr(ExprKind::NullPtr, ptr_ty);
    let null = fx.expr(
        ExprKind::ImplicitCast {
            kind: CastKind::NullToPointer,
            operand: null,
        },
        ptr_ty,
    );
    let (lhs, rhs) = if flipped { (null, loaded) } else { (loaded, null) };
    let bool_ty = fx.int();
    fx.expr(
        ExprKind::Binary {
            op: BinaryOp::Ne,
            lhs,
            rhs,
        },
        bool_ty,
    )
}

/// `delete p;` spanning the `nth` occurrence of `text`.
fn delete_stmt(fx: &mut Fixture, var: VarId, text: &str, nth: usize) -> StmtId {
    let loaded = load(fx, var);
    let void = fx.void();
    let delete = fx.expr(
        ExprKind::Delete {
            operand: loaded,
            array: false,
        },
        void,
    );
    let span = fx.span(text, nth);
    fx.b.stmt(StmtKind::Expr(delete), span)
}

fn int_ptr_param(fx: &mut Fixture, name: &str) -> VarId {
    let int = fx.int();
    let ptr = fx.pointer(int);
    fx.bare_param(name, ptr)
}

/// Wraps `if_stmt` in a body and defines `f(params)`.
fn define_with(fx: &mut Fixture, params: Vec<VarId>, if_stmt: StmtId) {
    let body = fx.block(vec![if_stmt]);
    fx.define("f", params, body);
}

fn if_stmt(
    fx: &mut Fixture,
    cond: ExprId,
    then_branch: StmtId,
    else_branch: Option<StmtId>,
    text: &str,
) -> StmtId {
    let span = fx.span(text, 0);
    let offset = span.start + u32::try_from(text.find(')').unwrap()).unwrap();
    let rparen = Span::new(offset, offset + 1);
    fx.b.stmt(
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
            rparen,
        },
        span,
    )
}

#[test]
fn guarded_delete_is_unwrapped() {
    let mut fx = Fixture::new("void f(int* p) { if (p) delete p; }");
    let p = int_ptr_param(&mut fx, "p");
    let cond = truth_test(&mut fx, p);
    let delete = delete_stmt(&mut fx, p, "delete p;", 0);
    let guard = if_stmt(&mut fx, cond, delete, None, "if (p) delete p;");
    define_with(&mut fx, vec![p], guard);
    let source = fx.source;
    let tu = fx.finish();

    let diags = run(&mut DeleteNullPointer, &tu);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, MESSAGE);
    assert_eq!(diags[0].span, Span::new(17, 19));
    assert_eq!(diags[0].edits, vec![TextEdit::delete(Span::new(17, 23))]);
    assert_eq!(apply(source, &diags[0]), "void f(int* p) {  delete p; }");
}

#[test]
fn braces_around_delete_are_removed() {
    let mut fx = Fixture::new("void f(int* p) { if (p != nullptr) { delete p; } }");
    let p = int_ptr_param(&mut fx, "p");
    let cond = null_compare(&mut fx, p, false);
    let delete = delete_stmt(&mut fx, p, "delete p;", 0);
    let braces = fx.span("{ delete p; }", 0);
    let then_branch = fx.b.stmt(StmtKind::Compound(vec![delete]), braces);
    let guard = if_stmt(
        &mut fx,
        cond,
        then_branch,
        None,
        "if (p != nullptr) { delete p; }",
    );
    define_with(&mut fx, vec![p], guard);
    let source = fx.source;
    let tu = fx.finish();

    let diags = run(&mut DeleteNullPointer, &tu);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].edits.len(), 3);
    assert_eq!(apply(source, &diags[0]), "void f(int* p) {   delete p;  }");
}

#[test]
fn null_on_the_left_is_recognized() {
    let mut fx = Fixture::new("void f(int* p) { if (nullptr != p) delete p; }");
    let p = int_ptr_param(&mut fx, "p");
    let cond = null_compare(&mut fx, p, true);
    let delete = delete_stmt(&mut fx, p, "delete p;", 0);
    let guard = if_stmt(&mut fx, cond, delete, None, "if (nullptr != p) delete p;");
    define_with(&mut fx, vec![p], guard);
    let source = fx.source;
    let tu = fx.finish();

    let diags = run(&mut DeleteNullPointer, &tu);
    assert_eq!(diags.len(), 1);
    assert_eq!(apply(source, &diags[0]), "void f(int* p) {  delete p; }");
}

#[test]
fn else_branch_reports_without_fix() {
    let mut fx = Fixture::new("void f(int* p) { if (p) delete p; else g(); }");
    let p = int_ptr_param(&mut fx, "p");
    let cond = truth_test(&mut fx, p);
    let delete = delete_stmt(&mut fx, p, "delete p;", 0);
    let call = fx.call("g", vec![], vec![]);
    let other = fx.expr_stmt(call);
    let guard = if_stmt(
        &mut fx,
        cond,
        delete,
        Some(other),
        "if (p) delete p; else g();",
    );
    define_with(&mut fx, vec![p], guard);
    let tu = fx.finish();

    let diags = run(&mut DeleteNullPointer, &tu);
    assert_eq!(diags.len(), 1);
    assert!(!diags[0].has_fix());
}

#[test]
fn deleting_another_pointer_is_not_reported() {
    let mut fx = Fixture::new("void f(int* p, int* q) { if (p) delete q; }");
    let p = int_ptr_param(&mut fx, "p");
    let q = int_ptr_param(&mut fx, "q");
    let cond = truth_test(&mut fx, p);
    let delete = delete_stmt(&mut fx, q, "delete q;", 0);
    let guard = if_stmt(&mut fx, cond, delete, None, "if (p) delete q;");
    define_with(&mut fx, vec![p, q], guard);
    let tu = fx.finish();

    assert!(run(&mut DeleteNullPointer, &tu).is_empty());
}

#[test]
fn guard_with_more_statements_is_not_reported() {
    let mut fx = Fixture::new("void f(int* p) { if (p) { delete p; g(); } }");
    let p = int_ptr_param(&mut fx, "p");
    let cond = truth_test(&mut fx, p);
    let delete = delete_stmt(&mut fx, p, "delete p;", 0);
    let call = fx.call("g", vec![], vec![]);
    let other = fx.expr_stmt(call);
    let braces = fx.span("{ delete p; g(); }", 0);
    let then_branch = fx.b.stmt(StmtKind::Compound(vec![delete, other]), braces);
    let guard = if_stmt(&mut fx, cond, then_branch, None, "if (p) { delete p; g(); }");
    define_with(&mut fx, vec![p], guard);
    let tu = fx.finish();

    assert!(run(&mut DeleteNullPointer, &tu).is_empty());
}

#[test]
fn guard_nested_in_loop_is_found() {
    let mut fx = Fixture::new("void f(int* p) { while (g()) if (p) delete p; }");
    let p = int_ptr_param(&mut fx, "p");
    let cond = truth_test(&mut fx, p);
    let delete = delete_stmt(&mut fx, p, "delete p;", 0);
    let guard = if_stmt(&mut fx, cond, delete, None, "if (p) delete p;");
    let loop_cond = fx.call("g", vec![], vec![]);
    let looped = fx.stmt(StmtKind::While {
        cond: loop_cond,
        body: guard,
    });
    define_with(&mut fx, vec![p], looped);
    let source = fx.source;
    let tu = fx.finish();

    let diags = run(&mut DeleteNullPointer, &tu);
    assert_eq!(diags.len(), 1);
    assert_eq!(
        apply(source, &diags[0]),
        "void f(int* p) { while (g())  delete p; }"
    );
}
