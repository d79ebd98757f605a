#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use tidy_ir::ast::{CastKind, UnaryOp};
use tidy_ir::{ExprId, FunctionFlags, FunctionId, Span};

use super::*;
use crate::test_helpers::Fixture;
use crate::unnecessary_value_param::UsageKind;
use crate::PoolTypeCost;

/// `void f(Widget w) {}` plus a caller whose body is built by `use_f`.
fn with_caller(
    use_f: impl FnOnce(&mut Fixture, FunctionId) -> ExprId,
) -> (TranslationUnit, FunctionId) {
    let mut fx = Fixture::new("");
    let widget = fx.widget();
    let w = fx.bare_param("w", widget);
    let body = fx.block(vec![]);
    let f = fx.define("f", vec![w], body);

    let expr = use_f(&mut fx, f);
    let stmt = fx.expr_stmt(expr);
    let body = fx.block(vec![stmt]);
    fx.define("caller", vec![], body);
    (fx.finish(), f)
}

fn call_of(fx: &mut Fixture, callee: ExprId) -> ExprId {
    let void = fx.void();
    fx.expr(
        ExprKind::Call {
            callee,
            args: vec![],
            params: vec![],
        },
        void,
    )
}

fn escapes(tu: &TranslationUnit, f: FunctionId) -> bool {
    is_referenced_outside_call(tu, tu.function(f).entity)
}

#[test]
fn direct_call_does_not_escape() {
    let (tu, f) = with_caller(|fx, f| {
        let callee = fx.b.function_ref(f, Span::DUMMY);
        call_of(fx, callee)
    });
    assert!(!escapes(&tu, f));
    assert!(escaping_entities(&tu).is_empty());
}

#[test]
fn parenthesized_decayed_callee_does_not_escape() {
    let (tu, f) = with_caller(|fx, f| {
        let void = fx.void();
        let callee = fx.b.function_ref(f, Span::DUMMY);
        let paren = fx.expr(ExprKind::Paren(callee), void);
        let decay = fx.expr(
            ExprKind::ImplicitCast {
                kind: CastKind::FunctionToPointerDecay,
                operand: paren,
            },
            void,
        );
        call_of(fx, decay)
    });
    assert!(!escapes(&tu, f));
}

#[test]
fn address_taken_escapes() {
    let (tu, f) = with_caller(|fx, f| {
        let void = fx.void();
        let target = fx.b.function_ref(f, Span::DUMMY);
        fx.expr(
            ExprKind::Unary {
                op: UnaryOp::AddrOf,
                operand: target,
            },
            void,
        )
    });
    assert!(escapes(&tu, f));
}

#[test]
fn passed_as_argument_escapes() {
    let (tu, f) = with_caller(|fx, f| {
        let arg = fx.b.function_ref(f, Span::DUMMY);
        fx.call("register_callback", vec![arg], vec![])
    });
    assert!(escapes(&tu, f));
}

/// A candidate for `void f(Widget w) { g(w); }` with the given flags.
fn candidate_for(flags: FunctionFlags, macro_param: bool) -> (TranslationUnit, FunctionCandidate) {
    let mut fx = Fixture::new("");
    let widget = fx.widget();
    let w = fx.bare_param("w", widget);
    fx.b.var_mut(w).from_macro = macro_param;
    let r = fx.bare_ref(w);
    let call = fx.call("g", vec![r], vec![widget]);
    let stmt = fx.expr_stmt(call);
    let body = fx.block(vec![stmt]);
    let entity = fx.entity();
    let f = fx.function(entity, "f", vec![w], Some(body), flags, Span::DUMMY);
    let tu = fx.finish();
    let cost = PoolTypeCost::new(tu.types());
    let candidate = FunctionCandidate::from_definition(&tu, &cost, f, false).unwrap();
    (tu, candidate)
}

#[test]
fn plain_function_may_be_rewritten() {
    let (tu, candidate) = candidate_for(FunctionFlags::empty(), false);
    assert_eq!(
        const_reference_denial(&tu, &candidate, &candidate.params[0]),
        None
    );
}

#[test]
fn virtual_method_is_report_only() {
    let (tu, candidate) = candidate_for(FunctionFlags::METHOD | FunctionFlags::VIRTUAL, false);
    assert_eq!(
        const_reference_denial(&tu, &candidate, &candidate.params[0]),
        Some(Denial::VirtualMethod)
    );
}

#[test]
fn macro_parameter_is_report_only() {
    let (tu, candidate) = candidate_for(FunctionFlags::empty(), true);
    assert_eq!(
        const_reference_denial(&tu, &candidate, &candidate.params[0]),
        Some(Denial::MacroParameter)
    );
}

#[test]
fn escaping_function_is_report_only() {
    let (tu, mut candidate) = candidate_for(FunctionFlags::empty(), false);
    candidate.has_escaping_reference = true;
    assert_eq!(
        const_reference_denial(&tu, &candidate, &candidate.params[0]),
        Some(Denial::EscapingReference)
    );
}

#[test]
fn macro_use_site_blocks_move() {
    let reference = Reference {
        expr: ExprId::new(4),
        span: Span::new(10, 11),
        from_macro: true,
        usage: UsageKind::CopyCtorArgument,
        inside_repetition: false,
    };
    assert_eq!(move_denial(&reference), Some(Denial::MacroReference));
    let plain = Reference {
        from_macro: false,
        ..reference
    };
    assert_eq!(move_denial(&plain), None);
}

#[test]
fn denials_describe_themselves() {
    for denial in [
        Denial::MacroParameter,
        Denial::VirtualMethod,
        Denial::EscapingReference,
        Denial::MacroReference,
    ] {
        assert!(!denial.as_str().is_empty());
    }
}
